use raylib::prelude::*;

use crate::card::Card;
use crate::layout::CardLayout;

/// The fixed-size card collection. Mounted once; never resized afterwards.
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new(textures: Vec<Texture2D>) -> Self {
        Self {
            cards: textures.into_iter().map(Card::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn snap_layouts(&mut self, layouts: &[CardLayout]) {
        for (card, layout) in self.cards.iter_mut().zip(layouts) {
            card.snap_layout(layout);
        }
    }

    pub fn apply_layouts(&mut self, layouts: &[CardLayout], duration: f32) {
        for (card, layout) in self.cards.iter_mut().zip(layouts) {
            card.apply_layout(layout, duration);
        }
    }

    pub fn update(&mut self, dt: f32) {
        for card in self.cards.iter_mut() {
            card.update(dt);
        }
    }

    /// Draw back-to-front so lower order (higher z) lands on top.
    pub fn draw(&self, d: &mut RaylibDrawHandle, stack_center: Vector2) {
        let mut draw_order: Vec<usize> = (0..self.cards.len()).collect();
        draw_order.sort_by_key(|&i| self.cards[i].z_index);

        for i in draw_order {
            self.cards[i].draw(d, stack_center);
        }
    }
}
