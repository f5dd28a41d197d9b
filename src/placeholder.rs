use anyhow::{Result, anyhow};
use rand::Rng;
use raylib::prelude::*;

use crate::constants::{CARD_HEIGHT, CARD_WIDTH};

// Palette pairs for generated cards (gradient start/end)
const PALETTES: [(Color, Color); 5] = [
    (Color::new(0x6a, 0xa7, 0xff, 255), Color::new(0xa1, 0xff, 0xe0, 255)),
    (Color::new(0xff, 0x8a, 0x5b, 255), Color::new(0xff, 0xd2, 0x6a, 255)),
    (Color::new(0x9b, 0x6b, 0xff, 255), Color::new(0xff, 0x8b, 0xf2, 255)),
    (Color::new(0x70, 0xe1, 0xf5, 255), Color::new(0xff, 0xd1, 0x94, 255)),
    (Color::new(0x00, 0xc9, 0xff, 255), Color::new(0x92, 0xfe, 0x9d, 255)),
];

/// Generate gradient filler cards so the demo runs without an image
/// directory. Random palette and gradient direction per card.
pub fn placeholder_textures(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    count: usize,
) -> Result<Vec<Texture2D>> {
    let mut rng = rand::rng();
    let mut textures = Vec::with_capacity(count);

    for _ in 0..count {
        let (start, end) = PALETTES[rng.random_range(0..PALETTES.len())];
        let direction = rng.random_range(0..360);

        let image = Image::gen_image_gradient_linear(
            CARD_WIDTH as i32,
            CARD_HEIGHT as i32,
            direction,
            start,
            end,
        );

        let texture = rl
            .load_texture_from_image(thread, &image)
            .map_err(|e| anyhow!("failed to create placeholder texture: {}", e))?;
        textures.push(texture);
    }

    Ok(textures)
}
