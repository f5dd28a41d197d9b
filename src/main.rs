use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use raylib::prelude::*;

mod card;
mod config;
mod constants;
mod controller;
mod deck;
mod layout;
mod placeholder;
mod texture_loader;

use crate::config::CarouselConfig;
use crate::constants::*;
use crate::controller::Carousel;
use crate::deck::Deck;
use crate::placeholder::placeholder_textures;
use crate::texture_loader::{collect_card_images, load_card_texture};

#[derive(Parser, Debug)]
#[command(name = "cardstack", about = "Hero card stack carousel demo")]
struct Args {
    /// Directory of card images; omit to run with generated gradient cards
    images: Option<PathBuf>,

    /// Number of generated cards when no image directory is given
    #[arg(long, default_value_t = 5)]
    cards: usize,

    /// Seconds between auto-advances
    #[arg(long, default_value_t = CarouselConfig::default().rotation_interval)]
    interval: f32,

    /// Seconds a layout transition runs (advances arriving sooner are dropped)
    #[arg(long, default_value_t = CarouselConfig::default().transition_duration)]
    duration: f32,

    /// Lower bound for the per-card fan angle (degrees)
    #[arg(long, default_value_t = CarouselConfig::default().fan_angle_min)]
    fan_min: f32,

    /// Upper bound for the per-card fan angle (degrees)
    #[arg(long, default_value_t = CarouselConfig::default().fan_angle_max)]
    fan_max: f32,

    /// Suppress auto-rotation (the reduced-motion preference)
    #[arg(long, env = "CARDSTACK_REDUCED_MOTION")]
    reduced_motion: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = CarouselConfig {
        fan_angle_min: args.fan_min,
        fan_angle_max: args.fan_max,
        transition_duration: args.duration,
        rotation_interval: args.interval,
        reduced_motion: args.reduced_motion,
        ..CarouselConfig::default()
    };

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Hero Card Stack")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Mount the deck ---
    let textures = match &args.images {
        Some(dir) => {
            let mut textures = Vec::new();
            for path in collect_card_images(dir)? {
                match load_card_texture(&mut rl, &thread, &path) {
                    Ok(texture) => textures.push(texture),
                    Err(e) => log::warn!("skipping card: {}", e),
                }
            }
            textures
        }
        None => placeholder_textures(&mut rl, &thread, args.cards)?,
    };

    let mut deck = Deck::new(textures);

    // Empty deck disables the component entirely (guard, not an error)
    if deck.is_empty() {
        log::warn!("no cards to show; exiting");
        return Ok(());
    }

    let mut carousel = Carousel::new(deck.len(), config);

    // Initial layout pass, then arm the auto-rotation (gated internally by
    // the reduced-motion preference)
    deck.snap_layouts(&carousel.layout());
    carousel.start_auto_rotation();

    let mut hovered = false;

    // --- Main loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        let screen_width = rl.get_screen_width() as f32;
        let screen_height = rl.get_screen_height() as f32;
        let stack_center = Vector2::new(screen_width * 0.5, screen_height * 0.45);

        // The front card frame is the pointer target for hover and clicks
        let frame = Rectangle::new(
            stack_center.x - CARD_WIDTH * 0.5,
            stack_center.y - CARD_HEIGHT * 0.5,
            CARD_WIDTH,
            CARD_HEIGHT,
        );

        // Hover pauses auto-rotation; leaving resumes it
        let over = frame.check_collision_point_rec(rl.get_mouse_position());
        if over != hovered {
            if over {
                carousel.stop_auto_rotation();
            } else {
                carousel.start_auto_rotation();
            }
            hovered = over;
        }

        // Pointer and keyboard activation both advance the deck
        let mut advanced = false;
        if over && rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            advanced |= carousel.activate();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_ENTER) || rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
            advanced |= carousel.activate();
        }

        advanced |= carousel.tick(dt);
        if advanced {
            deck.apply_layouts(&carousel.layout(), config.transition_duration);
        }

        deck.update(dt);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::new(0x10, 0x14, 0x1c, 255));
        deck.draw(&mut d, stack_center);
    }

    Ok(())
}
