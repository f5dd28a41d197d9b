use crate::config::CarouselConfig;

/// Visual target for one card, computed from its circular distance behind
/// the active card. Pure data; the renderer decides how to realize it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardLayout {
    pub order: usize,    // 0 = front-most
    pub rotation: f32,   // Fan rotation (degrees)
    pub drop: f32,       // Vertical offset (px), grows as the card recedes
    pub depth: f32,      // Depth offset (px), negative behind the screen plane
    pub scale: f32,
    pub brightness: f32, // 1.0 for the front card, darker behind
    pub blur: f32,       // Blur radius (px), 0 for the front card
    pub z_index: i32,    // Higher draws on top
    pub active: bool,
}

/// One layout pass: a transform for every card position given the active
/// index. `order = (pos - active + len) mod len`, so the orders assigned are
/// exactly 0..len with no repeats and order 0 lands on the active card.
pub fn stack_layout(len: usize, active_index: usize, cfg: &CarouselConfig) -> Vec<CardLayout> {
    // Shrink the fan as the deck grows so many cards don't fan off-screen
    let base_angle = (15.0 - 0.5 * len as f32).clamp(cfg.fan_angle_min, cfg.fan_angle_max);
    let middle = (len / 2) as f32;

    (0..len)
        .map(|pos| {
            let order = (pos + len - active_index) % len;
            let front = order == 0;

            // Fixed fan from the card's mount position, plus progressive
            // fan-out the further back it currently sits
            let rotation = (pos as f32 - middle) * base_angle + order as f32 * cfg.fan_step;

            CardLayout {
                order,
                rotation,
                drop: order as f32 * cfg.drop_step,
                depth: -(order as f32) * cfg.depth_step,
                scale: (1.0 - order as f32 * cfg.scale_step).max(cfg.scale_floor),
                brightness: if front {
                    1.0
                } else {
                    (1.0 - order as f32 * cfg.dim_step).max(cfg.dim_floor)
                },
                blur: if front { 0.0 } else { order as f32 * cfg.blur_step },
                z_index: 10 + (len - order) as i32,
                active: front,
            }
        })
        .collect()
}
