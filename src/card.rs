use raylib::prelude::*;

use crate::constants::*;
use crate::layout::CardLayout;

/// How the front card's imagery moves while it holds the front spot.
/// Chosen once from the image shape: wide images pan across, tall images
/// pan down, near-frame images zoom in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardMotion {
    PanHorizontal,
    PanVertical,
    Zoom,
}

pub fn classify_motion(tex_width: f32, tex_height: f32) -> CardMotion {
    let frame_aspect = CARD_WIDTH / CARD_HEIGHT;
    let aspect = tex_width / tex_height;
    if aspect > frame_aspect * 1.1 {
        CardMotion::PanHorizontal
    } else if aspect < frame_aspect * 0.9 {
        CardMotion::PanVertical
    } else {
        CardMotion::Zoom
    }
}

/// Source rect for a card at motion progress `t` in [0, 1]. Pans fit the
/// shorter frame axis and slide across the leftover span; zoom crops to the
/// frame aspect and tightens around the center.
pub fn motion_source_rec(motion: CardMotion, tex_width: f32, tex_height: f32, t: f32) -> Rectangle {
    let frame_aspect = CARD_WIDTH / CARD_HEIGHT;
    match motion {
        CardMotion::PanHorizontal => {
            let src_width = tex_height * frame_aspect;
            let slack = (tex_width - src_width).max(0.0);
            Rectangle::new(slack * t, 0.0, src_width, tex_height)
        }
        CardMotion::PanVertical => {
            let src_height = tex_width / frame_aspect;
            let slack = (tex_height - src_height).max(0.0);
            Rectangle::new(0.0, slack * t, tex_width, src_height)
        }
        CardMotion::Zoom => {
            let (mut src_width, mut src_height) = if tex_width / tex_height > frame_aspect {
                (tex_height * frame_aspect, tex_height)
            } else {
                (tex_width, tex_width / frame_aspect)
            };
            let shrink = 1.0 / (1.0 + MOTION_ZOOM * t);
            src_width *= shrink;
            src_height *= shrink;
            Rectangle::new(
                (tex_width - src_width) * 0.5,
                (tex_height - src_height) * 0.5,
                src_width,
                src_height,
            )
        }
    }
}

/// One visual card: a texture plus its current transform state. Layout
/// changes glide toward their target over the transition duration; the
/// controller decides targets, the card only tweens and draws.
pub struct Card {
    texture: Texture2D,
    motion: CardMotion,
    motion_timer: f32,

    rotation: f32,
    drop: f32,
    depth: f32,
    scale: f32,
    brightness: f32,
    blur: f32,

    pub z_index: i32,
    pub active: bool,

    end_rotation: f32,
    end_drop: f32,
    end_depth: f32,
    end_scale: f32,
    end_brightness: f32,
    end_blur: f32,

    animation_timer: f32,
    animation_duration: f32,
    pub is_animating: bool,

    tween_rotation: Option<ease::Tween>,
    tween_drop: Option<ease::Tween>,
    tween_depth: Option<ease::Tween>,
    tween_scale: Option<ease::Tween>,
    tween_brightness: Option<ease::Tween>,
    tween_blur: Option<ease::Tween>,
}

impl Card {
    pub fn new(texture: Texture2D) -> Self {
        let motion = classify_motion(texture.width() as f32, texture.height() as f32);
        Self {
            texture,
            motion,
            motion_timer: 0.0,

            rotation: 0.0,
            drop: 0.0,
            depth: 0.0,
            scale: 1.0,
            brightness: 1.0,
            blur: 0.0,

            z_index: 0,
            active: false,

            end_rotation: 0.0,
            end_drop: 0.0,
            end_depth: 0.0,
            end_scale: 1.0,
            end_brightness: 1.0,
            end_blur: 0.0,

            animation_timer: 0.0,
            animation_duration: 0.0,
            is_animating: false,

            tween_rotation: None,
            tween_drop: None,
            tween_depth: None,
            tween_scale: None,
            tween_brightness: None,
            tween_blur: None,
        }
    }

    /// Jump straight to a layout with no tween (initial pass).
    pub fn snap_layout(&mut self, layout: &CardLayout) {
        self.reset_motion(layout);
        self.rotation = layout.rotation;
        self.drop = layout.drop;
        self.depth = layout.depth;
        self.scale = layout.scale;
        self.brightness = layout.brightness;
        self.blur = layout.blur;
        self.z_index = layout.z_index;
        self.active = layout.active;

        self.end_rotation = layout.rotation;
        self.end_drop = layout.drop;
        self.end_depth = layout.depth;
        self.end_scale = layout.scale;
        self.end_brightness = layout.brightness;
        self.end_blur = layout.blur;

        self.is_animating = false;
        self.tween_rotation = None;
        self.tween_drop = None;
        self.tween_depth = None;
        self.tween_scale = None;
        self.tween_brightness = None;
        self.tween_blur = None;
    }

    /// Begin tweening from the current state toward a new layout. Z-order
    /// and the active marker switch immediately so the incoming front card
    /// rises above the stack for the whole transition.
    pub fn apply_layout(&mut self, layout: &CardLayout, duration: f32) {
        if duration <= 0.0 {
            self.snap_layout(layout);
            return;
        }

        self.reset_motion(layout);
        self.end_rotation = layout.rotation;
        self.end_drop = layout.drop;
        self.end_depth = layout.depth;
        self.end_scale = layout.scale;
        self.end_brightness = layout.brightness;
        self.end_blur = layout.blur;

        self.z_index = layout.z_index;
        self.active = layout.active;

        self.tween_rotation = Some(ease::Tween::new(ease::sine_in_out, self.rotation, layout.rotation, duration));
        self.tween_drop = Some(ease::Tween::new(ease::cubic_out, self.drop, layout.drop, duration));
        self.tween_depth = Some(ease::Tween::new(ease::cubic_out, self.depth, layout.depth, duration));
        self.tween_scale = Some(ease::Tween::new(ease::cubic_out, self.scale, layout.scale, duration));
        self.tween_brightness = Some(ease::Tween::new(ease::cubic_out, self.brightness, layout.brightness, duration));
        self.tween_blur = Some(ease::Tween::new(ease::cubic_out, self.blur, layout.blur, duration));

        self.animation_timer = 0.0;
        self.animation_duration = duration;
        self.is_animating = true;
    }

    // Fresh one-shot when the card takes the front; snap back to the start
    // state when it leaves
    fn reset_motion(&mut self, layout: &CardLayout) {
        if !(self.active && layout.active) {
            self.motion_timer = 0.0;
        }
    }

    pub fn update(&mut self, dt: f32) {
        // The front card's pan/zoom runs once to its end state and holds
        if self.active {
            self.motion_timer = (self.motion_timer + dt).min(MOTION_DURATION);
        }

        if !self.is_animating {
            return;
        }

        self.rotation = self.tween_rotation.as_mut().expect("Tween should be initialized").apply(dt);
        self.drop = self.tween_drop.as_mut().expect("Tween should be initialized").apply(dt);
        self.depth = self.tween_depth.as_mut().expect("Tween should be initialized").apply(dt);
        self.scale = self.tween_scale.as_mut().expect("Tween should be initialized").apply(dt);
        self.brightness = self.tween_brightness.as_mut().expect("Tween should be initialized").apply(dt);
        self.blur = self.tween_blur.as_mut().expect("Tween should be initialized").apply(dt);

        self.animation_timer += dt;
        if self.animation_timer >= self.animation_duration {
            self.is_animating = false;
            self.rotation = self.end_rotation;
            self.drop = self.end_drop;
            self.depth = self.end_depth;
            self.scale = self.end_scale;
            self.brightness = self.end_brightness;
            self.blur = self.end_blur;
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, stack_center: Vector2) {
        let tex_width = self.texture.width() as f32;
        let tex_height = self.texture.height() as f32;

        // Frame-aspect crop so any image covers the frame without
        // stretching; the front card's one-shot pan/zoom moves it
        let t = (self.motion_timer / MOTION_DURATION).min(1.0);
        let source_rec = motion_source_rec(self.motion, tex_width, tex_height, t);

        // Depth recedes behind the screen plane as a perspective shrink
        let projected = self.scale * PERSPECTIVE / (PERSPECTIVE - self.depth);
        let dest_width = CARD_WIDTH * projected;
        let dest_height = CARD_HEIGHT * projected;

        let center = Vector2::new(stack_center.x, stack_center.y + self.drop);
        let origin = Vector2::new(dest_width * 0.5, dest_height * 0.5);

        let level = (self.brightness * 255.0) as u8;
        let tint = Color::new(level, level, level, 255);

        // Cheap blur: alpha ghosts offset by the blur radius under the main pass
        if self.blur > 0.05 {
            let ghost = Color::new(level, level, level, 60);
            for (ox, oy) in [(-self.blur, 0.0), (self.blur, 0.0), (0.0, -self.blur), (0.0, self.blur)] {
                d.draw_texture_pro(
                    &self.texture,
                    source_rec,
                    Rectangle::new(center.x + ox, center.y + oy, dest_width, dest_height),
                    origin,
                    self.rotation,
                    ghost,
                );
            }
        }

        d.draw_texture_pro(
            &self.texture,
            source_rec,
            Rectangle::new(center.x, center.y, dest_width, dest_height),
            origin,
            self.rotation,
            tint,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn motion_follows_image_shape() {
        // Wide images pan across, tall images pan down, near-frame zoom
        assert_eq!(classify_motion(1600.0, 1000.0), CardMotion::PanHorizontal);
        assert_eq!(classify_motion(800.0, 1600.0), CardMotion::PanVertical);
        assert_eq!(classify_motion(960.0, 1440.0), CardMotion::Zoom);
    }

    #[test]
    fn horizontal_pan_traverses_the_slack() {
        let start = motion_source_rec(CardMotion::PanHorizontal, 1600.0, 1000.0, 0.0);
        let end = motion_source_rec(CardMotion::PanHorizontal, 1600.0, 1000.0, 1.0);

        // Fits the full height, frame-aspect width
        assert_eq!(start.height, 1000.0);
        assert_eq!(start.width, 1000.0 * CARD_WIDTH / CARD_HEIGHT);

        assert_eq!(start.x, 0.0);
        assert_eq!(end.x + end.width, 1600.0);
        assert_eq!(start.width, end.width);
    }

    #[test]
    fn vertical_pan_stays_inside_the_texture() {
        for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let rec = motion_source_rec(CardMotion::PanVertical, 800.0, 1600.0, t);
            assert!(rec.y >= 0.0);
            assert!(rec.y + rec.height <= 1600.0);
            assert_eq!(rec.width, 800.0);
        }
    }

    #[test]
    fn zoom_tightens_around_the_center() {
        let start = motion_source_rec(CardMotion::Zoom, 960.0, 1440.0, 0.0);
        let end = motion_source_rec(CardMotion::Zoom, 960.0, 1440.0, 1.0);

        assert!(end.width < start.width);
        assert!(end.height < start.height);
        let zoomed = start.width / (1.0 + MOTION_ZOOM);
        assert!((end.width - zoomed).abs() < 1e-3);

        // Center stays put
        assert!((end.x + end.width * 0.5 - 480.0).abs() < 1e-3);
        assert!((end.y + end.height * 0.5 - 720.0).abs() < 1e-3);
    }

    #[test]
    fn pan_with_no_slack_is_stationary() {
        // Texture already at frame aspect: nothing to traverse
        let w = CARD_WIDTH * 2.0;
        let h = CARD_HEIGHT * 2.0;
        let start = motion_source_rec(CardMotion::PanHorizontal, w, h, 0.0);
        let end = motion_source_rec(CardMotion::PanHorizontal, w, h, 1.0);
        assert_eq!(start.x, end.x);
        assert_eq!(start.y, end.y);
        assert_eq!(start.width, end.width);
        assert_eq!(start.height, end.height);
    }
}
