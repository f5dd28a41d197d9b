pub const WINDOW_WIDTH: i32 = 960;   // Initial window width
pub const WINDOW_HEIGHT: i32 = 720;  // Initial window height
pub const FPS: u32 = 60;             // Frames per second

pub const CARD_WIDTH: f32 = 320.0;   // Card frame width (px)
pub const CARD_HEIGHT: f32 = 500.0;  // Card frame height (px)

pub const PERSPECTIVE: f32 = 1000.0; // Viewer distance for the depth -> scale projection (px)

pub const MOTION_DURATION: f32 = 6.0; // One-shot pan/zoom run on the front card (seconds)
pub const MOTION_ZOOM: f32 = 0.15;    // Zoom-in amount reached at the end of the one-shot

