/// Tunable constants for the card stack.
///
/// The numbers the layout and the controller depend on live here rather than
/// being scattered as magic values; the CLI maps its flags onto this struct.
#[derive(Debug, Clone, Copy)]
pub struct CarouselConfig {
    pub fan_angle_min: f32,       // Lower bound for the per-card fan angle (degrees)
    pub fan_angle_max: f32,       // Upper bound for the per-card fan angle (degrees)
    pub fan_step: f32,            // Extra rotation added per order step (degrees)

    pub drop_step: f32,           // Vertical drop per order step (px)
    pub depth_step: f32,          // Depth recession per order step (px)

    pub scale_step: f32,          // Scale reduction per order step
    pub scale_floor: f32,         // Receding cards never shrink below this

    pub dim_step: f32,            // Brightness reduction per order step
    pub dim_floor: f32,           // Receding cards never darken below this
    pub blur_step: f32,           // Blur radius per order step (px)

    pub transition_duration: f32, // How long a layout transition runs (seconds)
    pub rotation_interval: f32,   // Auto-rotation period (seconds)

    pub reduced_motion: bool,     // Captured once at startup; gates auto-rotation
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            fan_angle_min: 3.0,
            fan_angle_max: 12.0,
            fan_step: 3.0,
            drop_step: 8.0,
            depth_step: 15.0,
            scale_step: 0.05,
            scale_floor: 0.9,
            dim_step: 0.1,
            dim_floor: 0.4,
            blur_step: 0.5,
            transition_duration: 1.2,
            rotation_interval: 3.5,
            reduced_motion: false,
        }
    }
}
