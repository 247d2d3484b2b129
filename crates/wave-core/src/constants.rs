/// Wave-field tuning constants.
///
/// Lengths are in logical (CSS) pixels, time is in the field's own
/// accumulator units unless the name says otherwise.
// Noise displacement
pub const AMPLITUDE: f64 = 25.0;
pub const SMOOTHNESS: f64 = 300.0;
pub const SPEED: f64 = 0.015; // accumulator advance per rendered frame

// Fixed permutation seed so every page load draws the same field
pub const NOISE_SEED: u32 = 0x5EED_0A7E;

// Pointer ripple
pub const RIPPLE_RADIUS: f64 = 50.0;
pub const RIPPLE_STRENGTH: f64 = 20.0;
pub const RIPPLE_SPATIAL_FREQ: f64 = 0.1;
pub const RIPPLE_TIME_SCALE: f64 = 3.0;

// Pointer easing: eased += (raw - eased) / divisor, once per frame
pub const POINTER_EASE_DIVISOR: f64 = 8.0;
pub const POINTER_SENTINEL: f64 = -9999.0;

// Grid density
pub const COLUMNS_PER_1000PX: f64 = 50.0;
pub const MIN_COLUMNS: u32 = 20;
pub const LOW_FPS_THRESHOLD: u32 = 40;
pub const LOW_FPS_DENSITY_SCALE: f64 = 0.8;

// Frame-rate sampling window (milliseconds)
pub const FPS_WINDOW_MS: f64 = 1000.0;

// Stroke
pub const LINE_WIDTH: f64 = 1.0;
pub const GRADIENT_EDGE: &str = "rgba(34, 34, 34, 0.8)";
pub const GRADIENT_MID: &str = "rgb(106, 106, 106)";
pub const GRADIENT_STOPS: [(f64, &str); 4] = [
    (0.0, GRADIENT_EDGE),
    (0.3, GRADIENT_MID),
    (0.6, GRADIENT_MID),
    (1.0, GRADIENT_EDGE),
];
