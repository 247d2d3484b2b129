/// Page wiring constants for the web front end.
///
/// Element ids must match the host page markup.
pub const CANVAS_ID: &str = "waveCanvas";
pub const FPS_COUNTER_ID: &str = "fps-counter";

// Quiet period before a burst of resize events regenerates the grid
pub const RESIZE_DEBOUNCE_MS: i32 = 150;

// Used when the browser reports no usable devicePixelRatio
pub const DEFAULT_PIXEL_RATIO: f64 = 1.0;
