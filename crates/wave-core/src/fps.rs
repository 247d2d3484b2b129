use crate::constants::FPS_WINDOW_MS;

/// Counts frames over fixed wall-clock windows.
///
/// The sample reads 0 until the first window closes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FpsMeter {
    fps: u32,
    frame_count: u32,
    window_start_ms: f64,
}

impl FpsMeter {
    pub fn new(now_ms: f64) -> Self {
        Self {
            fps: 0,
            frame_count: 0,
            window_start_ms: now_ms,
        }
    }

    /// Count one frame. Returns the new sample when a window has just closed.
    pub fn tick(&mut self, now_ms: f64) -> Option<u32> {
        self.frame_count += 1;
        if now_ms - self.window_start_ms >= FPS_WINDOW_MS {
            self.fps = self.frame_count;
            self.frame_count = 0;
            self.window_start_ms = now_ms;
            return Some(self.fps);
        }
        None
    }

    #[inline]
    pub fn fps(&self) -> u32 {
        self.fps
    }
}
