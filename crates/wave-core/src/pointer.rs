use crate::constants::{POINTER_EASE_DIVISOR, POINTER_SENTINEL};
use glam::DVec2;

/// Raw pointer target plus a low-pass filtered copy used by the ripple.
///
/// The raw target changes on every input event, the eased position once per
/// frame. The filter step is per frame, not per second, so smoothing is
/// visually faster at higher refresh rates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerTracker {
    raw: DVec2,
    eased: DVec2,
    divisor: f64,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(POINTER_EASE_DIVISOR)
    }
}

impl PointerTracker {
    /// Both positions start far off-surface so no ripple shows before the first move.
    pub fn new(divisor: f64) -> Self {
        let sentinel = DVec2::splat(POINTER_SENTINEL);
        Self {
            raw: sentinel,
            eased: sentinel,
            divisor,
        }
    }

    #[inline]
    pub fn set_target(&mut self, x: f64, y: f64) {
        self.raw = DVec2::new(x, y);
    }

    /// One easing step: `eased += (raw - eased) / divisor` on each axis.
    #[inline]
    pub fn ease(&mut self) {
        self.eased += (self.raw - self.eased) / self.divisor;
    }

    #[inline]
    pub fn raw(&self) -> DVec2 {
        self.raw
    }

    #[inline]
    pub fn eased(&self) -> DVec2 {
        self.eased
    }
}
