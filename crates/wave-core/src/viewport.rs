use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("viewport width must be finite and positive, got {0}")]
    Width(f64),
    #[error("viewport height must be finite and positive, got {0}")]
    Height(f64),
    #[error("device pixel ratio must be finite and positive, got {0}")]
    PixelRatio(f64),
}

/// Logical drawable size plus the device pixel ratio used for the backing store.
///
/// Only constructible with non-zero finite dimensions, which is what keeps the
/// density and grid arithmetic free of divisions by zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
    pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, pixel_ratio: f64) -> Result<Self, ViewportError> {
        if !(width.is_finite() && width > 0.0) {
            return Err(ViewportError::Width(width));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(ViewportError::Height(height));
        }
        if !(pixel_ratio.is_finite() && pixel_ratio > 0.0) {
            return Err(ViewportError::PixelRatio(pixel_ratio));
        }
        Ok(Self {
            width,
            height,
            pixel_ratio,
        })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    /// Backing-store size in physical pixels (`logical * pixel_ratio`, truncated).
    pub fn physical_size(&self) -> (u32, u32) {
        (
            (self.width * self.pixel_ratio) as u32,
            (self.height * self.pixel_ratio) as u32,
        )
    }
}
