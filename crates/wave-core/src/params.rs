use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    #[error("{name} must be finite and positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f64 },
    #[error("min_columns must be at least 1")]
    NoColumns,
}

/// Runtime-tunable wave-field parameters. Defaults come from [`crate::constants`].
#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub amplitude: f64,
    pub smoothness: f64,
    pub speed: f64,
    pub ripple_radius: f64,
    pub ripple_strength: f64,
    pub ease_divisor: f64,
    pub min_columns: u32,
    pub noise_seed: u32,
    /// Re-evaluate density whenever a completed FPS sample falls below the
    /// threshold, not only on resize.
    pub adapt_on_low_fps: bool,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            amplitude: AMPLITUDE,
            smoothness: SMOOTHNESS,
            speed: SPEED,
            ripple_radius: RIPPLE_RADIUS,
            ripple_strength: RIPPLE_STRENGTH,
            ease_divisor: POINTER_EASE_DIVISOR,
            min_columns: MIN_COLUMNS,
            noise_seed: NOISE_SEED,
            adapt_on_low_fps: false,
        }
    }
}

impl FieldParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        positive("smoothness", self.smoothness)?;
        positive("speed", self.speed)?;
        positive("ripple_radius", self.ripple_radius)?;
        // the filter only converges for divisors >= 1
        if !(self.ease_divisor.is_finite() && self.ease_divisor >= 1.0) {
            return Err(ParamsError::NotPositive {
                name: "ease_divisor",
                value: self.ease_divisor,
            });
        }
        finite("amplitude", self.amplitude)?;
        finite("ripple_strength", self.ripple_strength)?;
        if self.min_columns == 0 {
            return Err(ParamsError::NoColumns);
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ParamsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ParamsError::NotPositive { name, value })
    }
}

fn finite(name: &'static str, value: f64) -> Result<(), ParamsError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParamsError::NotFinite { name, value })
    }
}
