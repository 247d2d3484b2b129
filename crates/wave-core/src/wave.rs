//! The wave-field renderer instance: owns the viewport, grid, pointer, frame
//! meter and time accumulator, and advances them one tick at a time.

use crate::constants::LOW_FPS_THRESHOLD;
use crate::density::{compute_density, GridDensity};
use crate::field::FieldSampler;
use crate::fps::FpsMeter;
use crate::grid::Grid;
use crate::params::{FieldParams, ParamsError};
use crate::pointer::PointerTracker;
use crate::render::draw_grid;
use crate::surface::{configure_surface, Surface};
use crate::viewport::{Viewport, ViewportError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WaveError {
    #[error("invalid viewport: {0}")]
    Viewport(#[from] ViewportError),
    #[error("invalid field parameters: {0}")]
    Params(#[from] ParamsError),
}

pub struct WaveField {
    params: FieldParams,
    viewport: Viewport,
    grid: Grid,
    sampler: FieldSampler,
    pointer: PointerTracker,
    fps: FpsMeter,
    t: f64,
}

impl WaveField {
    /// Build the field for `viewport`. `now_ms` opens the first frame-rate window.
    ///
    /// The frame-rate sample is still 0 here, so the initial grid carries the
    /// low-FPS shrink until the next resize.
    pub fn new(viewport: Viewport, params: FieldParams, now_ms: f64) -> Result<Self, WaveError> {
        params.validate()?;
        let fps = FpsMeter::new(now_ms);
        let density = density_for(&viewport, &params, fps.fps());
        let grid = Grid::generate(&viewport, density);
        log::info!(
            "[wave] created {}x{} @{}x cols={} rows={}",
            viewport.width(),
            viewport.height(),
            viewport.pixel_ratio(),
            density.cols,
            density.rows
        );
        Ok(Self {
            sampler: FieldSampler::new(&params),
            pointer: PointerTracker::new(params.ease_divisor),
            params,
            viewport,
            grid,
            fps,
            t: 0.0,
        })
    }

    /// Reconfigure the surface for a new viewport and regenerate the grid.
    pub fn resize<S: Surface + ?Sized>(&mut self, viewport: Viewport, surface: &mut S) {
        self.viewport = viewport;
        configure_surface(surface, &self.viewport);
        self.regenerate();
    }

    /// Latest raw pointer position in logical pixels.
    #[inline]
    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer.set_target(x, y);
    }

    /// One animation frame: sample the frame rate, ease the pointer, displace
    /// every vertex, draw, then advance time.
    ///
    /// Returns the frame-rate sample if a measurement window closed this tick.
    pub fn step<S: Surface + ?Sized>(&mut self, now_ms: f64, surface: &mut S) -> Option<u32> {
        let sample = self.fps.tick(now_ms);
        self.pointer.ease();

        if let Some(fps) = sample {
            if self.params.adapt_on_low_fps && fps < LOW_FPS_THRESHOLD {
                let density = density_for(&self.viewport, &self.params, fps);
                if density != self.grid.density() {
                    log::info!(
                        "[wave] fps={} below {}, shrinking grid to cols={} rows={}",
                        fps,
                        LOW_FPS_THRESHOLD,
                        density.cols,
                        density.rows
                    );
                    self.grid = Grid::generate(&self.viewport, density);
                }
            }
        }

        self.sampler.sample(&mut self.grid, self.pointer.eased(), self.t);
        draw_grid(surface, &self.grid, &self.viewport);
        self.t += self.params.speed;
        sample
    }

    fn regenerate(&mut self) {
        let density = density_for(&self.viewport, &self.params, self.fps.fps());
        self.grid = Grid::generate(&self.viewport, density);
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn density(&self) -> GridDensity {
        self.grid.density()
    }

    #[inline]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[inline]
    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    #[inline]
    pub fn sampler(&self) -> &FieldSampler {
        &self.sampler
    }

    #[inline]
    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    #[inline]
    pub fn fps(&self) -> u32 {
        self.fps.fps()
    }

    /// Time accumulator; grows by `speed` per rendered frame and is never reset.
    #[inline]
    pub fn time(&self) -> f64 {
        self.t
    }
}

#[inline]
fn density_for(viewport: &Viewport, params: &FieldParams, fps: u32) -> GridDensity {
    compute_density(viewport.width(), viewport.height(), fps, params.min_columns)
}
