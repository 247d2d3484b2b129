//! Field sampler: noise displacement plus the pointer ripple, evaluated per vertex.

use crate::constants::{RIPPLE_SPATIAL_FREQ, RIPPLE_TIME_SCALE};
use crate::grid::Grid;
use crate::params::FieldParams;
use glam::DVec2;
use noise::{NoiseFn, SuperSimplex};

/// Linear falloff of the ripple: 1 at the pointer, 0 at and beyond `radius`.
#[inline]
pub fn ripple_influence(distance: f64, radius: f64) -> f64 {
    if distance < radius {
        1.0 - distance / radius
    } else {
        0.0
    }
}

pub struct FieldSampler {
    // spans roughly [-1, 1] in 2D
    noise: SuperSimplex,
    amplitude: f64,
    smoothness: f64,
    ripple_radius: f64,
    ripple_strength: f64,
}

impl FieldSampler {
    pub fn new(params: &FieldParams) -> Self {
        Self {
            noise: SuperSimplex::new(params.noise_seed),
            amplitude: params.amplitude,
            smoothness: params.smoothness,
            ripple_radius: params.ripple_radius,
            ripple_strength: params.ripple_strength,
        }
    }

    /// Noise value at a base position for time `t`, clamped to \[-1, 1\].
    pub fn noise_at(&self, base: DVec2, t: f64) -> f64 {
        let v = self
            .noise
            .get([base.x / self.smoothness, base.y / self.smoothness + t]);
        v.clamp(-1.0, 1.0)
    }

    /// Vertical ripple offset for a vertex `distance` away from the eased pointer.
    pub fn ripple(&self, distance: f64, t: f64) -> f64 {
        let influence = ripple_influence(distance, self.ripple_radius);
        if influence == 0.0 {
            return 0.0;
        }
        (distance * RIPPLE_SPATIAL_FREQ - t * RIPPLE_TIME_SCALE).sin()
            * self.ripple_strength
            * influence
    }

    /// Rendered position of a single vertex. `x` is never displaced.
    pub fn displace(&self, base: DVec2, pointer: DVec2, t: f64) -> DVec2 {
        let mut y = base.y + self.noise_at(base, t) * self.amplitude;
        y += self.ripple(base.distance(pointer), t);
        DVec2::new(base.x, y)
    }

    /// Recompute every rendered vertex. No culling; cost is one noise lookup per vertex.
    pub fn sample(&self, grid: &mut Grid, pointer: DVec2, t: f64) {
        for (base, out) in grid.pairs_mut() {
            *out = self.displace(*base, pointer, t);
        }
    }
}
