//! Density controller: picks lattice column/row counts from the viewport and
//! the most recent frame-rate sample.

use crate::constants::{COLUMNS_PER_1000PX, LOW_FPS_DENSITY_SCALE, LOW_FPS_THRESHOLD};

/// Cell counts of the lattice. The grid holds `(rows + 1) x (cols + 1)` vertices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridDensity {
    pub cols: u32,
    pub rows: u32,
}

impl GridDensity {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        (self.cols as usize + 1) * (self.rows as usize + 1)
    }
}

/// Density before any frame-rate adjustment.
///
/// `cols = max(min_columns, floor(width / 1000 * 50))` and
/// `rows = floor(cols * height / width)`. A zero width yields zero rows.
pub fn base_density(width: f64, height: f64, min_columns: u32) -> GridDensity {
    let target_cells = (width / 1000.0 * COLUMNS_PER_1000PX).floor().max(0.0) as u32;
    let cols = target_cells.max(min_columns);
    let rows = if width > 0.0 {
        (cols as f64 * (height / width)).floor().max(0.0) as u32
    } else {
        0
    };
    GridDensity { cols, rows }
}

/// Shrink both counts by 20% when the sampled frame rate is under the threshold.
pub fn adjust_for_fps(density: GridDensity, fps: u32) -> GridDensity {
    if fps >= LOW_FPS_THRESHOLD {
        return density;
    }
    GridDensity {
        cols: (density.cols as f64 * LOW_FPS_DENSITY_SCALE).floor() as u32,
        rows: (density.rows as f64 * LOW_FPS_DENSITY_SCALE).floor() as u32,
    }
}

#[inline]
pub fn compute_density(width: f64, height: f64, fps: u32, min_columns: u32) -> GridDensity {
    adjust_for_fps(base_density(width, height, min_columns), fps)
}
