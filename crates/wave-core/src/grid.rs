//! Vertex lattice spanning the drawable surface.

use crate::density::GridDensity;
use crate::viewport::Viewport;
use glam::DVec2;

/// Base and rendered vertex positions, stored row-major with stride `cols + 1`.
///
/// Both arrays are built together in [`Grid::generate`] and only ever replaced
/// as a whole, so their lengths always match.
#[derive(Clone, Debug)]
pub struct Grid {
    density: GridDensity,
    base: Vec<DVec2>,
    rendered: Vec<DVec2>,
}

impl Grid {
    pub fn generate(viewport: &Viewport, density: GridDensity) -> Self {
        let GridDensity { cols, rows } = density;
        let mut base = Vec::with_capacity(density.vertex_count());
        for y in 0..=rows {
            let py = fraction(y, rows) * viewport.height();
            for x in 0..=cols {
                let px = fraction(x, cols) * viewport.width();
                base.push(DVec2::new(px, py));
            }
        }
        let rendered = base.clone();
        log::debug!(
            "[grid] generated cols={} rows={} vertices={}",
            cols,
            rows,
            base.len()
        );
        Self {
            density,
            base,
            rendered,
        }
    }

    #[inline]
    pub fn density(&self) -> GridDensity {
        self.density
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.density.cols
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.density.rows
    }

    /// Vertices per row, `cols + 1`.
    #[inline]
    pub fn stride(&self) -> usize {
        self.density.cols as usize + 1
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row <= self.density.rows as usize && col <= self.density.cols as usize)
            .then(|| row * self.stride() + col)
    }

    pub fn base(&self, row: usize, col: usize) -> Option<DVec2> {
        self.index(row, col).map(|i| self.base[i])
    }

    pub fn rendered(&self, row: usize, col: usize) -> Option<DVec2> {
        self.index(row, col).map(|i| self.rendered[i])
    }

    pub fn base_points(&self) -> &[DVec2] {
        &self.base
    }

    pub fn rendered_points(&self) -> &[DVec2] {
        &self.rendered
    }

    /// Paired (base, rendered) slots for the sampler to fill.
    pub(crate) fn pairs_mut(&mut self) -> impl Iterator<Item = (&DVec2, &mut DVec2)> {
        self.base.iter().zip(self.rendered.iter_mut())
    }
}

#[inline]
fn fraction(i: u32, n: u32) -> f64 {
    if n == 0 {
        0.0
    } else {
        i as f64 / n as f64
    }
}
