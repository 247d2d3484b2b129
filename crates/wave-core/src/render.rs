//! Line renderer: triangulates the displaced grid and strokes it in one batch.

use crate::constants::{GRADIENT_STOPS, LINE_WIDTH};
use crate::grid::Grid;
use crate::surface::Surface;
use crate::viewport::Viewport;
use glam::DVec2;

/// Walk every cell and hand out its two triangles as `[a, b, c]` polylines.
///
/// For the cell at (row, col) with corners p1 = top-left, p2 = bottom-left,
/// p3 = top-right, p4 = bottom-right the triangles are `p1 -> p2 -> p3` and
/// `p2 -> p4 -> p3`. A triangle with a corner outside the grid is skipped.
pub fn for_each_triangle(grid: &Grid, mut f: impl FnMut([DVec2; 3])) {
    let rows = grid.rows() as usize;
    let cols = grid.cols() as usize;
    for y in 0..rows {
        for x in 0..cols {
            let p1 = grid.rendered(y, x);
            let p2 = grid.rendered(y + 1, x);
            let p3 = grid.rendered(y, x + 1);
            let p4 = grid.rendered(y + 1, x + 1);

            if let (Some(p1), Some(p2), Some(p3)) = (p1, p2, p3) {
                f([p1, p2, p3]);
            }
            if let (Some(p2), Some(p4), Some(p3)) = (p2, p4, p3) {
                f([p2, p4, p3]);
            }
        }
    }
}

/// Triangles in draw order; handy for inspection and tests.
pub fn triangles(grid: &Grid) -> Vec<[DVec2; 3]> {
    let mut out = Vec::with_capacity(grid.cols() as usize * grid.rows() as usize * 2);
    for_each_triangle(grid, |tri| out.push(tri));
    out
}

/// Clear the surface and stroke the whole lattice as a single path.
pub fn draw_grid<S: Surface + ?Sized>(surface: &mut S, grid: &Grid, viewport: &Viewport) {
    let (w, h) = (viewport.width(), viewport.height());
    surface.clear_rect(0.0, 0.0, w, h);
    surface.set_stroke_gradient(DVec2::ZERO, DVec2::new(w, 0.0), &GRADIENT_STOPS);
    surface.set_line_width(LINE_WIDTH);

    surface.begin_path();
    for_each_triangle(grid, |[a, b, c]| {
        surface.move_to(a);
        surface.line_to(b);
        surface.line_to(c);
    });
    surface.stroke();
}
