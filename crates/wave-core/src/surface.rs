//! Drawing surface abstraction and the surface manager.

use crate::viewport::Viewport;
use glam::DVec2;

/// Minimal 2D raster surface the wave field draws on.
///
/// Coordinates passed to the path methods are logical pixels; the surface is
/// expected to apply the transform set by [`Surface::reset_and_scale`].
pub trait Surface {
    /// Backing-store size in physical pixels.
    fn set_backing_size(&mut self, width_px: u32, height_px: u32);
    /// Displayed (CSS) size in logical pixels.
    fn set_display_size(&mut self, width: f64, height: f64);
    /// Replace the current transform with a uniform scale.
    fn reset_and_scale(&mut self, scale: f64);
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    /// Use a linear gradient from `start` to `end` with ordered `(offset, css color)` stops.
    fn set_stroke_gradient(&mut self, start: DVec2, end: DVec2, stops: &[(f64, &str)]);
    fn set_line_width(&mut self, width: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, p: DVec2);
    fn line_to(&mut self, p: DVec2);
    fn stroke(&mut self);
}

/// Size the backing store to `logical * pixel_ratio`, keep the displayed size
/// logical, and scale drawing so callers keep using logical coordinates.
///
/// The transform is reset before scaling, so repeated calls never compound.
pub fn configure_surface<S: Surface + ?Sized>(surface: &mut S, viewport: &Viewport) {
    let (w_px, h_px) = viewport.physical_size();
    surface.set_backing_size(w_px, h_px);
    surface.set_display_size(viewport.width(), viewport.height());
    surface.reset_and_scale(viewport.pixel_ratio());
}
