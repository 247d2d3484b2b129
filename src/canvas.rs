//! [`Surface`] implementation over an `HtmlCanvasElement` 2D context.

use anyhow::anyhow;
use glam::DVec2;
use wasm_bindgen::{JsCast, JsValue};
use wave_core::Surface;
use web_sys as web;

pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| anyhow!("not a 2d context"))?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn set_backing_size(&mut self, width_px: u32, height_px: u32) {
        self.canvas.set_width(width_px);
        self.canvas.set_height(height_px);
    }

    fn set_display_size(&mut self, width: f64, height: f64) {
        let style = self.canvas.style();
        _ = style.set_property("width", &format!("{width}px"));
        _ = style.set_property("height", &format!("{height}px"));
    }

    fn reset_and_scale(&mut self, scale: f64) {
        _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        _ = self.ctx.scale(scale, scale);
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }

    fn set_stroke_gradient(&mut self, start: DVec2, end: DVec2, stops: &[(f64, &str)]) {
        let gradient = self.ctx.create_linear_gradient(start.x, start.y, end.x, end.y);
        for (offset, color) in stops {
            _ = gradient.add_color_stop(*offset as f32, color);
        }
        // strokeStyle accepts strings, gradients and patterns; set it untyped
        _ = js_sys::Reflect::set(
            self.ctx.as_ref(),
            &JsValue::from_str("strokeStyle"),
            gradient.as_ref(),
        );
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, p: DVec2) {
        self.ctx.move_to(p.x, p.y);
    }

    fn line_to(&mut self, p: DVec2) {
        self.ctx.line_to(p.x, p.y);
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }
}
