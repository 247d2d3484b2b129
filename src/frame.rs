use crate::canvas::CanvasSurface;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wave_core::{Viewport, WaveField};
use web_sys as web;

/// Everything the animation frame and the input handlers share.
pub struct FrameContext {
    pub field: WaveField,
    pub surface: CanvasSurface,
    pub fps_readout: Option<web::Element>,
}

impl FrameContext {
    pub fn frame(&mut self, now_ms: f64) {
        if let Some(fps) = self.field.step(now_ms, &mut self.surface) {
            if let Some(el) = &self.fps_readout {
                el.set_text_content(Some(&format!("FPS: {fps}")));
            }
        }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.field.resize(viewport, &mut self.surface);
        let d = self.field.density();
        log::info!(
            "[resize] {}x{} @{}x cols={} rows={}",
            viewport.width(),
            viewport.height(),
            viewport.pixel_ratio(),
            d.cols,
            d.rows
        );
    }

    #[inline]
    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.field.set_pointer(x, y);
    }
}

/// Drive [`FrameContext::frame`] from requestAnimationFrame for the page's lifetime.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        frame_ctx.borrow_mut().frame(now_ms);
        request_frame(&tick_clone);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
