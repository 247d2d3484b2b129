use crate::constants::RESIZE_DEBOUNCE_MS;
use crate::dom;
use crate::frame::FrameContext;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Coalesce resize bursts: each event restarts a timer, and only the last one
/// reconfigures the surface and regenerates the grid.
pub fn wire_debounced_resize(ctx: Rc<RefCell<FrameContext>>) {
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let pending_apply = pending.clone();
    let apply = Closure::wrap(Box::new(move || {
        pending_apply.set(None);
        match dom::read_viewport() {
            Ok(viewport) => ctx.borrow_mut().resize(viewport),
            Err(e) => log::warn!("[resize] skipped: {:?}", e),
        }
    }) as Box<dyn FnMut()>);

    let on_resize = Closure::wrap(Box::new(move || {
        let Some(w) = web::window() else {
            return;
        };
        if let Some(handle) = pending.take() {
            w.clear_timeout_with_handle(handle);
        }
        match w.set_timeout_with_callback_and_timeout_and_arguments_0(
            apply.as_ref().unchecked_ref(),
            RESIZE_DEBOUNCE_MS,
        ) {
            Ok(handle) => pending.set(Some(handle)),
            Err(e) => log::warn!("[resize] setTimeout failed: {:?}", e),
        }
    }) as Box<dyn FnMut()>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    }
    on_resize.forget();
}
