use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed mouse and first-touch client coordinates into the raw pointer target.
pub fn wire_pointer_tracking(ctx: Rc<RefCell<FrameContext>>) {
    wire_mousemove(ctx.clone());
    wire_touchmove(ctx);
}

fn wire_mousemove(ctx: Rc<RefCell<FrameContext>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        ctx.borrow_mut()
            .set_pointer(ev.client_x() as f64, ev.client_y() as f64);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_touchmove(ctx: Rc<RefCell<FrameContext>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(touch) = ev.touches().item(0) {
            ctx.borrow_mut()
                .set_pointer(touch.client_x() as f64, touch.client_y() as f64);
        }
    }) as Box<dyn FnMut(_)>);

    // nothing to prevent here, so keep scrolling on the fast path
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback_and_add_event_listener_options(
            "touchmove",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
    }
    closure.forget();
}
