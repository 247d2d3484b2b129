#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wave_core::{configure_surface, FieldParams, WaveField};
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("wave-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let mut surface = canvas::CanvasSurface::new(canvas)?;

    let viewport = dom::read_viewport()?;
    let field = WaveField::new(viewport, FieldParams::default(), dom::now_ms())?;
    // grid already matches the viewport; only the backing store needs sizing
    configure_surface(&mut surface, field.viewport());

    // Optional; pages without the navbar readout simply skip it
    let fps_readout = document.get_element_by_id(constants::FPS_COUNTER_ID);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        surface,
        fps_readout,
    }));

    events::wire_debounced_resize(frame_ctx.clone());
    events::wire_pointer_tracking(frame_ctx.clone());
    frame::start_loop(frame_ctx);
    Ok(())
}
