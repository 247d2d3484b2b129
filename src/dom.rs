use crate::constants::DEFAULT_PIXEL_RATIO;
use wave_core::Viewport;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Current logical viewport from `innerWidth`/`innerHeight` and `devicePixelRatio`.
pub fn read_viewport() -> anyhow::Result<Viewport> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let width = window
        .inner_width()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .as_f64()
        .ok_or_else(|| anyhow::anyhow!("innerWidth is not a number"))?;
    let height = window
        .inner_height()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .as_f64()
        .ok_or_else(|| anyhow::anyhow!("innerHeight is not a number"))?;
    let dpr = window.device_pixel_ratio();
    let dpr = if dpr.is_finite() && dpr > 0.0 {
        dpr
    } else {
        DEFAULT_PIXEL_RATIO
    };
    Ok(Viewport::new(width, height, dpr)?)
}

/// `performance.now()` in milliseconds, the same clock requestAnimationFrame reports.
pub fn now_ms() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
