use crate::constants::{FALLBACK_VIEWPORT_HEIGHT, FALLBACK_VIEWPORT_WIDTH, STYLE_SCOPE_ATTR};
use crate::input;
use forge_core::{ForgeError, Viewport};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn js_err(e: JsValue) -> ForgeError {
    ForgeError::Host(format!("{:?}", e))
}

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

pub fn canvas_by_id(
    document: &web::Document,
    id: &str,
) -> Result<web::HtmlCanvasElement, ForgeError> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
        .ok_or_else(|| ForgeError::MissingMountTarget(id.to_string()))
}

pub fn window_viewport(window: &web::Window) -> Viewport {
    input::viewport_from_window(
        window.inner_width().ok().and_then(|v| v.as_f64()),
        window.inner_height().ok().and_then(|v| v.as_f64()),
        window.device_pixel_ratio(),
        (FALLBACK_VIEWPORT_WIDTH, FALLBACK_VIEWPORT_HEIGHT),
    )
}

/// Match the canvas backing store to the viewport (pixel ratio capped at 2).
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: &Viewport) {
    let (w, h) = viewport.physical_size();
    canvas.set_width(w.max(1));
    canvas.set_height(h.max(1));
}

/// Insert a `<style>` element owned by one mount into the document head.
pub fn insert_scoped_style(document: &web::Document, css: &str) -> Result<web::Element, ForgeError> {
    let head = document
        .head()
        .ok_or_else(|| ForgeError::Host("document has no <head>".into()))?;
    let style = document.create_element("style").map_err(js_err)?;
    style.set_attribute(STYLE_SCOPE_ATTR, "").map_err(js_err)?;
    style.set_text_content(Some(css));
    head.append_child(&style).map_err(js_err)?;
    Ok(style)
}
