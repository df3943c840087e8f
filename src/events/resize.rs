use crate::dom;
use crate::frame::{dispatch, WeakSlot};
use forge_core::HostEvent;
use wasm_bindgen::closure::Closure;
use web_sys as web;

/// Build the window resize listener: resync the canvas backing store, then notify the mount.
pub fn resize_listener(
    window: web::Window,
    canvas: web::HtmlCanvasElement,
    slot: WeakSlot,
) -> Closure<dyn FnMut(web::Event)> {
    Closure::wrap(Box::new(move |_ev: web::Event| {
        let viewport = dom::window_viewport(&window);
        dom::sync_canvas_backing_size(&canvas, &viewport);
        dispatch(&slot, HostEvent::Resize(viewport));
    }) as Box<dyn FnMut(_)>)
}
