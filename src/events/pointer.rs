use crate::frame::{dispatch, WeakSlot};
use crate::input;
use forge_core::EventKind;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Build the listener for one pointer event kind; it forwards client coordinates to the mount.
pub fn pointer_listener(kind: EventKind, slot: WeakSlot) -> Closure<dyn FnMut(web::Event)> {
    Closure::wrap(Box::new(move |ev: web::Event| {
        let Some(pe) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        if let Some(host_ev) = input::pointer_event(kind, pe.client_x() as f32, pe.client_y() as f32) {
            dispatch(&slot, host_ev);
        }
    }) as Box<dyn FnMut(_)>)
}
