use crate::dom;
use crate::events;
use crate::frame::{self, WeakSlot};
use crate::input;
use fnv::FnvHashMap;
use forge_core::{EventKind, ForgeError, FrameHost};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Browser host: requestAnimationFrame, DOM listeners and `<style>` elements.
///
/// The JS closures live here for the lifetime of the mount and are dropped with it.
pub struct WebHost {
    window: web::Window,
    document: web::Document,
    canvas: web::HtmlCanvasElement,
    frame_cb: Closure<dyn FnMut(f64)>,
    listeners: FnvHashMap<EventKind, Closure<dyn FnMut(web::Event)>>,
}

impl WebHost {
    pub fn new(
        window: web::Window,
        document: web::Document,
        canvas: web::HtmlCanvasElement,
        slot: WeakSlot,
    ) -> Self {
        let frame_slot = slot.clone();
        let frame_cb = Closure::wrap(Box::new(move |ts: f64| {
            frame::on_frame(&frame_slot, ts);
        }) as Box<dyn FnMut(f64)>);

        let mut listeners = FnvHashMap::default();
        for kind in EventKind::ALL {
            let cb = match kind {
                EventKind::Resize => {
                    events::resize_listener(window.clone(), canvas.clone(), slot.clone())
                }
                _ => events::pointer_listener(kind, slot.clone()),
            };
            listeners.insert(kind, cb);
        }

        Self {
            window,
            document,
            canvas,
            frame_cb,
            listeners,
        }
    }

    fn target(&self, kind: EventKind) -> &web::EventTarget {
        if input::binds_to_canvas(kind) {
            self.canvas.as_ref()
        } else {
            self.window.as_ref()
        }
    }

    fn callback(&self, kind: EventKind) -> Result<&js_sys::Function, ForgeError> {
        self.listeners
            .get(&kind)
            .map(|cb| cb.as_ref().unchecked_ref())
            .ok_or_else(|| ForgeError::Host(format!("no listener for {}", kind.name())))
    }
}

impl FrameHost for WebHost {
    type Frame = i32;
    type Listener = EventKind;
    type Style = web::Element;

    fn request_frame(&mut self) -> Result<i32, ForgeError> {
        self.window
            .request_animation_frame(self.frame_cb.as_ref().unchecked_ref())
            .map_err(dom::js_err)
    }

    fn cancel_frame(&mut self, frame: i32) {
        if let Err(e) = self.window.cancel_animation_frame(frame) {
            log::error!("[field] cancelAnimationFrame failed: {:?}", e);
        }
    }

    fn listen(&mut self, kind: EventKind) -> Result<EventKind, ForgeError> {
        let cb = self.callback(kind)?;
        self.target(kind)
            .add_event_listener_with_callback(kind.name(), cb)
            .map_err(dom::js_err)?;
        Ok(kind)
    }

    fn unlisten(&mut self, kind: EventKind) {
        let Ok(cb) = self.callback(kind) else {
            return;
        };
        if let Err(e) = self
            .target(kind)
            .remove_event_listener_with_callback(kind.name(), cb)
        {
            log::error!("[field] removeEventListener({}) failed: {:?}", kind.name(), e);
        }
    }

    fn attach_style(&mut self, css: &str) -> Result<web::Element, ForgeError> {
        dom::insert_scoped_style(&self.document, css)
    }

    fn detach_style(&mut self, style: web::Element) {
        style.remove();
    }
}
