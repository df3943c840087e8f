#![cfg(target_arch = "wasm32")]
use forge_core::{canvas_stylesheet, Animator, FieldParams, ParticleField};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod constants;
mod dom;
mod events;
mod frame;
mod host;
mod input;

use frame::{MountSlot, WebMount};
use host::WebHost;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("forge-web starting");
    Ok(())
}

/// Handle to one mounted particle field. Dropping it (or calling `unmount`) stops the animation.
#[wasm_bindgen]
pub struct ParticleFieldHandle {
    slot: MountSlot,
}

#[wasm_bindgen]
impl ParticleFieldHandle {
    pub fn unmount(self) {
        let mount = self.slot.borrow_mut().take();
        if let Some(WebMount { animator, gpu }) = mount {
            drop(gpu);
            animator.unmount();
        }
    }

    #[wasm_bindgen(getter, js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.slot.borrow().is_some()
    }
}

/// Mount the animated particle field on the canvas with id `canvas_id`.
///
/// Returns `None` (after logging) when the page has no such canvas.
#[wasm_bindgen(js_name = mountParticleField)]
pub fn mount_particle_field(canvas_id: &str) -> Option<ParticleFieldHandle> {
    match mount(canvas_id) {
        Ok(handle) => Some(handle),
        Err(e) => {
            log::error!("mount error: {:#}", e);
            None
        }
    }
}

/// Mount on the shared background canvas used by the landing page and the dashboard.
#[wasm_bindgen(js_name = mountBackground)]
pub fn mount_background() -> Option<ParticleFieldHandle> {
    mount_particle_field(constants::BG_CANVAS_ID)
}

fn mount(canvas_id: &str) -> anyhow::Result<ParticleFieldHandle> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;
    let canvas = dom::canvas_by_id(&document, canvas_id)?;

    let viewport = dom::window_viewport(&window);
    dom::sync_canvas_backing_size(&canvas, &viewport);

    let field = ParticleField::generate(&FieldParams::default(), &mut rand::thread_rng());
    let colors = field.colors().to_vec();

    let slot: MountSlot = Rc::new(RefCell::new(None));
    let host = WebHost::new(window, document, canvas.clone(), Rc::downgrade(&slot));
    let css = canvas_stylesheet(canvas_id);
    let animator = Animator::mount(host, field, viewport, Some(css.as_str()))?;
    *slot.borrow_mut() = Some(WebMount {
        animator,
        gpu: None,
    });

    spawn_local(frame::attach_gpu(Rc::downgrade(&slot), canvas, colors));
    Ok(ParticleFieldHandle { slot })
}
