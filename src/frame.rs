use crate::host::WebHost;
use forge_core::{Animator, ForgeError, HostEvent, PointRenderer};
use glam::Vec3;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

/// A live mount: the animator plus its renderer once WebGPU is ready.
pub struct WebMount {
    pub animator: Animator<WebHost>,
    pub gpu: Option<PointRenderer<'static>>,
}

/// Owned by the JS handle. Emptied on unmount.
pub type MountSlot = Rc<RefCell<Option<WebMount>>>;
/// What callbacks hold, so a released mount is never revived.
pub type WeakSlot = Weak<RefCell<Option<WebMount>>>;

/// Forward a host event to the mount behind `slot`, if it is still alive.
pub fn dispatch(slot: &WeakSlot, event: HostEvent) {
    let Some(slot) = slot.upgrade() else {
        return;
    };
    let Ok(mut guard) = slot.try_borrow_mut() else {
        log::warn!("[field] dropped {:?} during frame", event.kind());
        return;
    };
    if let Some(mount) = guard.as_mut() {
        mount.animator.handle(event);
    }
}

/// requestAnimationFrame callback body.
pub fn on_frame(slot: &WeakSlot, timestamp_ms: f64) {
    let Some(slot) = slot.upgrade() else {
        return;
    };
    let Ok(mut guard) = slot.try_borrow_mut() else {
        return;
    };
    let Some(WebMount { animator, gpu }) = guard.as_mut() else {
        return;
    };
    let view = animator.frame(timestamp_ms);
    let Some(g) = gpu else {
        return;
    };
    match g.render(&view) {
        Ok(()) => {}
        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
            log::debug!("[gpu] surface lost, reconfiguring");
            g.reconfigure();
        }
        Err(wgpu::SurfaceError::Timeout) => log::warn!("[gpu] surface timeout"),
        Err(e) => log::error!("render error: {:?}", e),
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    colors: &[Vec3],
) -> Result<PointRenderer<'static>, ForgeError> {
    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
    PointRenderer::new(&instance, surface, canvas.width(), canvas.height(), colors).await
}

/// Create the renderer for `canvas` and hand it to the mount, unless it was unmounted meanwhile.
pub async fn attach_gpu(slot: WeakSlot, canvas: web::HtmlCanvasElement, colors: Vec<Vec3>) {
    let renderer = match init_gpu(&canvas, &colors).await {
        Ok(r) => r,
        Err(e) => {
            log::error!("WebGPU init error: {}", e);
            return;
        }
    };
    let Some(slot) = slot.upgrade() else {
        log::info!("[gpu] mount released before renderer was ready; discarding");
        return;
    };
    let mut guard = slot.borrow_mut();
    match guard.as_mut() {
        Some(mount) => mount.gpu = Some(renderer),
        None => log::info!("[gpu] mount released before renderer was ready; discarding"),
    };
}
