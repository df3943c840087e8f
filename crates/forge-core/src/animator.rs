//! The particle field animator: one mount of the point cloud on a host.
//!
//! Mounting acquires listeners, an optional stylesheet and the first frame
//! callback from the host. Each frame smooths the stretch factor, recomputes
//! particle positions, advances the orbit and schedules the next frame.
//! Unmounting (or dropping) releases everything that was acquired.

use crate::camera::{Camera, Viewport};
use crate::constants::{AUTO_ROTATE_BASE, AUTO_ROTATE_STRETCH, TIME_SCALE};
use crate::error::ForgeError;
use crate::host::{EventKind, FrameHost, HostEvent};
use crate::interaction::{PointerState, StretchFactor};
use crate::orbit::OrbitController;
use crate::particles::ParticleField;
use glam::{Mat4, Vec3};
use smallvec::SmallVec;

/// Stylesheet pinning the animator's canvas behind page content.
pub fn canvas_stylesheet(canvas_id: &str) -> String {
    format!(
        "#{canvas_id} {{ position: fixed; top: 0; left: 0; width: 100%; height: 100%; z-index: -1; }}"
    )
}

/// Animation time in seconds-like units, measured from the first frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    start_ms: Option<f64>,
}

impl FrameClock {
    /// Convert a host timestamp (milliseconds) to animation time.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let start = *self.start_ms.get_or_insert(now_ms);
        ((now_ms - start).max(0.0) * TIME_SCALE) as f32
    }
}

/// Everything the renderer needs for one frame.
pub struct FrameView<'a> {
    pub positions: &'a [Vec3],
    pub colors: &'a [Vec3],
    pub view_proj: Mat4,
    pub viewport: Viewport,
}

pub struct Animator<H: FrameHost> {
    host: H,
    field: ParticleField,
    camera: Camera,
    orbit: OrbitController,
    stretch: StretchFactor,
    pointer: PointerState,
    viewport: Viewport,
    clock: FrameClock,
    pending: Option<H::Frame>,
    listeners: SmallVec<[H::Listener; 5]>,
    style: Option<H::Style>,
}

impl<H: FrameHost> Animator<H> {
    /// Mount `field` on `host`: attach listeners and the stylesheet, then request the first frame.
    ///
    /// If any acquisition fails, whatever was already acquired is released before returning.
    pub fn mount(
        host: H,
        field: ParticleField,
        viewport: Viewport,
        stylesheet: Option<&str>,
    ) -> Result<Self, ForgeError> {
        let camera = Camera::for_viewport(&viewport);
        let orbit = OrbitController::from_camera(&camera);
        let mut animator = Self {
            host,
            field,
            camera,
            orbit,
            stretch: StretchFactor::default(),
            pointer: PointerState::default(),
            viewport,
            clock: FrameClock::default(),
            pending: None,
            listeners: SmallVec::new(),
            style: None,
        };
        if let Some(css) = stylesheet {
            animator.style = Some(animator.host.attach_style(css)?);
        }
        for kind in EventKind::ALL {
            let listener = animator.host.listen(kind)?;
            animator.listeners.push(listener);
        }
        animator.pending = Some(animator.host.request_frame()?);
        log::info!(
            "[field] mounted particles={} viewport={}x{}",
            animator.field.len(),
            viewport.width,
            viewport.height
        );
        Ok(animator)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn orbit(&self) -> &OrbitController {
        &self.orbit
    }

    pub fn stretch(&self) -> f32 {
        self.stretch.value()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_frame_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn handle(&mut self, event: HostEvent) {
        match event {
            HostEvent::Resize(viewport) => {
                self.viewport = viewport;
                self.camera.set_viewport(&viewport);
                log::debug!("[field] resize {}x{}", viewport.width, viewport.height);
            }
            HostEvent::PointerDown { x, y } => {
                self.pointer = PointerState { down: true, x, y };
            }
            HostEvent::PointerMove { x, y } => {
                if self.pointer.down {
                    self.orbit
                        .drag(x - self.pointer.x, y - self.pointer.y, self.viewport.height);
                }
                self.pointer.x = x;
                self.pointer.y = y;
            }
            HostEvent::PointerUp => {
                self.pointer.down = false;
            }
        }
    }

    /// Run one frame at host time `now_ms` and schedule the next one.
    pub fn frame(&mut self, now_ms: f64) -> FrameView<'_> {
        // the callback that brought us here has fired
        self.pending = None;

        let time = self.clock.tick(now_ms);
        let stretch = self.stretch.step(self.pointer.down);
        self.orbit
            .set_auto_rotate_speed(AUTO_ROTATE_BASE + stretch * AUTO_ROTATE_STRETCH);
        self.field.update(time, stretch);
        self.orbit.update(&mut self.camera);

        match self.host.request_frame() {
            Ok(frame) => self.pending = Some(frame),
            Err(e) => log::error!("[field] failed to schedule frame: {}", e),
        }

        FrameView {
            positions: self.field.positions(),
            colors: self.field.colors(),
            view_proj: self.camera.view_projection(),
            viewport: self.viewport,
        }
    }

    /// Stop the frame loop and release listeners and stylesheet.
    pub fn unmount(mut self) {
        self.release();
        log::info!("[field] unmounted");
    }

    fn release(&mut self) {
        if let Some(frame) = self.pending.take() {
            self.host.cancel_frame(frame);
        }
        for listener in self.listeners.drain(..) {
            self.host.unlisten(listener);
        }
        if let Some(style) = self.style.take() {
            self.host.detach_style(style);
        }
    }
}

impl<H: FrameHost> Drop for Animator<H> {
    fn drop(&mut self) {
        self.release();
    }
}
