//! Platform seam for the animator.
//!
//! A host schedules frame callbacks, attaches event listeners and registers
//! stylesheets. Every acquisition returns a token that the animator keeps
//! and hands back on release, so a mount can always undo what it did.

use crate::camera::Viewport;
use crate::error::ForgeError;

/// Events the animator listens for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Resize,
    PointerDown,
    PointerMove,
    PointerUp,
    /// The browser took over the press (scroll, pinch); delivered as `HostEvent::PointerUp`.
    PointerCancel,
}

impl EventKind {
    pub const ALL: [EventKind; 5] = [
        EventKind::Resize,
        EventKind::PointerDown,
        EventKind::PointerMove,
        EventKind::PointerUp,
        EventKind::PointerCancel,
    ];

    /// DOM event name.
    pub fn name(self) -> &'static str {
        match self {
            EventKind::Resize => "resize",
            EventKind::PointerDown => "pointerdown",
            EventKind::PointerMove => "pointermove",
            EventKind::PointerUp => "pointerup",
            EventKind::PointerCancel => "pointercancel",
        }
    }
}

/// Event delivered by a host. Pointer coordinates are viewport CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostEvent {
    Resize(Viewport),
    PointerDown { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerUp,
}

impl HostEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            HostEvent::Resize(_) => EventKind::Resize,
            HostEvent::PointerDown { .. } => EventKind::PointerDown,
            HostEvent::PointerMove { .. } => EventKind::PointerMove,
            HostEvent::PointerUp => EventKind::PointerUp,
        }
    }
}

pub trait FrameHost {
    /// Handle for a scheduled frame callback.
    type Frame;
    /// Handle for an attached listener.
    type Listener;
    /// Handle for a registered stylesheet.
    type Style;

    fn request_frame(&mut self) -> Result<Self::Frame, ForgeError>;
    fn cancel_frame(&mut self, frame: Self::Frame);

    fn listen(&mut self, kind: EventKind) -> Result<Self::Listener, ForgeError>;
    fn unlisten(&mut self, listener: Self::Listener);

    fn attach_style(&mut self, css: &str) -> Result<Self::Style, ForgeError>;
    fn detach_style(&mut self, style: Self::Style);
}
