use forge_core::{EventKind, ForgeError, FrameHost};
use std::sync::Arc;
use winit::window::Window;

/// Desktop host: frames are winit redraw requests, listeners are a routing set.
///
/// A redraw cannot be revoked once requested, so cancelling only drops the token;
/// the animator ignores redraws it has no pending frame for.
pub struct NativeHost {
    window: Arc<Window>,
    listening: Vec<EventKind>,
}

impl NativeHost {
    pub fn new(window: Arc<Window>) -> Self {
        Self {
            window,
            listening: Vec::new(),
        }
    }

    pub fn listens(&self, kind: EventKind) -> bool {
        self.listening.contains(&kind)
    }
}

impl FrameHost for NativeHost {
    type Frame = ();
    type Listener = EventKind;
    type Style = ();

    fn request_frame(&mut self) -> Result<(), ForgeError> {
        self.window.request_redraw();
        Ok(())
    }

    fn cancel_frame(&mut self, _frame: ()) {}

    fn listen(&mut self, kind: EventKind) -> Result<EventKind, ForgeError> {
        if !self.listens(kind) {
            self.listening.push(kind);
        }
        Ok(kind)
    }

    fn unlisten(&mut self, kind: EventKind) {
        self.listening.retain(|k| *k != kind);
    }

    // No document to style on desktop.
    fn attach_style(&mut self, _css: &str) -> Result<(), ForgeError> {
        Ok(())
    }

    fn detach_style(&mut self, _style: ()) {}
}
