use forge_core::{EventKind, HostEvent, Viewport};

/// Translate a pointer event of `kind` at client coordinates `(x, y)` (CSS px) into a host event.
///
/// Returns `None` for non-pointer kinds.
#[inline]
pub fn pointer_event(kind: EventKind, x: f32, y: f32) -> Option<HostEvent> {
    match kind {
        EventKind::PointerDown => Some(HostEvent::PointerDown { x, y }),
        EventKind::PointerMove => Some(HostEvent::PointerMove { x, y }),
        EventKind::PointerUp | EventKind::PointerCancel => Some(HostEvent::PointerUp),
        EventKind::Resize => None,
    }
}

/// Only pointer-down is bound to the canvas; everything else listens on the window so
/// releases and drags outside the canvas are still seen.
#[inline]
pub fn binds_to_canvas(kind: EventKind) -> bool {
    matches!(kind, EventKind::PointerDown)
}

/// Viewport from raw window metrics, falling back to a fixed size when the window reports none.
#[inline]
pub fn viewport_from_window(
    inner_width: Option<f64>,
    inner_height: Option<f64>,
    device_pixel_ratio: f64,
    fallback: (f32, f32),
) -> Viewport {
    let width = inner_width.map(|w| w as f32).unwrap_or(fallback.0);
    let height = inner_height.map(|h| h as f32).unwrap_or(fallback.1);
    let ratio = if device_pixel_ratio > 0.0 {
        device_pixel_ratio as f32
    } else {
        1.0
    };
    Viewport::new(width, height, ratio)
}
