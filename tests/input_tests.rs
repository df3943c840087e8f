// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use forge_core::{EventKind, HostEvent};
use input::*;

#[test]
fn pointer_kinds_translate_with_coordinates() {
    assert_eq!(
        pointer_event(EventKind::PointerDown, 10.0, 20.0),
        Some(HostEvent::PointerDown { x: 10.0, y: 20.0 })
    );
    assert_eq!(
        pointer_event(EventKind::PointerMove, -3.5, 7.25),
        Some(HostEvent::PointerMove { x: -3.5, y: 7.25 })
    );
    assert_eq!(
        pointer_event(EventKind::PointerUp, 1.0, 1.0),
        Some(HostEvent::PointerUp)
    );
}

#[test]
fn resize_is_not_a_pointer_event() {
    assert_eq!(pointer_event(EventKind::Resize, 0.0, 0.0), None);
}

#[test]
fn translated_event_keeps_its_kind() {
    for kind in [
        EventKind::PointerDown,
        EventKind::PointerMove,
        EventKind::PointerUp,
    ] {
        let ev = pointer_event(kind, 0.0, 0.0).expect("pointer kind");
        assert_eq!(ev.kind(), kind);
    }
}

#[test]
fn cancelled_press_is_a_release() {
    assert_eq!(
        pointer_event(EventKind::PointerCancel, 120.0, 80.0),
        Some(HostEvent::PointerUp)
    );
    assert_eq!(EventKind::PointerCancel.name(), "pointercancel");
    assert!(!binds_to_canvas(EventKind::PointerCancel));
}

#[test]
fn only_pointer_down_binds_to_canvas() {
    assert!(binds_to_canvas(EventKind::PointerDown));
    assert!(!binds_to_canvas(EventKind::PointerMove));
    assert!(!binds_to_canvas(EventKind::PointerUp));
    assert!(!binds_to_canvas(EventKind::Resize));
}

#[test]
fn viewport_uses_window_metrics() {
    let v = viewport_from_window(Some(1920.0), Some(1080.0), 1.5, (1.0, 1.0));
    assert_eq!(v.width, 1920.0);
    assert_eq!(v.height, 1080.0);
    assert_eq!(v.pixel_ratio, 1.5);
    assert_eq!(v.physical_size(), (2880, 1620));
}

#[test]
fn viewport_falls_back_when_window_reports_nothing() {
    let v = viewport_from_window(None, None, 1.0, (1280.0, 720.0));
    assert_eq!((v.width, v.height), (1280.0, 720.0));
}

#[test]
fn non_positive_pixel_ratio_is_treated_as_one() {
    let v = viewport_from_window(Some(800.0), Some(600.0), 0.0, (1.0, 1.0));
    assert_eq!(v.pixel_ratio, 1.0);
    assert_eq!(v.physical_size(), (800, 600));
}

#[test]
fn high_density_backing_store_is_capped_at_two() {
    let v = viewport_from_window(Some(400.0), Some(300.0), 3.0, (1.0, 1.0));
    assert_eq!(v.physical_size(), (800, 600));
}
