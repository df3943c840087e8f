// Host-side tests for web constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn background_canvas_id_is_a_plain_css_identifier() {
    assert!(!BG_CANVAS_ID.is_empty());
    assert!(BG_CANVAS_ID
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    let css = forge_core::canvas_stylesheet(BG_CANVAS_ID);
    assert!(css.starts_with("#bg-canvas {"));
    assert!(css.contains("z-index: -1"));
}

#[test]
fn style_scope_is_a_data_attribute() {
    assert!(STYLE_SCOPE_ATTR.starts_with("data-"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn fallback_viewport_is_non_degenerate() {
    assert!(FALLBACK_VIEWPORT_WIDTH > 0.0);
    assert!(FALLBACK_VIEWPORT_HEIGHT > 0.0);
}
