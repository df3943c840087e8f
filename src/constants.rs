// Web-only constants for mounting the particle field on a page.

// Canvas element the landing page and the dashboard both render into
pub const BG_CANVAS_ID: &str = "bg-canvas";

// Attribute marking <style> elements owned by a mount
pub const STYLE_SCOPE_ATTR: &str = "data-forge-scope";

// Fallback viewport when the window reports no size (CSS px)
pub const FALLBACK_VIEWPORT_WIDTH: f32 = 1280.0;
pub const FALLBACK_VIEWPORT_HEIGHT: f32 = 720.0;
