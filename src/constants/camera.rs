//! Viewport / camera constants.

/// Default window width in pixels
pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;
/// Default window height in pixels
pub const WINDOW_DEFAULT_HEIGHT: f32 = 600.0;
/// How close (in pixels) the tracked entity may get to a view edge before we scroll
pub const VIEWPORT_MARGIN: f32 = 250.0;
