use filing_shared::Size;

use crate::config::FALLBACK_VIEWPORT;

/// Current browser viewport in CSS pixels.
pub fn viewport_size() -> Size {
    let Some(window) = web_sys::window() else {
        return FALLBACK_VIEWPORT;
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT.width);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT.height);
    Size::new(width, height)
}
