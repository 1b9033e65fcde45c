//! Scroll geometry for the fixed-header layout.

use wasm_bindgen::JsCast;

/// Height of the fixed navbar; anchor targets scroll to sit just below it.
pub const HEADER_OFFSET: f64 = 80.0;

/// Vertical offset past which the navbar switches to its solid style.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

/// Extracts the fragment id from an in-page href.
///
/// Returns `Some("")` for a bare `#`, which later resolves to no element and
/// the click becomes a no-op.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#')
}

/// Viewport top position that aligns an element just below the fixed header.
pub fn anchor_scroll_top(element_top: f64) -> f64 {
    element_top - HEADER_OFFSET
}

/// Whether the navbar should render in its solid "scrolled" style.
///
/// Strictly greater-than, no hysteresis: repeated measurements at the same
/// offset always agree.
pub fn is_scrolled(offset: f64) -> bool {
    offset > NAV_SCROLL_THRESHOLD
}

/// Smooth-scrolls the viewport to the element with the given fragment id.
///
/// Missing window, document, or target element are silently absorbed.
pub fn scroll_to_fragment(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(element) = document.get_element_by_id(id) else {
        return;
    };
    let Some(element) = element.dyn_ref::<web_sys::HtmlElement>() else {
        return;
    };

    let options = web_sys::ScrollToOptions::new();
    options.set_top(anchor_scroll_top(element.offset_top() as f64));
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_target_parses_anchors() {
        assert_eq!(fragment_target("#menu"), Some("menu"));
        assert_eq!(fragment_target("#"), Some(""));
        assert_eq!(fragment_target("/filament"), None);
        assert_eq!(fragment_target("https://example.com/#menu"), None);
    }

    #[test]
    fn test_anchor_scroll_top_subtracts_header() {
        assert_eq!(anchor_scroll_top(500.0), 420.0);
        assert_eq!(anchor_scroll_top(0.0), -80.0);
    }

    #[test]
    fn test_is_scrolled_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.1));
        assert!(is_scrolled(400.0));
    }

    #[test]
    fn test_is_scrolled_idempotent_at_same_offset() {
        for offset in [0.0, 49.9, 50.0, 51.0, 1200.0] {
            assert_eq!(is_scrolled(offset), is_scrolled(offset));
        }
    }
}
