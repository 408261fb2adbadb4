//! Scroll-driven header state and smooth in-page navigation.
//!
//! The sticky flag is a pure function of the window's vertical offset; the
//! header feeds it from a `scroll` listener. Scrolling helpers require a
//! browser environment and no-op during SSR.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Offset (px) past which the header switches to its solid, sticky look.
pub const STICKY_THRESHOLD_PX: f64 = 100.0;

#[must_use]
pub fn is_sticky(scroll_y: f64) -> bool {
    scroll_y > STICKY_THRESHOLD_PX
}

/// Current vertical scroll offset, `0.0` outside the browser.
pub fn current_offset() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().map_or(0.0, |w| w.scroll_y().unwrap_or(0.0))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Smooth-scroll the element with `id` into view. Missing ids are ignored.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn scroll_to_section(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(el) = doc.get_element_by_id(id) {
            let opts = web_sys::ScrollIntoViewOptions::new();
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
        }
    }
}

pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let opts = web_sys::ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        }
    }
}
