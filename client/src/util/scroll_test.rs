#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn header_is_not_sticky_at_top() {
    assert!(!is_sticky(0.0));
}

#[test]
fn threshold_is_exclusive() {
    assert!(!is_sticky(STICKY_THRESHOLD_PX));
    assert!(is_sticky(STICKY_THRESHOLD_PX + 0.5));
}

#[test]
fn deep_scroll_is_sticky() {
    assert!(is_sticky(2400.0));
}

#[test]
fn offset_is_zero_outside_browser() {
    assert!(current_offset().abs() < f64::EPSILON);
}

#[test]
fn scroll_helpers_are_noops_but_callable() {
    scroll_to_section("about");
    scroll_to_top();
}
