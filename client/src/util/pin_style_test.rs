use super::*;

#[test]
fn active_pins_are_green_without_badge() {
    let style = pin_style(PinIcon::Home, &LocationStatus::Active);
    assert_eq!(style, PinStyle { icon: PinIcon::Home, color: ACTIVE_COLOR, badge: None });
}

#[test]
fn coming_soon_pins_are_amber_with_year_badge() {
    let style = pin_style(PinIcon::Factory, &LocationStatus::ComingSoon { year: "2026".into() });
    assert_eq!(style.icon, PinIcon::Factory);
    assert_eq!(style.color, COMING_SOON_COLOR);
    assert_eq!(style.badge.as_deref(), Some("Coming 2026"));
}

#[test]
fn style_is_deterministic() {
    let status = LocationStatus::ComingSoon { year: "2027".into() };
    assert_eq!(pin_style(PinIcon::Pin, &status), pin_style(PinIcon::Pin, &status));
}

#[test]
fn status_colors_differ() {
    assert_ne!(ACTIVE_COLOR, COMING_SOON_COLOR);
}

#[test]
fn every_icon_has_path_data() {
    for icon in [PinIcon::Home, PinIcon::Factory, PinIcon::Pin] {
        assert!(icon_path(icon).starts_with('M'));
    }
}
