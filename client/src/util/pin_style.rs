//! Pin appearance derived from a location's icon and status.

#[cfg(test)]
#[path = "pin_style_test.rs"]
mod pin_style_test;

use crate::state::map::{LocationStatus, PinIcon};

pub const ACTIVE_COLOR: &str = "#4CAF50";
pub const COMING_SOON_COLOR: &str = "#F59E0B";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PinStyle {
    pub icon: PinIcon,
    pub color: &'static str,
    /// "Coming {year}" for sites not yet open.
    pub badge: Option<String>,
}

#[must_use]
pub fn pin_style(icon: PinIcon, status: &LocationStatus) -> PinStyle {
    match status {
        LocationStatus::Active => PinStyle { icon, color: ACTIVE_COLOR, badge: None },
        LocationStatus::ComingSoon { year } => {
            PinStyle { icon, color: COMING_SOON_COLOR, badge: Some(format!("Coming {year}")) }
        }
    }
}

/// SVG path data (24x24 viewBox, stroked) for each pin glyph.
#[must_use]
pub fn icon_path(icon: PinIcon) -> &'static str {
    match icon {
        PinIcon::Home => "M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z M9 22V12h6v10",
        PinIcon::Factory => {
            "M2 20a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V8l-7 5V8l-7 5V4a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2z M17 18h1 M12 18h1 M7 18h1"
        }
        PinIcon::Pin => "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z M12 7a3 3 0 1 0 0 6a3 3 0 1 0 0-6",
    }
}
