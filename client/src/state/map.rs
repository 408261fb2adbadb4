//! Location map state: static pins plus a single selection pointer.
//!
//! DESIGN
//! ======
//! Locations are fixed at construction. Selection is an id into that set
//! and a panel-visibility flag; closing the panel keeps the id so the next
//! click simply overwrites it.
//!
//! ```text
//! NoSelection ──select──▶ SelectedVisible ◀──select── SelectedHidden
//!                              │    ▲                       ▲
//!                              │    └──select(other)──┘     │
//!                              └────────close_info──────────┘
//! ```

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

use std::collections::HashSet;

use super::ConfigError;
use crate::util::pin_style::{PinStyle, pin_style};

/// Position on the illustrative map, in percent of width/height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
}

impl MapPoint {
    fn in_range(self) -> bool {
        (0.0..=100.0).contains(&self.x) && (0.0..=100.0).contains(&self.y)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LocationStatus {
    Active,
    ComingSoon { year: String },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PinIcon {
    Home,
    Factory,
    #[default]
    Pin,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub description: String,
    pub coordinates: MapPoint,
    pub status: LocationStatus,
    pub icon: PinIcon,
}

impl Location {
    /// Expected opening year, present only for coming-soon sites.
    #[must_use]
    pub fn year(&self) -> Option<&str> {
        match &self.status {
            LocationStatus::Active => None,
            LocationStatus::ComingSoon { year } => Some(year),
        }
    }
}

/// Built-in sites shown when the host supplies no list.
#[must_use]
pub fn default_locations() -> Vec<Location> {
    vec![
        Location {
            id: "chateauguay".to_owned(),
            name: "Châteauguay Headquarters".to_owned(),
            description: "250F Boul Ford, Châteauguay, QC. Our 35,000 sq. ft. production and R&D facility."
                .to_owned(),
            coordinates: MapPoint { x: 38.0, y: 62.0 },
            status: LocationStatus::Active,
            icon: PinIcon::Home,
        },
        Location {
            id: "granby".to_owned(),
            name: "Granby Expansion Plant".to_owned(),
            description: "Second carbon activation line, doubling production capacity.".to_owned(),
            coordinates: MapPoint { x: 71.0, y: 48.0 },
            status: LocationStatus::ComingSoon { year: "2026".to_owned() },
            icon: PinIcon::Factory,
        },
    ]
}

// =============================================================================
// SELECTION
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MapSelection {
    /// Last clicked location id. May outlive the panel being shown.
    pub selected: Option<String>,
    pub info_visible: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionPhase {
    NoSelection,
    SelectedHidden,
    SelectedVisible,
}

// =============================================================================
// VIEW MODELS
// =============================================================================

/// Everything needed to draw one pin.
#[derive(Clone, Debug, PartialEq)]
pub struct PinView {
    pub id: String,
    pub name: String,
    pub left_pct: f64,
    pub top_pct: f64,
    pub style: PinStyle,
    pub selected: bool,
}

/// Contents of the detail panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoPanel {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status_line: String,
}

// =============================================================================
// MAP STATE
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct MapState {
    locations: Vec<Location>,
    pub selection: MapSelection,
}

impl MapState {
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an empty list, a repeated id, a point
    /// outside the 0-100 square or a coming-soon site with a blank year.
    pub fn new(locations: Vec<Location>) -> Result<Self, ConfigError> {
        if locations.is_empty() {
            return Err(ConfigError::EmptyLocations);
        }
        let mut ids = HashSet::new();
        for location in &locations {
            if !ids.insert(location.id.as_str()) {
                return Err(ConfigError::DuplicateLocation(location.id.clone()));
            }
            if !location.coordinates.in_range() {
                return Err(ConfigError::CoordinatesOutOfRange { id: location.id.clone() });
            }
            if location.year().is_some_and(|y| y.trim().is_empty()) {
                return Err(ConfigError::BlankYear { id: location.id.clone() });
            }
        }
        Ok(Self { locations, selection: MapSelection::default() })
    }

    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    #[must_use]
    pub fn location(&self, id: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }

    /// Select a pin and show its panel. Unknown ids are ignored.
    pub fn select_location(&mut self, id: &str) -> bool {
        if self.location(id).is_none() {
            return false;
        }
        self.selection.selected = Some(id.to_owned());
        self.selection.info_visible = true;
        true
    }

    pub fn close_info(&mut self) {
        self.selection.info_visible = false;
    }

    #[must_use]
    pub fn phase(&self) -> SelectionPhase {
        match (&self.selection.selected, self.selection.info_visible) {
            (None, _) => SelectionPhase::NoSelection,
            (Some(_), false) => SelectionPhase::SelectedHidden,
            (Some(_), true) => SelectionPhase::SelectedVisible,
        }
    }

    /// The location whose panel is currently shown.
    #[must_use]
    pub fn visible_location(&self) -> Option<&Location> {
        if !self.selection.info_visible {
            return None;
        }
        self.selection.selected.as_deref().and_then(|id| self.location(id))
    }

    #[must_use]
    pub fn pins(&self) -> Vec<PinView> {
        let active = self.visible_location().map(|l| l.id.as_str());
        self.locations
            .iter()
            .map(|l| PinView {
                id: l.id.clone(),
                name: l.name.clone(),
                left_pct: l.coordinates.x,
                top_pct: l.coordinates.y,
                style: pin_style(l.icon, &l.status),
                selected: active == Some(l.id.as_str()),
            })
            .collect()
    }

    #[must_use]
    pub fn info_panel(&self) -> Option<InfoPanel> {
        let location = self.visible_location()?;
        Some(InfoPanel {
            id: location.id.clone(),
            title: location.name.clone(),
            description: location.description.clone(),
            status_line: status_line(&location.status),
        })
    }
}

#[must_use]
pub fn status_line(status: &LocationStatus) -> String {
    match status {
        LocationStatus::Active => "Operational now".to_owned(),
        LocationStatus::ComingSoon { year } => format!("Opening in {year}"),
    }
}
