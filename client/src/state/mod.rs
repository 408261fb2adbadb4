//! Client-side state for the interactive page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component owns one of these models exclusively; nothing here is
//! shared between the inquiry dialog and the location map.

pub mod inquiry;
pub mod map;

/// Static component configuration rejected at construction time.
///
/// Fatal to the component that was handed the configuration, never to the page.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("service option list is empty")]
    EmptyServiceOptions,
    #[error("duplicate service option value: {0}")]
    DuplicateServiceOption(String),
    #[error("location list is empty")]
    EmptyLocations,
    #[error("duplicate location id: {0}")]
    DuplicateLocation(String),
    #[error("location {id} has coordinates outside 0-100")]
    CoordinatesOutOfRange { id: String },
    #[error("coming-soon location {id} has a blank opening year")]
    BlankYear { id: String },
}
