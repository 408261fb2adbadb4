//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `inquiry_dialog` and `location_map` are the interactive leaves; the rest
//! is page chrome that only reads static content and forwards CTA clicks.

pub mod hero;
pub mod inquiry_dialog;
pub mod location_map;
pub mod sections;
pub mod site_footer;
pub mod site_header;
