//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site is one page; it owns the inquiry form state and delegates
//! rendering details to `components`.

pub mod home;
