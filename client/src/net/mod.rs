//! Submission plumbing between the inquiry form and its endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only "network" in this site is the inquiry submitter seam. The
//! default submitter is simulated; a real endpoint plugs in behind the same
//! trait without changing the form's state machine.

pub mod submit;
