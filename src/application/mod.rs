//! Application layer managing state and screen workflows.
//!
//! This module coordinates between the domain layer and presentation layer,
//! managing navigation, timed transitions, and user interactions.

pub mod state;

pub use state::*;
