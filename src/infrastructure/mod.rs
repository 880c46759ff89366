//! Infrastructure layer providing external service integrations.
//!
//! This module contains implementations for external concerns like
//! configuration files, the system clipboard, and log output.

pub mod config;
pub mod logging;
pub mod sms;

pub use config::*;
pub use logging::*;
pub use sms::*;
