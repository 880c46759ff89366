//! Bobita - egg storefront library
//!
//! A terminal storefront for Bobiță's eggs: pick quantities, submit orders
//! through a short processing step, and hand the cart to an SMS composer.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
