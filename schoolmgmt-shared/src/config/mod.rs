//! # Configuration
//!
//! Tunable thresholds and timings for the page interactions. Every field has a
//! default matching the production page, so an empty override is valid.

pub mod interaction;

pub use interaction::{CardConfig, InteractionConfig, LoginConfig, MobileConfig, NavbarConfig};
