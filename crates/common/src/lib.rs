//! GridCam Common Utilities
//!
//! Shared infrastructure for all GridCam crates:
//! - Error types and result aliases
//! - Tracing/logging initialization

pub mod error;
pub mod logging;

pub use error::*;
