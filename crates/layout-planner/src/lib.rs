//! GridCam Layout Planner
//!
//! Turns the flat config list a discovery pass produced into grid composite
//! candidates:
//!
//! 1. **Group** the configs into compatibility groups (identical width,
//!    height, frame rate, wire format and driver).
//! 2. **Enumerate** every rows x columns layout per group: one candidate for
//!    each factorization of the group size.
//!
//! A candidate is an ordinary [`SourceConfig`] with the grid driver marker
//! and the member configs carried in `children`; the capture engine turns it
//! into a running composite.
//!
//! This crate is pure computation — no I/O, no device dependencies.
//! All inputs are data; all outputs are data.

pub mod candidates;
pub mod grouping;

pub use candidates::{candidates_for_group, plan_grid_candidates};
pub use grouping::{group_compatible, CompatibilityGroup};

#[doc(no_inline)]
pub use gridcam_camera_model::SourceConfig;
