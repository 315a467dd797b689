//! GridCam Capture Engine
//!
//! Runs capture sources behind one uniform contract and composes several
//! of them into a single mosaic source. A grid composite created from a
//! planner candidate is indistinguishable from a single camera to the
//! host: same lifecycle, same settings surface, same frame delivery.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 GridCamera                  │
//! │  ┌──────────┐ ┌──────────┐ ┌──────────┐     │
//! │  │ Source 0 │ │ Source 1 │ │ Source N │ ... │
//! │  └─────┬────┘ └─────┬────┘ └─────┬────┘     │
//! │        │            │            │          │
//! │        ▼            ▼            ▼          │
//! │  ┌────────────────────────────────────────┐ │
//! │  │   Composite frame (one allocation)     │ │
//! │  │   tile(0,0) tile(0,1) .. tile(R-1,C-1) │ │
//! │  └────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Child sources come from a [`SourceFactory`] the host supplies; the
//! [`SyntheticCamera`] backend ships with the crate for tests and
//! development rigs.

pub mod grid;
pub mod source;
pub mod synthetic;

pub use grid::GridCamera;
pub use source::{CaptureSource, SourceFactory};
pub use synthetic::{SyntheticCamera, SyntheticFactory};
