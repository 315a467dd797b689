//! GridCam Camera Model
//!
//! Data contracts shared by the layout planner and the capture engine:
//!
//! - **Formats**: wire formats advertised at discovery time and the decoded
//!   buffer layouts that all stitching arithmetic is based on
//! - **Drivers**: capture backend identifiers, including the grid marker
//!   for synthesized composites
//! - **Settings**: the per-device tunable modes forwarded through the
//!   capture contract
//! - **Sources**: [`SourceConfig`] records and JSON discovery snapshots
//!
//! Everything in this crate is plain serializable data. Device I/O lives in
//! the capture engine; grouping and candidate enumeration live in the
//! layout planner.

pub mod discovery;
pub mod driver;
pub mod format;
pub mod settings;
pub mod source;

pub use discovery::*;
pub use driver::*;
pub use format::*;
pub use settings::*;
pub use source::*;
