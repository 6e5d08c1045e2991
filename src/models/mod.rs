//! Scheduling simulation domain models.
//!
//! Immutable process descriptors on the input side; Gantt slices,
//! per-process metrics, and aggregate statistics on the output side.
//! All types are plain data with serde support; the disciplines in
//! [`crate::scheduler`] produce them but never hold onto them.

mod outcome;
mod process;
mod timeline;

pub use outcome::{ProcessMetrics, RunStats, SimulationRun};
pub use process::Process;
pub use timeline::TimeSlice;
