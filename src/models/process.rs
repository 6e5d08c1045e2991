//! Process descriptor model.
//!
//! The immutable input record for a single process. Disciplines that
//! need to count down a remaining burst work on private copies; the
//! descriptor's `burst` always remains the total for reporting.

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Constructed once from external input and read-only afterwards.
///
/// # Time Representation
/// All times are integer simulation ticks relative to t=0. The consumer
/// defines the unit (the simulation itself is unit-agnostic).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier. Expected positive and unique within an
    /// input set; uniqueness is enforced by [`crate::validation`].
    pub id: i64,
    /// Tick at which the process becomes eligible to run (>= 0).
    pub arrival: i64,
    /// Total processing time required (> 0).
    pub burst: i64,
    /// Scheduling priority; larger wins remaining-burst ties in the
    /// priority discipline. Defaults to 0.
    pub priority: i64,
}

impl Process {
    /// Creates a new process with priority 0.
    pub fn new(id: i64, arrival: i64, burst: i64) -> Self {
        Self {
            id,
            arrival,
            burst,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }
}
