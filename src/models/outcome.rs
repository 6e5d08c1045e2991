//! Simulation run output model.
//!
//! A [`SimulationRun`] is one discipline's complete answer: the Gantt
//! sequence, the per-process metrics table, and aggregate statistics.

use serde::{Deserialize, Serialize};

use super::TimeSlice;

/// Timing results for a single process under one discipline.
///
/// Echoes the descriptor fields (`pid`, `priority`, `burst`, `arrival`)
/// so a row is self-contained for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process identifier.
    pub pid: i64,
    /// Scheduling priority from the descriptor.
    pub priority: i64,
    /// Total burst from the descriptor.
    pub burst: i64,
    /// Arrival tick from the descriptor.
    pub arrival: i64,
    /// Ticks spent eligible but not executing.
    pub waiting: i64,
    /// Ticks from arrival to completion.
    pub turnaround: i64,
    /// Absolute tick the process finished.
    pub completion: i64,
}

/// Aggregate statistics over one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    /// Mean waiting time across all processes.
    pub avg_waiting: f64,
    /// Mean turnaround time across all processes.
    pub avg_turnaround: f64,
    /// Processes completed per tick. The horizon each discipline divides
    /// by is discipline-specific (see `crate::scheduler`).
    pub throughput: f64,
}

/// One discipline's complete output for a process set.
///
/// `metrics` preserves the input order, except for round-robin, which
/// reports in its internally arrival-sorted order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRun {
    /// Human-readable discipline name, used as the report title.
    pub discipline: String,
    /// Occupancy intervals in execution order.
    pub gantt: Vec<TimeSlice>,
    /// Per-process timing rows.
    pub metrics: Vec<ProcessMetrics>,
    /// Aggregate statistics.
    pub stats: RunStats,
}

impl SimulationRun {
    /// Finds the metrics row for a given process.
    pub fn metrics_for(&self, pid: i64) -> Option<&ProcessMetrics> {
        self.metrics.iter().find(|m| m.pid == pid)
    }

    /// Returns all Gantt slices for a given process.
    pub fn slices_for(&self, pid: i64) -> Vec<&TimeSlice> {
        self.gantt.iter().filter(|s| s.pid == pid).collect()
    }

    /// Total time the processor was occupied (sum of slice durations).
    pub fn busy_time(&self) -> i64 {
        self.gantt.iter().map(|s| s.duration()).sum()
    }

    /// Number of Gantt slices.
    pub fn slice_count(&self) -> usize {
        self.gantt.len()
    }

    /// Number of processes in the run.
    pub fn process_count(&self) -> usize {
        self.metrics.len()
    }
}
