//! Aggregate run statistics.
//!
//! Computes the averages and throughput for one discipline's metrics
//! table. The throughput horizon differs per discipline — the last row's
//! completion for FCFS, the corrected final clock for the
//! shortest-remaining variants, the final clock for round-robin — so the
//! caller supplies it.

use crate::models::{ProcessMetrics, RunStats};

/// Computes aggregate statistics over a metrics table.
///
/// Callers guarantee a non-empty table and a positive horizon; both are
/// implied by input validation and burst positivity.
pub(crate) fn run_stats(metrics: &[ProcessMetrics], horizon: i64) -> RunStats {
    let count = metrics.len() as f64;
    let total_waiting: i64 = metrics.iter().map(|m| m.waiting).sum();
    let total_turnaround: i64 = metrics.iter().map(|m| m.turnaround).sum();

    RunStats {
        avg_waiting: total_waiting as f64 / count,
        avg_turnaround: total_turnaround as f64 / count,
        throughput: count / horizon as f64,
    }
}
