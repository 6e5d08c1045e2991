//! First-come, first-serve scheduling.
//!
//! Non-preemptive; processes are served strictly in input order. The
//! caller is responsible for input order matching arrival order when
//! textbook FCFS semantics are wanted — the list is not re-sorted.

use crate::models::{Process, ProcessMetrics, SimulationRun, TimeSlice};
use crate::scheduler::stats::run_stats;
use crate::scheduler::Discipline;
use crate::validation::{validate_processes, InputError};

/// First-come, first-serve.
///
/// Completion is computed analytically from cumulative service time
/// rather than observed from the slice stream.
///
/// # Waiting-time rule
/// The running `waiting` value is only reassigned for processes whose
/// own arrival is greater than zero; a zero-arrival process that is not
/// first in the list inherits the previous iteration's leftover value.
/// This asymmetry is deliberate and reports depend on it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Discipline for Fcfs {
    fn name(&self) -> &'static str {
        "First-come, first-serve"
    }

    fn run(&self, processes: &[Process]) -> Result<SimulationRun, Vec<InputError>> {
        validate_processes(processes)?;

        let mut service_time: i64 = 0;
        let mut waiting: i64 = 0;
        let mut last_completion: i64 = 0;
        let mut gantt = Vec::new();
        let mut metrics = Vec::with_capacity(processes.len());

        for p in processes {
            if p.arrival > 0 {
                waiting = (service_time - p.arrival).max(0);
            }

            let start = waiting + p.arrival;
            let turnaround = p.burst + waiting;
            let completion = p.burst + p.arrival + waiting;
            last_completion = completion;

            // A process arriving after the queue drains idles the
            // processor; the clock jumps to its arrival so the slice
            // stop lines up with the clamped start.
            service_time = service_time.max(p.arrival) + p.burst;
            gantt.push(TimeSlice::new(p.id, start, service_time));
            metrics.push(ProcessMetrics {
                pid: p.id,
                priority: p.priority,
                burst: p.burst,
                arrival: p.arrival,
                waiting,
                turnaround,
                completion,
            });
        }

        // Throughput is taken over the last row's completion, not the
        // makespan maximum.
        let stats = run_stats(&metrics, last_completion);
        Ok(SimulationRun {
            discipline: self.name().to_string(),
            gantt,
            metrics,
            stats,
        })
    }
}
