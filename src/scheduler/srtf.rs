//! Preemptive shortest-remaining-time scheduling.
//!
//! Despite the traditional "shortest-job-first" name, both disciplines
//! here are simulated as shortest-remaining-time-first, stepped one time
//! unit at a time. The stepped O(n × total-time) loop is intentional:
//! preemption decisions and waiting-time accrual fall directly out of
//! the per-tick scan. An event-driven priority-queue simulation would
//! be an equivalent, faster strategy.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use crate::models::{Process, ProcessMetrics, SimulationRun, TimeSlice};
use crate::scheduler::stats::run_stats;
use crate::scheduler::Discipline;
use crate::validation::{validate_processes, InputError};

/// Per-process bookkeeping for one run.
///
/// Bundles the immutable descriptor with its mutable state so the two
/// can never fall out of step. `remaining` is counted down in place; the
/// descriptor's `burst` stays intact as the total for reporting.
#[derive(Debug)]
struct Slot<'a> {
    desc: &'a Process,
    remaining: i64,
    waiting: i64,
    exit: i64,
}

/// Shortest-remaining-time-first, with or without a priority tie-break.
///
/// The plain variant preempts only on a strictly smaller remaining
/// burst; equal remaining bursts never trigger a switch, so ties favor
/// whichever process was already executing. The tie-break variant
/// additionally lets a candidate with an equal remaining burst preempt
/// when its priority is strictly greater. That is the only behavioral
/// difference between the two.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining {
    priority_tie_break: bool,
}

impl ShortestRemaining {
    /// Plain shortest-remaining-time.
    pub fn new() -> Self {
        Self {
            priority_tie_break: false,
        }
    }

    /// Shortest-remaining-time with the priority tie-break.
    pub fn with_priority_tie_break() -> Self {
        Self {
            priority_tie_break: true,
        }
    }
}

impl Default for ShortestRemaining {
    fn default() -> Self {
        Self::new()
    }
}

impl Discipline for ShortestRemaining {
    fn name(&self) -> &'static str {
        if self.priority_tie_break {
            "Priority"
        } else {
            "Shortest-job-first"
        }
    }

    fn run(&self, processes: &[Process]) -> Result<SimulationRun, Vec<InputError>> {
        validate_processes(processes)?;

        let mut slots: Vec<Slot> = processes
            .iter()
            .map(|p| Slot {
                desc: p,
                remaining: p.burst,
                waiting: 0,
                exit: 0,
            })
            .collect();

        let mut gantt = Vec::new();
        let mut time: i64 = 0;
        let mut start: i64 = 0;
        let mut current: usize = 0;

        while slots.iter().any(|s| s.exit == 0) {
            let mut switched = false;

            // Accrue waiting for eligible bystanders; burn one unit of
            // the running process. Eligibility is a strict comparison, so
            // nothing executes on the tick it arrives.
            for index in 0..slots.len() {
                if slots[index].desc.arrival < time {
                    if index != current && slots[index].exit == 0 {
                        slots[index].waiting += 1;
                    } else if index == current {
                        slots[index].remaining -= 1;
                        if slots[index].remaining == 0 {
                            switched = true;
                            slots[index].exit = time;
                        }
                    }
                }
            }

            // Candidate scan. Every comparison is against the running
            // process, and the last matching index wins.
            let mut candidate = 0;
            for index in 0..slots.len() {
                if slots[index].exit == 0 && slots[index].desc.arrival <= time {
                    let preempts = slots[index].remaining < slots[current].remaining
                        || slots[current].remaining < 1
                        || (self.priority_tie_break
                            && slots[index].remaining == slots[current].remaining
                            && slots[index].desc.priority > slots[current].desc.priority);
                    if preempts {
                        candidate = index;
                        switched = true;
                    }
                }
            }

            if switched {
                gantt.push(TimeSlice::new(slots[current].desc.id, start, time));
                current = candidate;
                start = time;
            }

            time += 1;
        }

        let metrics: Vec<ProcessMetrics> = slots
            .iter()
            .map(|s| ProcessMetrics {
                pid: s.desc.id,
                priority: s.desc.priority,
                burst: s.desc.burst,
                arrival: s.desc.arrival,
                waiting: s.waiting,
                turnaround: s.waiting + s.desc.burst,
                completion: s.exit,
            })
            .collect();

        // The loop's exit clock overshoots the last completion by one.
        let stats = run_stats(&metrics, time - 1);
        Ok(SimulationRun {
            discipline: self.name().to_string(),
            gantt,
            metrics,
            stats,
        })
    }
}
