//! Round-robin scheduling with a fixed quantum of 2.
//!
//! Works on a private arrival-sorted copy of the input, then repeatedly
//! sweeps that order linearly, granting every unfinished process another
//! quantum per visit. This is not a true rotating ready queue: arrival
//! eligibility is only honored through the initial sort, so a process
//! whose arrival lies beyond the current clock is still given slices.
//! Gantt slicing is index-adjacency based and approximate at quantum
//! boundaries. Both simplifications are deliberate; the reported
//! metrics depend on them exactly.

use crate::models::{Process, ProcessMetrics, SimulationRun, TimeSlice};
use crate::scheduler::stats::run_stats;
use crate::scheduler::Discipline;
use crate::validation::{validate_processes, InputError};

/// Time units granted per visit.
const QUANTUM: i64 = 2;

/// Round-robin over a repeated linear sweep.
///
/// Metrics rows follow the internally arrival-sorted order, not the
/// input order. Waiting time is derived by subtraction
/// (`turnaround - burst`) after the sweep terminates.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundRobin;

/// Sweep bookkeeping: the sorted descriptor plus its countdown state.
#[derive(Debug)]
struct Slot {
    desc: Process,
    remaining: i64,
    turnaround: i64,
}

impl Discipline for RoundRobin {
    fn name(&self) -> &'static str {
        "Round-robin"
    }

    fn run(&self, processes: &[Process]) -> Result<SimulationRun, Vec<InputError>> {
        validate_processes(processes)?;

        // Private copy: the caller's list is never reordered. The sort is
        // stable, so equal arrivals keep their input order.
        let mut order: Vec<Process> = processes.to_vec();
        order.sort_by_key(|p| p.arrival);

        let mut slots: Vec<Slot> = order
            .into_iter()
            .map(|p| Slot {
                remaining: p.burst,
                turnaround: 0,
                desc: p,
            })
            .collect();

        let n = slots.len();
        let mut current_time: i64 = 0;
        let mut gantt = Vec::new();

        loop {
            let mut done = true;

            for i in 0..n {
                if slots[i].remaining > 0 {
                    done = false;
                    if slots[i].remaining > QUANTUM {
                        current_time += QUANTUM;
                        slots[i].remaining -= QUANTUM;
                    } else {
                        current_time += slots[i].remaining;
                        slots[i].turnaround = current_time - slots[i].desc.arrival;
                        slots[i].remaining = 0;
                    }

                    // Close a slice for the neighbor whenever the visited
                    // process differs from it. Approximate: the interval
                    // is pinned to the last quantum, not to when the
                    // neighbor actually ran.
                    if i > 0 && slots[i].desc.id != slots[i - 1].desc.id {
                        gantt.push(TimeSlice::new(
                            slots[i - 1].desc.id,
                            current_time - QUANTUM,
                            current_time,
                        ));
                    }
                }
            }

            if done {
                break;
            }
        }

        gantt.push(TimeSlice::new(
            slots[n - 1].desc.id,
            current_time - slots[n - 1].remaining,
            current_time,
        ));

        let metrics: Vec<ProcessMetrics> = slots
            .iter()
            .map(|s| ProcessMetrics {
                pid: s.desc.id,
                priority: s.desc.priority,
                burst: s.desc.burst,
                arrival: s.desc.arrival,
                waiting: s.turnaround - s.desc.burst,
                turnaround: s.turnaround,
                completion: s.desc.arrival + s.turnaround,
            })
            .collect();

        let stats = run_stats(&metrics, current_time);
        Ok(SimulationRun {
            discipline: self.name().to_string(),
            gantt,
            metrics,
            stats,
        })
    }
}
