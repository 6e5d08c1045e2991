//! Scheduling disciplines.
//!
//! Each discipline consumes the same immutable process list and produces
//! its own [`SimulationRun`]. Disciplines never share state: every run
//! works on private copies, so the four can be invoked in any order (or
//! from parallel threads) over one loaded input.
//!
//! # Usage
//!
//! ```
//! use proc_sim::models::Process;
//! use proc_sim::scheduler::{Discipline, Fcfs};
//!
//! let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
//! let run = Fcfs.run(&processes).unwrap();
//! assert_eq!(run.stats.avg_waiting, 2.0); // waits 0 and 4
//! ```
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

mod fcfs;
mod round_robin;
mod srtf;
mod stats;

pub use fcfs::Fcfs;
pub use round_robin::RoundRobin;
pub use srtf::ShortestRemaining;

use std::fmt::Debug;

use crate::models::{Process, SimulationRun};
use crate::validation::InputError;

/// A scheduling discipline.
///
/// Implementations validate the input before simulating and fail fast on
/// degenerate process sets rather than producing NaN statistics or
/// looping forever.
pub trait Discipline: Send + Sync + Debug {
    /// Discipline name, used as the report title.
    fn name(&self) -> &'static str;

    /// Simulates the discipline over the given process list.
    fn run(&self, processes: &[Process]) -> Result<SimulationRun, Vec<InputError>>;
}

/// Returns all four disciplines in the canonical report order.
pub fn disciplines() -> Vec<Box<dyn Discipline>> {
    vec![
        Box::new(Fcfs),
        Box::new(ShortestRemaining::new()),
        Box::new(ShortestRemaining::with_priority_tie_break()),
        Box::new(RoundRobin),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    /// Workloads where the processor never idles: the first process
    /// arrives at t=0 and process i arrives no later than tick i, by
    /// which point at least i bursts' worth of work is already queued.
    /// Later arrivals also keep the FCFS leftover-waiting rule inactive.
    fn random_workload(rng: &mut SmallRng) -> Vec<Process> {
        let n = rng.random_range(1..=6usize);
        (0..n)
            .map(|i| {
                let arrival = if i == 0 {
                    0
                } else {
                    rng.random_range(1..=i as i64)
                };
                Process::new(i as i64 + 1, arrival, rng.random_range(1..=8i64))
                    .with_priority(rng.random_range(0..4i64))
            })
            .collect()
    }

    fn total_burst(processes: &[Process]) -> i64 {
        processes.iter().map(|p| p.burst).sum()
    }

    #[test]
    fn test_waiting_never_negative() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            let processes = random_workload(&mut rng);
            for discipline in disciplines() {
                let run = discipline.run(&processes).unwrap();
                for m in &run.metrics {
                    assert!(
                        m.waiting >= 0,
                        "{}: pid {} waited {}",
                        discipline.name(),
                        m.pid,
                        m.waiting
                    );
                }
            }
        }
    }

    #[test]
    fn test_turnaround_identity() {
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..50 {
            let processes = random_workload(&mut rng);
            for discipline in disciplines() {
                let run = discipline.run(&processes).unwrap();
                for m in &run.metrics {
                    assert_eq!(m.turnaround, m.waiting + m.burst, "{}", discipline.name());
                }
            }
        }
    }

    #[test]
    fn test_slices_ordered_and_disjoint() {
        // Round-robin's index-adjacency slicing is a known approximation
        // and is excluded here.
        let disciplines: Vec<Box<dyn Discipline>> = vec![
            Box::new(Fcfs),
            Box::new(ShortestRemaining::new()),
            Box::new(ShortestRemaining::with_priority_tie_break()),
        ];
        let mut rng = SmallRng::seed_from_u64(13);
        let mut workloads: Vec<Vec<Process>> =
            (0..50).map(|_| random_workload(&mut rng)).collect();
        // An arrival gap idles the processor. FCFS must place the
        // post-gap slice after the gap; the shortest-remaining variants
        // keep their open slice spanning it, which still orders.
        workloads.push(vec![
            Process::new(1, 0, 2),
            Process::new(2, 6, 1),
            Process::new(3, 7, 2),
        ]);
        for processes in &workloads {
            for discipline in &disciplines {
                let run = discipline.run(processes).unwrap();
                for s in &run.gantt {
                    assert!(
                        s.start <= s.stop,
                        "{}: pid {} start {} stop {}",
                        discipline.name(),
                        s.pid,
                        s.start,
                        s.stop
                    );
                }
                for pair in run.gantt.windows(2) {
                    assert!(pair[0].stop <= pair[1].start, "{}", discipline.name());
                }
            }
        }
    }

    #[test]
    fn test_work_conserved() {
        let disciplines: Vec<Box<dyn Discipline>> = vec![
            Box::new(Fcfs),
            Box::new(ShortestRemaining::new()),
            Box::new(ShortestRemaining::with_priority_tie_break()),
        ];
        let mut rng = SmallRng::seed_from_u64(17);
        for _ in 0..50 {
            let processes = random_workload(&mut rng);
            for discipline in &disciplines {
                let run = discipline.run(&processes).unwrap();
                assert_eq!(run.busy_time(), total_burst(&processes), "{}", discipline.name());
            }
        }
    }

    #[test]
    fn test_round_robin_work_in_completions() {
        // The round-robin clock only advances by executed work, so the
        // last completion accounts for every burst unit.
        let mut rng = SmallRng::seed_from_u64(19);
        for _ in 0..50 {
            let processes = random_workload(&mut rng);
            let run = RoundRobin.run(&processes).unwrap();
            let last = run.metrics.iter().map(|m| m.completion).max().unwrap();
            assert_eq!(last, total_burst(&processes));
        }
    }

    #[test]
    fn test_priority_tie_break_is_pure_refinement() {
        // With uniform priorities the tie-break condition can never fire,
        // so both shortest-remaining disciplines must schedule identically.
        let mut rng = SmallRng::seed_from_u64(23);
        for _ in 0..50 {
            let processes: Vec<Process> = random_workload(&mut rng)
                .into_iter()
                .map(|p| p.with_priority(0))
                .collect();
            let plain = ShortestRemaining::new().run(&processes).unwrap();
            let tie_break = ShortestRemaining::with_priority_tie_break()
                .run(&processes)
                .unwrap();
            assert_eq!(plain.gantt, tie_break.gantt);
            assert_eq!(plain.metrics, tie_break.metrics);
        }
    }

    #[test]
    fn test_degenerate_input_rejected() {
        let zero_burst = vec![Process::new(1, 0, 0)];
        for discipline in disciplines() {
            assert!(discipline.run(&[]).is_err(), "{}", discipline.name());
            assert!(discipline.run(&zero_burst).is_err(), "{}", discipline.name());
        }
    }

    #[test]
    fn test_canonical_order() {
        let names: Vec<&str> = disciplines().iter().map(|d| d.name()).collect();
        assert_eq!(
            names,
            vec![
                "First-come, first-serve",
                "Shortest-job-first",
                "Priority",
                "Round-robin"
            ]
        );
    }
}
