//! CPU scheduling simulation.
//!
//! Simulates four classic scheduling disciplines over a fixed, fully known
//! process list and derives per-process timing plus aggregate statistics.
//! Each discipline consumes the same input independently and produces a
//! Gantt occupancy sequence, a per-process metrics table, and averages.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `TimeSlice`, `ProcessMetrics`,
//!   `RunStats`, `SimulationRun`
//! - **`scheduler`**: The four disciplines behind the [`scheduler::Discipline`] trait
//! - **`validation`**: Fail-fast input checks (empty sets, degenerate bursts)
//! - **`loader`**: Comma-separated process list parsing
//! - **`report`**: Plain-text rendering of a completed run
//!
//! # Disciplines
//!
//! | Discipline | Preemption | Notes |
//! |------------|------------|-------|
//! | First-come, first-serve | none | served strictly in input order |
//! | Shortest-job-first | every time unit | smallest remaining burst wins |
//! | Priority | every time unit | larger priority wins remaining-burst ties |
//! | Round-robin | quantum of 2 | repeated linear sweep in arrival order |
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod loader;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
