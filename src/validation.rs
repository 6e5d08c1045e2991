//! Input validation for scheduling simulations.
//!
//! Checks a process list before any discipline runs. Degenerate input is
//! the core's only real failure mode: an empty set divides by zero in the
//! averages, and a non-positive burst breaks the termination guarantee of
//! the preemptive disciplines (which count a remaining burst down to
//! exactly zero). Detects:
//! - Empty process sets
//! - Non-positive bursts
//! - Negative arrival times
//! - Duplicate process IDs

use std::collections::HashSet;

use crate::models::Process;

/// Validation result.
pub type InputResult = Result<(), Vec<InputError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct InputError {
    /// Error category.
    pub kind: InputErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputErrorKind {
    /// The process set is empty.
    Empty,
    /// A process has a burst <= 0.
    NonPositiveBurst,
    /// A process arrives before t=0.
    NegativeArrival,
    /// Two processes share the same ID.
    DuplicateId,
}

impl InputError {
    fn new(kind: InputErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a process list before simulation.
///
/// Checks:
/// 1. The set is non-empty
/// 2. Every burst is strictly positive
/// 3. No arrival time is negative
/// 4. Process IDs are unique
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> InputResult {
    if processes.is_empty() {
        return Err(vec![InputError::new(
            InputErrorKind::Empty,
            "Process set is empty",
        )]);
    }

    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for p in processes {
        if p.burst <= 0 {
            errors.push(InputError::new(
                InputErrorKind::NonPositiveBurst,
                format!("Process {} has non-positive burst {}", p.id, p.burst),
            ));
        }
        if p.arrival < 0 {
            errors.push(InputError::new(
                InputErrorKind::NegativeArrival,
                format!("Process {} has negative arrival {}", p.id, p.arrival),
            ));
        }
        if !seen.insert(p.id) {
            errors.push(InputError::new(
                InputErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
