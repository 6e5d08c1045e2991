//! Gantt timeline model.

use serde::{Deserialize, Serialize};

/// One uninterrupted processor occupancy interval.
///
/// A discipline emits these in execution order. Adjacent slices for the
/// same process are kept distinct when produced by separate scheduling
/// decisions — no coalescing is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlice {
    /// Process that held the processor.
    pub pid: i64,
    /// Tick the interval began.
    pub start: i64,
    /// Tick the interval ended.
    pub stop: i64,
}

impl TimeSlice {
    /// Creates a new slice.
    pub fn new(pid: i64, start: i64, stop: i64) -> Self {
        Self { pid, start, stop }
    }

    /// Interval length (stop - start) in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.stop - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_duration() {
        let s = TimeSlice::new(1, 3, 8);
        assert_eq!(s.duration(), 5);
    }

    #[test]
    fn test_zero_width_slice() {
        // Preemption at the instant a process is selected produces these.
        let s = TimeSlice::new(2, 4, 4);
        assert_eq!(s.duration(), 0);
    }
}
