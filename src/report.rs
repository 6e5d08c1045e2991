//! Plain-text rendering of a simulation run.
//!
//! The reporting sink consumes a fully-formed [`SimulationRun`] and
//! writes a dash-framed title, a Gantt strip, and a column-aligned
//! metrics table with an averages footer. It performs no computation of
//! its own beyond formatting.

use std::io::{self, Write};

use crate::models::{SimulationRun, TimeSlice};

const HEADERS: [&str; 7] = [
    "ID",
    "Priority",
    "Burst",
    "Arrival",
    "Wait",
    "Turnaround",
    "Exit",
];

/// Writes the complete report for one run.
pub fn write_report<W: Write>(w: &mut W, run: &SimulationRun) -> io::Result<()> {
    write_title(w, &run.discipline)?;
    write_gantt(w, &run.gantt)?;
    write_table(w, run)
}

fn write_title<W: Write>(w: &mut W, title: &str) -> io::Result<()> {
    let frame = "-".repeat(title.len() * 2);
    writeln!(w, "{frame}")?;
    writeln!(w, "{} {title}", " ".repeat(title.len() / 2))?;
    writeln!(w, "{frame}")
}

fn write_gantt<W: Write>(w: &mut W, gantt: &[TimeSlice]) -> io::Result<()> {
    writeln!(w, "Gantt schedule")?;

    write!(w, "|")?;
    for slice in gantt {
        let pid = slice.pid.to_string();
        let padding = " ".repeat((8usize.saturating_sub(pid.len())) / 2);
        write!(w, "{padding}{pid}{padding}|")?;
    }
    writeln!(w)?;

    for (i, slice) in gantt.iter().enumerate() {
        write!(w, "{}\t", slice.start)?;
        if i == gantt.len() - 1 {
            write!(w, "{}", slice.stop)?;
        }
    }
    writeln!(w, "\n")
}

fn write_table<W: Write>(w: &mut W, run: &SimulationRun) -> io::Result<()> {
    writeln!(w, "Schedule table")?;

    for header in HEADERS {
        write!(w, "{header:>10}")?;
    }
    writeln!(w)?;
    writeln!(w, "{}", "-".repeat(10 * HEADERS.len()))?;

    for m in &run.metrics {
        for value in [
            m.pid,
            m.priority,
            m.burst,
            m.arrival,
            m.waiting,
            m.turnaround,
            m.completion,
        ] {
            write!(w, "{value:>10}")?;
        }
        writeln!(w)?;
    }

    writeln!(w, "{}", "-".repeat(10 * HEADERS.len()))?;
    writeln!(w, "Average wait: {:.2}", run.stats.avg_waiting)?;
    writeln!(w, "Average turnaround: {:.2}", run.stats.avg_turnaround)?;
    writeln!(w, "Throughput: {:.2}/t", run.stats.throughput)?;
    writeln!(w)
}
