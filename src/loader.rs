//! Process list loading.
//!
//! Parses a comma-separated record format, one process per line:
//!
//! ```text
//! id,burst,arrival[,priority]
//! ```
//!
//! Priority defaults to 0 when the fourth column is absent. Blank lines
//! are skipped; any non-integer field or short row fails with the
//! offending line number. Structural validation of the resulting set
//! (positive bursts, unique IDs) is the job of [`crate::validation`].

use std::io::{self, BufRead, BufReader, Read};

use thiserror::Error;

use crate::models::Process;

/// Errors raised while reading a process list.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The underlying reader failed.
    #[error("failed to read process list: {0}")]
    Io(#[from] io::Error),
    /// A line had fewer than the three required columns.
    #[error("line {0}: expected at least 3 comma-separated fields, got {1}")]
    MissingFields(usize, usize),
    /// A field did not parse as an integer.
    #[error("line {0}: invalid integer field '{1}'")]
    InvalidField(usize, String),
}

/// Reads a process list from any reader.
pub fn load_processes<R: Read>(reader: R) -> Result<Vec<Process>, LoadError> {
    let mut processes = Vec::new();

    for (index, line) in BufReader::new(reader).lines().enumerate() {
        let number = index + 1;
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() < 3 {
            return Err(LoadError::MissingFields(number, fields.len()));
        }

        let id = parse_field(number, fields[0])?;
        let burst = parse_field(number, fields[1])?;
        let arrival = parse_field(number, fields[2])?;

        let mut process = Process::new(id, arrival, burst);
        if fields.len() >= 4 {
            process = process.with_priority(parse_field(number, fields[3])?);
        }
        processes.push(process);
    }

    Ok(processes)
}

fn parse_field(line: usize, raw: &str) -> Result<i64, LoadError> {
    raw.parse()
        .map_err(|_| LoadError::InvalidField(line, raw.to_string()))
}
