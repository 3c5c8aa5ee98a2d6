use std::collections::HashMap;
use std::io::{self, BufRead};
use std::path::Path;

use serde::Serialize;

use super::{open_optional, path_to_string, tokenize, ProbeError, Reading, Result};

pub const PROC_MEMINFO: &str = "/proc/meminfo";

/// Number of leading lines of `/proc/meminfo` that are read.
const MEMINFO_NUMBER_OF_LINES: usize = 2;

/// Key, value and unit.
const MEMINFO_NUMBER_OF_FIELDS: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MemoryInfo {
    /// Total amount of physical memory in Kb.
    pub total: i64,
    /// Amount of unused physical memory in Kb.
    pub free: i64,
}

/// Read the total and free memory of the system.
///
/// Returns a zeroed `MemoryInfo` when `/proc/meminfo` cannot be opened.
pub fn read() -> Result<MemoryInfo> {
    read_from(Path::new(PROC_MEMINFO)).map(Reading::into_value)
}

/// Read `MemTotal` and `MemFree` from the first two lines of `path`.
///
/// Only those two lines are looked at, the keys are expected to be there in
/// the order the kernel writes them. If one of them is somewhere else in the
/// file the matching field stays 0. A read failure after the file opened is
/// reported as `ProbeError::IO`.
pub fn read_from(path: &Path) -> Result<Reading<MemoryInfo>> {
    let file = match open_optional(path) {
        Some(file) => file,
        None => return Ok(Reading::Unavailable),
    };
    let mut reader = io::BufReader::new(file);

    let mut info: HashMap<String, i64> = HashMap::with_capacity(MEMINFO_NUMBER_OF_LINES);
    let mut line = String::new();
    for _ in 0..MEMINFO_NUMBER_OF_LINES {
        line.clear();
        let read = reader
            .read_line(&mut line)
            .map_err(|e| ProbeError::IO(e, path_to_string(path)))?;
        if read == 0 {
            return Err(ProbeError::UnexpectedContent(format!(
                "Unexpected end of {}",
                path.display()
            )));
        }

        let (key, value) = parse_line(path, &line)?;
        info.insert(key.to_owned(), value);
    }

    Ok(Reading::Available(MemoryInfo {
        total: info.get("MemTotal").copied().unwrap_or(0),
        free: info.get("MemFree").copied().unwrap_or(0),
    }))
}

/// Parse a `Key:   value unit` line.
fn parse_line<'a>(path: &Path, line: &'a str) -> Result<(&'a str, i64)> {
    let line = line.trim_matches(|c: char| c == ' ' || c == '\n' || c == '\r');
    let segments = tokenize(line);
    if segments.len() != MEMINFO_NUMBER_OF_FIELDS {
        return Err(ProbeError::UnexpectedContent(format!(
            "Unexpected {}: {} {}",
            path.display(),
            line,
            segments.len()
        )));
    }

    let key = segments[0].strip_suffix(':').unwrap_or(segments[0]);
    let value = segments[1].parse::<i64>().map_err(|e| {
        ProbeError::UnexpectedContent(format!(
            "Failed to parse {} value '{}': {}",
            path.display(),
            segments[1],
            e
        ))
    })?;

    Ok((key, value))
}
