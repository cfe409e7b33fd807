//! JSON document I/O for the reconciliation pipeline.
//!
//! Both output files are written through a temp file in the destination
//! directory and renamed into place, so an interrupted run never leaves
//! a truncated document behind.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::records::{BenchmarkDocument, BenchmarkRecord, MatchRecord, RosterModel};

/// Load the benchmark score table: a JSON object with a `data` list.
pub fn load_benchmarks(path: &Path) -> Result<Vec<BenchmarkRecord>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read benchmark file: {}", path.display()))?;
    let document: BenchmarkDocument = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse benchmark file: {}", path.display()))?;
    Ok(document.data)
}

/// Load the API model roster: a top-level JSON list.
pub fn load_roster(path: &Path) -> Result<Vec<RosterModel>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster file: {}", path.display()))?;
    let roster: Vec<RosterModel> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse roster file: {}", path.display()))?;
    Ok(roster)
}

/// Overwrite the roster document with the enriched records.
pub fn save_roster(path: &Path, roster: &[RosterModel]) -> Result<()> {
    write_json_atomic(path, roster)
        .with_context(|| format!("Failed to write roster file: {}", path.display()))
}

/// Write the match detail report.
pub fn save_match_report(path: &Path, matches: &[MatchRecord]) -> Result<()> {
    write_json_atomic(path, matches)
        .with_context(|| format!("Failed to write match report: {}", path.display()))
}

fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;

    // parent() of a bare filename is "", which NamedTempFile rejects
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(json.as_bytes())?;
    tmp.write_all(b"\n")?;
    tmp.persist(path)?;
    Ok(())
}
