//! Reading expense snapshots
//!
//! A snapshot is the JSON array of records an expense store hands over. The
//! CLI reads one from disk; nothing here writes back.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ExpenseRecord;

/// Parse a snapshot from any reader
pub fn parse_snapshot<R: Read>(reader: R) -> ExpenseResult<Vec<ExpenseRecord>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Read a snapshot file, failing if it does not exist
pub fn read_snapshot<P: AsRef<Path>>(path: P) -> ExpenseResult<Vec<ExpenseRecord>> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ExpenseError::snapshot_not_found(path.display().to_string()));
    }

    let file = File::open(path)
        .map_err(|e| ExpenseError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let records = parse_snapshot(BufReader::new(file))
        .map_err(|e| ExpenseError::Json(format!("Failed to parse {}: {}", path.display(), e)))?;

    tracing::debug!(path = %path.display(), records = records.len(), "read expense snapshot");
    Ok(records)
}
