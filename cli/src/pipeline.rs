//! The sequential parse -> transform -> validate -> collect pipeline.

use gridmap_common::{CellRecord, GridMapError};
use irish_grid::parse_entry;
use tracing::warn;

/// Parse every input line into validated cell records, preserving input
/// order.
///
/// Every rejected line is reported with its raw text and skipped; nothing
/// per-line aborts the run. Duplicates are kept.
pub fn collect_records(input: &str) -> Vec<CellRecord> {
    let mut records = Vec::new();

    for line in input.lines() {
        match record_from_line(line) {
            Ok(record) => records.push(record),
            Err(err) => warn!(line, %err, "skipping entry"),
        }
    }

    records
}

fn record_from_line(line: &str) -> Result<CellRecord, GridMapError> {
    let (color, reference) = parse_entry(line)?;

    let cell = reference
        .coordinate()
        .validate()
        .map_err(|err| GridMapError::OutOfBounds {
            reference: reference.label(),
            direction: err.direction,
        })?;

    Ok(CellRecord {
        row: cell.row,
        col: cell.col,
        color,
        label: reference.label(),
    })
}
