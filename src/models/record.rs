//! Raw schedule rows: Record (column name to text value) and RecordTable.

use crate::models::error::ScheduleError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::Path;

/// Sentinel value marking an unused seat or bye slot in the source data.
pub const EMPTY_SLOT: &str = "x";

/// Column holding the round label (opaque text, not necessarily numeric).
pub const ROUND_COLUMN: &str = "Round";
/// Column tagging the row with its schedule's player count.
pub const PLAYERS_COLUMN: &str = "Players";
/// Column tagging the row with its schedule's court count.
pub const COURTS_COLUMN: &str = "Courts";

/// One raw schedule row: a flat column-name to text-value mapping.
///
/// Besides the three tag columns, rows carry seat columns (`"3a"`) and bye
/// columns (`"b1"`); which of those are present may vary row to row.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Record {
    columns: HashMap<String, String>,
}

impl Record {
    pub fn from_columns(columns: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            columns: columns.into_iter().collect(),
        }
    }

    /// Value of a column, if the column exists in this row.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns.get(column).map(String::as_str)
    }

    /// All column names present in this row (no order implied).
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn round_label(&self) -> Option<&str> {
        self.get(ROUND_COLUMN)
    }

    pub fn players_tag(&self) -> Option<&str> {
        self.get(PLAYERS_COLUMN)
    }

    pub fn courts_tag(&self) -> Option<&str> {
        self.get(COURTS_COLUMN)
    }
}

/// The decoded schedule: an ordered, immutable sequence of rows.
///
/// Source order is authoritative; it already represents the intended round
/// sequence and is never re-sorted.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct RecordTable {
    records: Vec<Record>,
}

impl RecordTable {
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Decode a schedule CSV file from disk.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, ScheduleError> {
        let file = File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Decode a headered CSV into a table, keeping only rows with a
    /// non-empty round label (header-less trailing junk and blank lines are
    /// dropped, matching how the schedule files are produced).
    pub fn from_csv_reader<R: io::Read>(reader: R) -> Result<Self, ScheduleError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();

        let mut records = Vec::new();
        let mut skipped = 0usize;
        for row in csv_reader.records() {
            let row = row?;
            let record = Record::from_columns(
                headers
                    .iter()
                    .zip(row.iter())
                    .filter(|(name, _)| !name.is_empty())
                    .map(|(name, value)| (name.to_string(), value.to_string())),
            );
            if record.round_label().is_some_and(|label| !label.is_empty()) {
                records.push(record);
            } else {
                skipped += 1;
            }
        }
        if skipped > 0 {
            log::warn!("Skipped {} schedule row(s) without a round label", skipped);
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
