//! Column-name schema: the positional conventions of the source format.
//!
//! Court seats live in columns named `<court><seat>` (e.g. `"3a"`, `"10d"`)
//! and byes in `b1..b12`. Every pattern match on column names lives here so
//! the convention can be changed or validated in one place.

use crate::models::Record;
use std::collections::HashSet;

/// Seat letters within a court, in team order: a,b = team 1; c,d = team 2.
pub const SEATS: [char; 4] = ['a', 'b', 'c', 'd'];

/// Fixed upper bound of bye slot columns `b1..b12` (a convention of the
/// source format, not derived from the data).
pub const BYE_SLOT_MAX: u32 = 12;

/// Court identifiers present in one record's column-name space.
///
/// A column names a court seat when it is one or more digits followed by
/// exactly one seat letter. Anything else is not a court column and is
/// ignored. No order is implied; callers sort numerically. Re-run per
/// record, since the schema may vary row to row.
pub fn court_ids(record: &Record) -> HashSet<String> {
    record.column_names().filter_map(court_of_column).collect()
}

/// The column name of one seat on one court.
pub(crate) fn seat_column(court: &str, seat: char) -> String {
    format!("{court}{seat}")
}

/// The column name of one bye slot (1-based).
pub(crate) fn bye_column(slot: u32) -> String {
    format!("b{slot}")
}

/// The court identifier a seat column refers to, if the name is one.
fn court_of_column(name: &str) -> Option<String> {
    let digits = name.strip_suffix(&SEATS[..])?;
    (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
        .then(|| digits.to_string())
}
