//! Round extraction: one raw record into a typed Round.

use crate::logic::schema::{self, BYE_SLOT_MAX};
use crate::models::{CourtMatch, PlayerIndex, Record, Round, EMPTY_SLOT};

/// Convert one raw record into a `Round`.
///
/// 1. Discover court identifiers via the column schema and sort them by
///    numeric value, ascending ("10" after "9", not lexicographic).
/// 2. For each court, read seats a..d: the court yields a match only when
///    all four values are present, non-empty, not the `"x"` sentinel, and
///    parse as player indices. Partial courts are dropped whole.
/// 3. Collect byes from slots `b1..b12` in slot order, same value rules.
///
/// A record with no valid courts and no byes still yields a Round with
/// empty matches and byes; the label is taken verbatim from the row.
pub fn extract_round(record: &Record) -> Round {
    let mut courts: Vec<String> = schema::court_ids(record).into_iter().collect();
    courts.sort_by_key(|court| court_order(court));

    let matches = courts
        .iter()
        .filter_map(|court| extract_match(record, court))
        .collect();
    let byes = (1..=BYE_SLOT_MAX)
        .filter_map(|slot| slot_value(record, &schema::bye_column(slot)))
        .collect();

    Round {
        label: record.round_label().unwrap_or_default().to_string(),
        matches,
        byes,
    }
}

/// One court's match, if all four seats hold valid player indices.
fn extract_match(record: &Record, court: &str) -> Option<CourtMatch> {
    let seat = |letter| slot_value(record, &schema::seat_column(court, letter));
    let (a, b) = (seat('a')?, seat('b')?);
    let (c, d) = (seat('c')?, seat('d')?);
    Some(CourtMatch::new(court, [a, b], [c, d]))
}

/// A populated slot value as a player index: present, non-empty, not the
/// sentinel, and integral. Anything else counts as unused.
fn slot_value(record: &Record, column: &str) -> Option<PlayerIndex> {
    let value = record.get(column)?.trim();
    if value.is_empty() || value == EMPTY_SLOT {
        return None;
    }
    value.parse().ok()
}

/// Numeric sort key for a court identifier (all-digit by construction).
fn court_order(court: &str) -> u64 {
    court.parse().unwrap_or(u64::MAX)
}
