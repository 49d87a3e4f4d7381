//! Selection filtering: which rounds are in play, and the selectable options.

use crate::logic::extract::extract_round;
use crate::models::{Record, RecordTable, Round, ScheduleError, Selection};
use std::collections::BTreeSet;

/// Rounds matching the selection, in source order, truncated to the round
/// budget (clamped when the budget exceeds availability).
///
/// Rows with missing or non-matching `Players`/`Courts` tags are skipped
/// silently. Tags are compared as text after normalizing both sides, since
/// source values are stored as text.
pub fn filter_rounds(
    table: &RecordTable,
    selection: &Selection,
) -> Result<Vec<Round>, ScheduleError> {
    selection.validate()?;
    Ok(
        matching_records(table, selection.player_count, selection.court_count)
            .take(selection.round_budget)
            .map(extract_round)
            .collect(),
    )
}

/// Distinct player counts present in the table, sorted ascending (first
/// dropdown). Tags that do not parse as numbers are treated as malformed
/// rows and excluded.
pub fn player_count_options(table: &RecordTable) -> Vec<u32> {
    let counts: BTreeSet<u32> = table
        .records()
        .iter()
        .filter_map(|record| parsed_tag(record.players_tag()))
        .collect();
    counts.into_iter().collect()
}

/// Distinct court counts available for a player count, sorted ascending
/// (second dropdown).
pub fn court_count_options(table: &RecordTable, player_count: u32) -> Vec<u32> {
    let wanted = player_count.to_string();
    let counts: BTreeSet<u32> = table
        .records()
        .iter()
        .filter(|record| tag_matches(record.players_tag(), &wanted))
        .filter_map(|record| parsed_tag(record.courts_tag()))
        .collect();
    counts.into_iter().collect()
}

/// Selectable round budgets for a player/court pair: `1..=available`
/// (third dropdown). Empty when no rows match.
pub fn round_count_options(table: &RecordTable, player_count: u32, court_count: u32) -> Vec<u32> {
    let available = matching_records(table, player_count, court_count).count() as u32;
    (1..=available).collect()
}

fn matching_records<'a>(
    table: &'a RecordTable,
    player_count: u32,
    court_count: u32,
) -> impl Iterator<Item = &'a Record> {
    let players = player_count.to_string();
    let courts = court_count.to_string();
    table.records().iter().filter(move |record| {
        tag_matches(record.players_tag(), &players) && tag_matches(record.courts_tag(), &courts)
    })
}

fn tag_matches(tag: Option<&str>, wanted: &str) -> bool {
    tag.is_some_and(|value| value.trim() == wanted)
}

fn parsed_tag(tag: Option<&str>) -> Option<u32> {
    tag?.trim().parse().ok()
}
