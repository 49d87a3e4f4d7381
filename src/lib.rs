//! Pickleball schedule viewer: library with models and the schedule engine.
//!
//! Consumes a pre-generated wide-format schedule (one row per round, columns
//! encoding court seats and byes) and derives paged rounds plus a pairwise
//! interaction matrix for fairness auditing. It does not generate schedules.

pub mod logic;
pub mod models;

pub use logic::{
    build_matrix, court_count_options, court_ids, extract_round, filter_rounds,
    player_count_options, resolve_name, round_count_options,
};
pub use models::{
    CourtMatch, InteractionMatrix, PlayerIndex, Record, RecordTable, Round, ScheduleError,
    Selection, EMPTY_SLOT,
};
