//! Data structures for the schedule viewer: raw records, typed rounds, matrices.

mod error;
mod matrix;
mod record;
mod round;

pub use error::ScheduleError;
pub use matrix::InteractionMatrix;
pub use record::{Record, RecordTable, COURTS_COLUMN, EMPTY_SLOT, PLAYERS_COLUMN, ROUND_COLUMN};
pub use round::{CourtMatch, PlayerIndex, Round, Selection};
