//! Typed schedule entities: CourtMatch, Round, and Selection.

use crate::models::error::ScheduleError;
use serde::{Deserialize, Serialize};

/// 1-based player identity as encoded in the source schedule.
pub type PlayerIndex = u32;

/// One court in one round: two teams of two.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CourtMatch {
    /// Court identifier as extracted from the column names (numeric-sortable
    /// text, e.g. `"1"`, `"10"`).
    pub court: String,
    /// Seats a and b; order is preserved from the source for display.
    pub team_1: [PlayerIndex; 2],
    /// Seats c and d.
    pub team_2: [PlayerIndex; 2],
}

impl CourtMatch {
    pub fn new(court: impl Into<String>, team_1: [PlayerIndex; 2], team_2: [PlayerIndex; 2]) -> Self {
        Self {
            court: court.into(),
            team_1,
            team_2,
        }
    }

    /// All four players on this court, team 1 first.
    pub fn players(&self) -> [PlayerIndex; 4] {
        [self.team_1[0], self.team_1[1], self.team_2[0], self.team_2[1]]
    }
}

/// One time-slot's complete assignment: matches ordered by ascending numeric
/// court identifier, byes in slot order.
///
/// A round with no matches and no byes is a legitimate (degenerate) value,
/// not an error; consumers render it as an explicit empty state.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// Round label taken verbatim from the source (opaque text; not
    /// guaranteed numeric or sequential).
    pub label: String,
    pub matches: Vec<CourtMatch>,
    pub byes: Vec<PlayerIndex>,
}

impl Round {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty() && self.byes.is_empty()
    }
}

/// Which schedule variant is in play: player count, court count, and how
/// many rounds to show.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub player_count: u32,
    pub court_count: u32,
    /// Rounds to keep, from the front; clamped to availability when larger.
    pub round_budget: usize,
}

impl Selection {
    /// Validated selection: all three values must be positive.
    pub fn new(
        player_count: u32,
        court_count: u32,
        round_budget: usize,
    ) -> Result<Self, ScheduleError> {
        let selection = Self {
            player_count,
            court_count,
            round_budget,
        };
        selection.validate()?;
        Ok(selection)
    }

    /// Check caller preconditions: zero values fail fast rather than
    /// silently producing an empty or nonsense result.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.player_count == 0 {
            return Err(ScheduleError::InvalidPlayerCount);
        }
        if self.court_count == 0 {
            return Err(ScheduleError::InvalidCourtCount);
        }
        if self.round_budget == 0 {
            return Err(ScheduleError::InvalidRoundBudget);
        }
        Ok(())
    }
}
