//! Pairwise interaction counts across a filtered round set.

use crate::models::round::PlayerIndex;
use serde::{Deserialize, Serialize};

/// Symmetric co-occurrence counts for n players (1-based identities stored
/// 0-indexed). Built by [`crate::logic::build_matrix`]; index-keyed only, so
/// renaming players never requires a rebuild.
///
/// Teammate pairs are counted in both grids: sharing a team is a special
/// case of sharing a court, so `teammate_count(i, j) <= court_count(i, j)`
/// always holds. Diagonal cells are unused and stay zero.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct InteractionMatrix {
    court_counts: Vec<Vec<u32>>,
    teammate_counts: Vec<Vec<u32>>,
    bye_counts: Vec<u32>,
}

impl InteractionMatrix {
    /// All-zero matrix for `player_count` players.
    pub(crate) fn zeroed(player_count: usize) -> Self {
        Self {
            court_counts: vec![vec![0; player_count]; player_count],
            teammate_counts: vec![vec![0; player_count]; player_count],
            bye_counts: vec![0; player_count],
        }
    }

    pub fn player_count(&self) -> usize {
        self.bye_counts.len()
    }

    /// Rounds in which 0-indexed players `i` and `j` shared a court
    /// (teammate or opponent).
    pub fn court_count(&self, i: usize, j: usize) -> u32 {
        self.court_counts[i][j]
    }

    /// Rounds in which 0-indexed players `i` and `j` were on the same team.
    pub fn teammate_count(&self, i: usize, j: usize) -> u32 {
        self.teammate_counts[i][j]
    }

    /// Rounds in which 0-indexed player `i` drew a bye.
    pub fn bye_count(&self, i: usize) -> u32 {
        self.bye_counts[i]
    }

    /// Players that 0-indexed player `i` never shared a court with.
    pub fn not_played_with(&self, i: usize) -> usize {
        self.court_counts[i]
            .iter()
            .enumerate()
            .filter(|&(j, &count)| j != i && count == 0)
            .count()
    }

    /// Count one bye for 1-based `index`. Out-of-range indices are ignored.
    pub(crate) fn add_bye(&mut self, index: PlayerIndex) {
        if let Some(i) = self.slot(index) {
            self.bye_counts[i] += 1;
        }
    }

    /// Count one same-team round for a 1-based pair. Both orderings are
    /// incremented in the same step, keeping the grid symmetric by
    /// construction. Out-of-range or degenerate (equal) pairs are ignored.
    pub(crate) fn add_teammates(&mut self, a: PlayerIndex, b: PlayerIndex) {
        if let Some((i, j)) = self.pair(a, b) {
            self.teammate_counts[i][j] += 1;
            self.teammate_counts[j][i] += 1;
        }
    }

    /// Count one shared-court round for a 1-based pair; same rules as
    /// [`Self::add_teammates`].
    pub(crate) fn add_court_mates(&mut self, a: PlayerIndex, b: PlayerIndex) {
        if let Some((i, j)) = self.pair(a, b) {
            self.court_counts[i][j] += 1;
            self.court_counts[j][i] += 1;
        }
    }

    /// 0-indexed slot for a 1-based index, if within `1..=player_count`.
    fn slot(&self, index: PlayerIndex) -> Option<usize> {
        let i = index.checked_sub(1)? as usize;
        (i < self.bye_counts.len()).then_some(i)
    }

    fn pair(&self, a: PlayerIndex, b: PlayerIndex) -> Option<(usize, usize)> {
        let (i, j) = (self.slot(a)?, self.slot(b)?);
        (i != j).then_some((i, j))
    }
}
