//! Interaction matrix folding: co-occurrence counts over a round sequence.

use crate::models::{CourtMatch, InteractionMatrix, Round, ScheduleError};

/// Fold rounds into a freshly allocated [`InteractionMatrix`] for
/// `player_count` players.
///
/// Per round: byes increment the bye vector; each match contributes one
/// teammate increment per same-team pair and one court-mate increment per
/// unordered pair of its four players (6 pairs, teammate pairs included).
/// Cross-team pairs never count as teammates. Indices outside
/// `1..=player_count` are ignored rather than erroring.
///
/// Pure fold over an immutable round sequence: rebuilding from the same
/// rounds always yields an identical matrix.
pub fn build_matrix(
    rounds: &[Round],
    player_count: u32,
) -> Result<InteractionMatrix, ScheduleError> {
    if player_count == 0 {
        return Err(ScheduleError::InvalidPlayerCount);
    }

    let mut matrix = InteractionMatrix::zeroed(player_count as usize);
    for round in rounds {
        for &bye in &round.byes {
            matrix.add_bye(bye);
        }
        for court_match in &round.matches {
            fold_match(&mut matrix, court_match);
        }
    }
    Ok(matrix)
}

/// Apply one match: the two teammate pairs, then all six unordered pairs of
/// the court as court-mates.
fn fold_match(matrix: &mut InteractionMatrix, court_match: &CourtMatch) {
    matrix.add_teammates(court_match.team_1[0], court_match.team_1[1]);
    matrix.add_teammates(court_match.team_2[0], court_match.team_2[1]);

    let players = court_match.players();
    for i in 0..players.len() {
        for j in (i + 1)..players.len() {
            matrix.add_court_mates(players[i], players[j]);
        }
    }
}
