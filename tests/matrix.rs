//! Integration tests for the interaction matrix builder.

use pickleball_scheduler_web::{build_matrix, CourtMatch, PlayerIndex, Round, ScheduleError};

fn round(matches: Vec<CourtMatch>, byes: Vec<PlayerIndex>) -> Round {
    Round {
        label: String::new(),
        matches,
        byes,
    }
}

/// Three rounds of 8 players on 2 courts, no byes.
fn eight_player_rounds() -> Vec<Round> {
    vec![
        round(
            vec![
                CourtMatch::new("1", [1, 2], [3, 4]),
                CourtMatch::new("2", [5, 6], [7, 8]),
            ],
            vec![],
        ),
        round(
            vec![
                CourtMatch::new("1", [1, 3], [5, 7]),
                CourtMatch::new("2", [2, 4], [6, 8]),
            ],
            vec![],
        ),
        round(
            vec![
                CourtMatch::new("1", [1, 4], [6, 7]),
                CourtMatch::new("2", [2, 3], [5, 8]),
            ],
            vec![],
        ),
    ]
}

#[test]
fn one_court_counts_teammates_and_court_mates() {
    let rounds = vec![round(vec![CourtMatch::new("1", [1, 2], [3, 4])], vec![])];
    let matrix = build_matrix(&rounds, 4).unwrap();

    assert_eq!(matrix.teammate_count(0, 1), 1);
    assert_eq!(matrix.teammate_count(2, 3), 1);
    assert_eq!(matrix.teammate_count(0, 2), 0);
    // teammates are court-mates too
    assert_eq!(matrix.court_count(0, 1), 1);
    assert_eq!(matrix.court_count(0, 2), 1);
    assert_eq!(matrix.court_count(1, 3), 1);
    for i in 0..4 {
        assert_eq!(matrix.bye_count(i), 0);
        assert_eq!(matrix.not_played_with(i), 0);
    }
}

#[test]
fn empty_rounds_leave_the_matrix_untouched() {
    let rounds = vec![round(vec![], vec![])];
    let matrix = build_matrix(&rounds, 4).unwrap();
    for i in 0..4 {
        for j in 0..4 {
            assert_eq!(matrix.court_count(i, j), 0);
            assert_eq!(matrix.teammate_count(i, j), 0);
        }
        assert_eq!(matrix.bye_count(i), 0);
        assert_eq!(matrix.not_played_with(i), 3);
    }
}

#[test]
fn byes_are_counted_per_player() {
    let rounds = vec![round(vec![CourtMatch::new("1", [1, 2], [3, 4])], vec![5])];
    let matrix = build_matrix(&rounds, 5).unwrap();

    assert_eq!(matrix.bye_count(4), 1);
    for i in 0..4 {
        assert_eq!(matrix.bye_count(i), 0);
    }
    // player 5 sat out: shared a court with nobody
    assert_eq!(matrix.not_played_with(4), 4);
    assert_eq!(matrix.not_played_with(0), 1);
}

#[test]
fn out_of_range_indices_are_ignored() {
    let rounds = vec![round(
        vec![CourtMatch::new("1", [1, 2], [3, 99])],
        vec![0, 42],
    )];
    let matrix = build_matrix(&rounds, 4).unwrap();

    assert_eq!(matrix.player_count(), 4);
    assert_eq!(matrix.teammate_count(0, 1), 1);
    assert_eq!(matrix.court_count(0, 2), 1);
    // every pair involving 99 is simply absent
    assert_eq!(matrix.court_count(2, 3), 0);
    for i in 0..4 {
        assert_eq!(matrix.bye_count(i), 0);
    }
}

#[test]
fn matrices_are_symmetric() {
    let matrix = build_matrix(&eight_player_rounds(), 8).unwrap();
    for i in 0..8 {
        for j in 0..8 {
            assert_eq!(matrix.court_count(i, j), matrix.court_count(j, i));
            assert_eq!(matrix.teammate_count(i, j), matrix.teammate_count(j, i));
        }
    }
}

#[test]
fn teammate_counts_never_exceed_court_counts() {
    let matrix = build_matrix(&eight_player_rounds(), 8).unwrap();
    for i in 0..8 {
        for j in 0..8 {
            if i != j {
                assert!(matrix.teammate_count(i, j) <= matrix.court_count(i, j));
            }
        }
    }
}

#[test]
fn rebuilding_from_the_same_rounds_is_identical() {
    let rounds = eight_player_rounds();
    assert_eq!(
        build_matrix(&rounds, 8).unwrap(),
        build_matrix(&rounds, 8).unwrap()
    );
}

#[test]
fn appending_a_round_never_decreases_any_count() {
    let rounds = eight_player_rounds();
    let before = build_matrix(&rounds[..2], 8).unwrap();
    let after = build_matrix(&rounds, 8).unwrap();
    for i in 0..8 {
        for j in 0..8 {
            assert!(after.court_count(i, j) >= before.court_count(i, j));
            assert!(after.teammate_count(i, j) >= before.teammate_count(i, j));
        }
        assert!(after.bye_count(i) >= before.bye_count(i));
    }
}

#[test]
fn zero_player_count_fails_fast() {
    assert_eq!(
        build_matrix(&eight_player_rounds(), 0),
        Err(ScheduleError::InvalidPlayerCount)
    );
}
