//! Move generator tests against the public API.

use tui_hanoi::core::{optimal_move_count, solve_moves, HanoiError, MoveSequence};
use tui_hanoi::types::{Move, PegId, MAX_DISKS, MIN_DISKS};

#[test]
fn test_sequence_length_is_optimal() {
    for n in MIN_DISKS..=MAX_DISKS {
        let moves = solve_moves(n).unwrap();
        assert_eq!(moves.len(), (1usize << n) - 1);
        assert_eq!(moves.len(), optimal_move_count(n));
    }
}

#[test]
fn test_disk_count_bounds() {
    for n in [0u8, 1, 2, 11, 100] {
        assert_eq!(solve_moves(n), Err(HanoiError::InvalidDiskCount(n)));
    }
    for n in MIN_DISKS..=MAX_DISKS {
        assert!(solve_moves(n).is_ok());
    }
}

#[test]
fn test_known_three_disk_solution() {
    use PegId::{Auxiliary as B, Destination as C, Source as A};

    let moves = solve_moves(3).unwrap();
    assert_eq!(
        moves,
        vec![
            Move::new(1, A, C),
            Move::new(2, A, B),
            Move::new(1, C, B),
            Move::new(3, A, C),
            Move::new(1, B, A),
            Move::new(2, B, C),
            Move::new(1, A, C),
        ]
    );
}

#[test]
fn test_restartable_lazy_sequence() {
    for n in MIN_DISKS..=MAX_DISKS {
        let first: Vec<Move> = MoveSequence::new(n).unwrap().collect();
        let second: Vec<Move> = MoveSequence::new(n).unwrap().collect();
        assert_eq!(first, second);
        assert_eq!(first, solve_moves(n).unwrap());
    }
}

#[test]
fn test_moves_never_mention_out_of_range_disks() {
    for n in MIN_DISKS..=MAX_DISKS {
        for mv in solve_moves(n).unwrap() {
            assert!(mv.disk >= 1 && mv.disk <= n);
            assert_ne!(mv.from, mv.to);
        }
    }
}

#[test]
fn test_smaller_disks_move_more_often() {
    // Disk k moves exactly 2^(n-k) times in the optimal solution.
    let moves = solve_moves(5).unwrap();
    for k in 1..=5u8 {
        let count = moves.iter().filter(|m| m.disk == k).count();
        assert_eq!(count, 1usize << (5 - k));
    }
}
