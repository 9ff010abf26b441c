//! Recursive move generation for the Tower of Hanoi.
//!
//! Pure and deterministic: the same disk count always yields the identical
//! sequence. The generator performs no validation of peg contents; the
//! playback controller re-checks every move when applying it.

use crate::core::error::HanoiError;
use crate::types::{Move, PegId, MAX_DISKS, MIN_DISKS};

/// Number of moves in the optimal solution for `n` disks.
pub const fn optimal_move_count(n: u8) -> usize {
    (1usize << n) - 1
}

/// Generate the full solution sequence for `n` disks.
///
/// Fails with [`HanoiError::InvalidDiskCount`] when `n` is outside the
/// supported range. The range is a product decision (the UI spinner goes
/// from 3 to 10); the algorithm itself works for any `n`.
pub fn solve_moves(n: u8) -> Result<Vec<Move>, HanoiError> {
    if !(MIN_DISKS..=MAX_DISKS).contains(&n) {
        return Err(HanoiError::InvalidDiskCount(n));
    }
    Ok(moves_for(n))
}

/// Materialize the sequence without range validation.
///
/// The playback controller calls this with a disk count it already
/// validated in `configure`.
pub(crate) fn moves_for(n: u8) -> Vec<Move> {
    let mut moves = Vec::with_capacity(optimal_move_count(n));
    push_moves(
        n,
        PegId::Source,
        PegId::Destination,
        PegId::Auxiliary,
        &mut moves,
    );
    debug_assert_eq!(moves.len(), optimal_move_count(n));
    moves
}

/// Classic divide and conquer: move `n - 1` disks out of the way, move the
/// largest disk, move the `n - 1` disks back on top of it.
fn push_moves(n: u8, source: PegId, destination: PegId, auxiliary: PegId, out: &mut Vec<Move>) {
    if n == 0 {
        return;
    }
    push_moves(n - 1, source, auxiliary, destination, out);
    out.push(Move::new(n, source, destination));
    push_moves(n - 1, auxiliary, destination, source, out);
}

/// Lazy, restartable form of the same sequence.
///
/// Yields moves one at a time without materializing the vector. Backed by
/// an explicit frame stack rather than recursion so it can suspend between
/// items.
#[derive(Debug, Clone)]
pub struct MoveSequence {
    stack: Vec<Frame>,
    remaining: usize,
}

#[derive(Debug, Clone, Copy)]
enum Frame {
    Solve {
        n: u8,
        source: PegId,
        destination: PegId,
        auxiliary: PegId,
    },
    Emit(Move),
}

impl MoveSequence {
    pub fn new(n: u8) -> Result<Self, HanoiError> {
        if !(MIN_DISKS..=MAX_DISKS).contains(&n) {
            return Err(HanoiError::InvalidDiskCount(n));
        }
        Ok(Self {
            stack: vec![Frame::Solve {
                n,
                source: PegId::Source,
                destination: PegId::Destination,
                auxiliary: PegId::Auxiliary,
            }],
            remaining: optimal_move_count(n),
        })
    }
}

impl Iterator for MoveSequence {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::Emit(mv) => {
                    self.remaining -= 1;
                    return Some(mv);
                }
                Frame::Solve {
                    n,
                    source,
                    destination,
                    auxiliary,
                } => {
                    if n == 0 {
                        continue;
                    }
                    // Pushed in reverse so the left recursion runs first.
                    self.stack.push(Frame::Solve {
                        n: n - 1,
                        source: auxiliary,
                        destination,
                        auxiliary: source,
                    });
                    self.stack.push(Frame::Emit(Move::new(n, source, destination)));
                    self.stack.push(Frame::Solve {
                        n: n - 1,
                        source,
                        destination: auxiliary,
                        auxiliary: destination,
                    });
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for MoveSequence {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_count_formula() {
        assert_eq!(optimal_move_count(3), 7);
        assert_eq!(optimal_move_count(4), 15);
        assert_eq!(optimal_move_count(10), 1023);
    }

    #[test]
    fn test_solve_moves_length() {
        for n in MIN_DISKS..=MAX_DISKS {
            let moves = solve_moves(n).unwrap();
            assert_eq!(moves.len(), optimal_move_count(n));
        }
    }

    #[test]
    fn test_rejects_out_of_range() {
        for n in [0u8, 1, 2, 11, 100] {
            assert_eq!(solve_moves(n), Err(HanoiError::InvalidDiskCount(n)));
            assert!(MoveSequence::new(n).is_err());
        }
    }

    #[test]
    fn test_three_disk_sequence() {
        use crate::types::PegId::{Auxiliary as B, Destination as C, Source as A};

        let moves = solve_moves(3).unwrap();
        let expected = [
            Move::new(1, A, C),
            Move::new(2, A, B),
            Move::new(1, C, B),
            Move::new(3, A, C),
            Move::new(1, B, A),
            Move::new(2, B, C),
            Move::new(1, A, C),
        ];
        assert_eq!(moves, expected);
    }

    #[test]
    fn test_sequence_is_deterministic() {
        assert_eq!(solve_moves(7).unwrap(), solve_moves(7).unwrap());
    }

    #[test]
    fn test_lazy_matches_eager() {
        for n in MIN_DISKS..=MAX_DISKS {
            let eager = solve_moves(n).unwrap();
            let lazy: Vec<Move> = MoveSequence::new(n).unwrap().collect();
            assert_eq!(eager, lazy);
        }
    }

    #[test]
    fn test_lazy_size_hint_is_exact() {
        let mut seq = MoveSequence::new(4).unwrap();
        assert_eq!(seq.len(), 15);
        seq.next();
        assert_eq!(seq.len(), 14);
        assert_eq!(seq.by_ref().count(), 14);
    }

    #[test]
    fn test_largest_disk_moves_once() {
        for n in MIN_DISKS..=MAX_DISKS {
            let moves = solve_moves(n).unwrap();
            let largest: Vec<&Move> = moves.iter().filter(|m| m.disk == n).collect();
            assert_eq!(largest.len(), 1);
            assert_eq!(largest[0].from, PegId::Source);
            assert_eq!(largest[0].to, PegId::Destination);
        }
    }
}
