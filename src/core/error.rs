//! Error types for the puzzle core.
//!
//! The core deliberately keeps its own error enum instead of `anyhow`:
//! callers match on the variants (the binary ignores racing `InvalidState`
//! errors but treats `InvalidMove` as fatal to the current run).

use std::fmt;

use crate::types::{Move, PlaybackState, MAX_DISKS, MIN_DISKS};

/// Errors reported by the solver and the playback controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HanoiError {
    /// Requested disk count outside the supported range.
    InvalidDiskCount(u8),
    /// A control call was issued in a state that forbids it.
    InvalidState {
        op: &'static str,
        state: PlaybackState,
    },
    /// A generated move does not match the peg contents. Indicates a logic
    /// defect, not a user error; the current run should be reset.
    InvalidMove(Move),
}

impl fmt::Display for HanoiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HanoiError::InvalidDiskCount(n) => {
                write!(
                    f,
                    "invalid disk count {} (supported range is {}..={})",
                    n, MIN_DISKS, MAX_DISKS
                )
            }
            HanoiError::InvalidState { op, state } => {
                write!(f, "{} is not allowed while {}", op, state.as_str())
            }
            HanoiError::InvalidMove(mv) => {
                write!(f, "inconsistent move: {}", mv)
            }
        }
    }
}

impl std::error::Error for HanoiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PegId;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            HanoiError::InvalidDiskCount(11).to_string(),
            "invalid disk count 11 (supported range is 3..=10)"
        );
        assert_eq!(
            HanoiError::InvalidState {
                op: "pause",
                state: PlaybackState::Idle,
            }
            .to_string(),
            "pause is not allowed while idle"
        );
        assert_eq!(
            HanoiError::InvalidMove(Move::new(2, PegId::Source, PegId::Auxiliary)).to_string(),
            "inconsistent move: move disk 2 from A to B"
        );
    }
}
