//! Core module - pure puzzle logic with no external dependencies
//!
//! This module contains the move generator, peg model, and playback state
//! machine. It has zero dependencies on UI, timers, or I/O; pacing is
//! entirely the caller's concern.

pub mod error;
pub mod pegs;
pub mod playback;
pub mod snapshot;
pub mod solver;

// Re-export commonly used types
pub use error::HanoiError;
pub use pegs::Peg;
pub use playback::{MoveResult, Playback};
pub use snapshot::{PegSnapshot, PuzzleSnapshot};
pub use solver::{optimal_move_count, solve_moves, MoveSequence};
