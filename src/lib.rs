//! Terminal Tower of Hanoi visual solver.
//!
//! The crate is strictly layered: `core` holds the move generator and the
//! playback state machine and knows nothing about terminals or timing;
//! `input` and `term` form the presentation layer; the binary owns all
//! pacing and drives `core` by calling `step()` on a timer.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
