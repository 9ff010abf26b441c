//! Playback controller: owns the peg contents and drives the solution
//! one move at a time.
//!
//! The controller is passive and call-driven. It has no timers or threads;
//! the presentation layer decides when to call [`Playback::step`]. All
//! operations are synchronous and O(1) apart from regenerating the move
//! sequence on `configure`/`reset` (at most 1023 moves).

use log::{debug, info, warn};

use crate::core::error::HanoiError;
use crate::core::pegs::Peg;
use crate::core::snapshot::{PegSnapshot, PuzzleSnapshot};
use crate::core::solver;
use crate::types::{Move, PegId, PlaybackState, MAX_DISKS, MIN_DISKS};

/// Outcome of a successful [`Playback::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// The move that was just applied.
    pub mv: Move,
    pub moves_made: usize,
    pub moves_remaining: usize,
    pub total_moves: usize,
    /// True when this was the final move of the sequence.
    pub completed: bool,
}

/// Puzzle state plus the playback state machine
/// (idle → running → paused → completed, reset back to idle).
#[derive(Debug, Clone)]
pub struct Playback {
    disk_count: u8,
    pegs: [Peg; 3],
    moves: Vec<Move>,
    /// Moves applied so far, always within `0..=moves.len()`.
    cursor: usize,
    state: PlaybackState,
    last_move: Option<Move>,
}

impl Playback {
    /// Create an idle playback for the given disk count.
    pub fn new(disk_count: u8) -> Result<Self, HanoiError> {
        if !(MIN_DISKS..=MAX_DISKS).contains(&disk_count) {
            return Err(HanoiError::InvalidDiskCount(disk_count));
        }
        let mut playback = Self {
            disk_count,
            pegs: [
                Peg::new(PegId::Source),
                Peg::new(PegId::Auxiliary),
                Peg::new(PegId::Destination),
            ],
            moves: Vec::new(),
            cursor: 0,
            state: PlaybackState::Idle,
            last_move: None,
        };
        playback.rebuild();
        Ok(playback)
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn disk_count(&self) -> u8 {
        self.disk_count
    }

    pub fn moves_made(&self) -> usize {
        self.cursor
    }

    pub fn total_moves(&self) -> usize {
        self.moves.len()
    }

    pub fn moves_remaining(&self) -> usize {
        self.moves.len() - self.cursor
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn peg(&self, id: PegId) -> &Peg {
        &self.pegs[id.index()]
    }

    /// Rebuild pegs to the all-on-source position and regenerate the move
    /// sequence for the current disk count.
    fn rebuild(&mut self) {
        self.pegs = [
            Peg::full(PegId::Source, self.disk_count),
            Peg::new(PegId::Auxiliary),
            Peg::new(PegId::Destination),
        ];
        self.moves = solver::moves_for(self.disk_count);
        self.cursor = 0;
        self.last_move = None;
    }

    /// Select a new disk count. Valid only while idle.
    pub fn configure(&mut self, disk_count: u8) -> Result<(), HanoiError> {
        if self.state != PlaybackState::Idle {
            warn!("configure({}) rejected while {}", disk_count, self.state.as_str());
            return Err(HanoiError::InvalidState {
                op: "configure",
                state: self.state,
            });
        }
        if !(MIN_DISKS..=MAX_DISKS).contains(&disk_count) {
            warn!("configure rejected: {} disks out of range", disk_count);
            return Err(HanoiError::InvalidDiskCount(disk_count));
        }
        self.disk_count = disk_count;
        self.rebuild();
        info!("configured puzzle with {} disks ({} moves)", disk_count, self.moves.len());
        Ok(())
    }

    /// Begin solving. Valid only while idle.
    pub fn start(&mut self) -> Result<(), HanoiError> {
        if self.state != PlaybackState::Idle {
            return Err(HanoiError::InvalidState {
                op: "start",
                state: self.state,
            });
        }
        self.state = PlaybackState::Running;
        info!("started solving {} disks", self.disk_count);
        Ok(())
    }

    /// Suspend a running playback.
    pub fn pause(&mut self) -> Result<(), HanoiError> {
        if self.state != PlaybackState::Running {
            return Err(HanoiError::InvalidState {
                op: "pause",
                state: self.state,
            });
        }
        self.state = PlaybackState::Paused;
        info!("paused at move {}/{}", self.cursor, self.moves.len());
        Ok(())
    }

    /// Continue a paused playback.
    pub fn resume(&mut self) -> Result<(), HanoiError> {
        if self.state != PlaybackState::Paused {
            return Err(HanoiError::InvalidState {
                op: "resume",
                state: self.state,
            });
        }
        self.state = PlaybackState::Running;
        info!("resumed at move {}/{}", self.cursor, self.moves.len());
        Ok(())
    }

    /// Return to the initial position from any state. Cannot fail.
    pub fn reset(&mut self) {
        self.rebuild();
        self.state = PlaybackState::Idle;
        info!("reset to initial position ({} disks)", self.disk_count);
    }

    /// Apply the pending move at the cursor.
    ///
    /// The move is re-validated against the peg contents before being
    /// applied, guarding against generator regressions: the named disk
    /// must be on top of its origin peg and the destination top (if any)
    /// must be strictly larger. A validation failure is a logic defect and
    /// the run should be reset.
    pub fn step(&mut self) -> Result<MoveResult, HanoiError> {
        if self.state != PlaybackState::Running {
            return Err(HanoiError::InvalidState {
                op: "step",
                state: self.state,
            });
        }

        let mv = self.moves[self.cursor];

        if self.pegs[mv.from.index()].top() != Some(mv.disk) {
            warn!("{}: disk {} is not on top of {}", mv, mv.disk, mv.from.label());
            return Err(HanoiError::InvalidMove(mv));
        }
        if let Some(top) = self.pegs[mv.to.index()].top() {
            if top < mv.disk {
                warn!("{}: would cover smaller disk {}", mv, top);
                return Err(HanoiError::InvalidMove(mv));
            }
        }

        // Validated above, so pop and push cannot fail.
        let disk = self.pegs[mv.from.index()].pop();
        debug_assert_eq!(disk, Some(mv.disk));
        let pushed = self.pegs[mv.to.index()].push(mv.disk);
        debug_assert!(pushed);

        self.cursor += 1;
        self.last_move = Some(mv);
        debug!("applied {} ({}/{})", mv, self.cursor, self.moves.len());

        let completed = self.cursor == self.moves.len();
        if completed {
            self.state = PlaybackState::Completed;
            info!("solved in {} moves", self.cursor);
        }

        Ok(MoveResult {
            mv,
            moves_made: self.cursor,
            moves_remaining: self.moves.len() - self.cursor,
            total_moves: self.moves.len(),
            completed,
        })
    }

    /// All disks stacked on the destination peg, in order.
    pub fn is_solved(&self) -> bool {
        self.pegs[PegId::Destination.index()].len() == self.disk_count as usize
            && self.pegs[PegId::Source.index()].is_empty()
            && self.pegs[PegId::Auxiliary.index()].is_empty()
    }

    /// Capture the current position and playback progress.
    pub fn snapshot(&self) -> PuzzleSnapshot {
        PuzzleSnapshot {
            pegs: [
                PegSnapshot::from(&self.pegs[0]),
                PegSnapshot::from(&self.pegs[1]),
                PegSnapshot::from(&self.pegs[2]),
            ],
            state: self.state,
            disk_count: self.disk_count,
            moves_made: self.cursor,
            total_moves: self.moves.len(),
            last_move: self.last_move,
        }
    }
}
