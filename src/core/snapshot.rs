//! Value snapshot of the puzzle for observers and rendering.

use arrayvec::ArrayVec;

use crate::core::Peg;
use crate::types::{Move, PegId, PlaybackState, MAX_DISKS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PegSnapshot {
    pub id: PegId,
    /// Disk sizes bottom-to-top.
    pub disks: ArrayVec<u8, { MAX_DISKS as usize }>,
}

impl From<&Peg> for PegSnapshot {
    fn from(peg: &Peg) -> Self {
        Self {
            id: peg.id(),
            disks: peg.disks().iter().copied().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleSnapshot {
    /// Pegs in display order (source, auxiliary, destination).
    pub pegs: [PegSnapshot; 3],
    pub state: PlaybackState,
    pub disk_count: u8,
    pub moves_made: usize,
    pub total_moves: usize,
    /// The most recently applied move, for highlight rendering.
    pub last_move: Option<Move>,
}

impl PuzzleSnapshot {
    pub fn moves_remaining(&self) -> usize {
        self.total_moves - self.moves_made
    }

    /// All disks on the destination peg.
    pub fn solved(&self) -> bool {
        self.pegs[PegId::Destination.index()].disks.len() == self.disk_count as usize
    }
}
