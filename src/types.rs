//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Supported disk-count range (a product decision, not an algorithmic limit)
pub const MIN_DISKS: u8 = 3;
pub const MAX_DISKS: u8 = 10;
pub const DEFAULT_DISKS: u8 = 3;

/// Animation speed presets (milliseconds per move)
pub const SLOW_MOVE_MS: u64 = 1000;
pub const NORMAL_MOVE_MS: u64 = 500;
pub const FAST_MOVE_MS: u64 = 100;

/// Input poll granularity for the event loop (milliseconds)
pub const INPUT_POLL_MS: u64 = 50;

/// The three pegs of the puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PegId {
    Source,
    Auxiliary,
    Destination,
}

impl PegId {
    /// All pegs in display order (left to right)
    pub const ALL: [PegId; 3] = [PegId::Source, PegId::Auxiliary, PegId::Destination];

    /// Index into peg arrays
    pub fn index(&self) -> usize {
        match self {
            PegId::Source => 0,
            PegId::Auxiliary => 1,
            PegId::Destination => 2,
        }
    }

    /// Single-letter display label
    pub fn label(&self) -> char {
        match self {
            PegId::Source => 'A',
            PegId::Auxiliary => 'B',
            PegId::Destination => 'C',
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "a" | "source" => Some(PegId::Source),
            "b" | "auxiliary" => Some(PegId::Auxiliary),
            "c" | "destination" => Some(PegId::Destination),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            PegId::Source => "source",
            PegId::Auxiliary => "auxiliary",
            PegId::Destination => "destination",
        }
    }
}

/// A single disk transfer in the solution sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// Size rank of the disk being moved (1 = smallest)
    pub disk: u8,
    pub from: PegId,
    pub to: PegId,
}

impl Move {
    pub const fn new(disk: u8, from: PegId, to: PegId) -> Self {
        Self { disk, from, to }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "move disk {} from {} to {}",
            self.disk,
            self.from.label(),
            self.to.label()
        )
    }
}

/// Playback lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaybackState {
    Idle,
    Running,
    Paused,
    Completed,
}

impl PlaybackState {
    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaybackState::Idle => "idle",
            PlaybackState::Running => "running",
            PlaybackState::Paused => "paused",
            PlaybackState::Completed => "completed",
        }
    }
}

/// Animation speed presets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speed {
    Slow,
    Normal,
    Fast,
}

impl Speed {
    /// Milliseconds between applied moves
    pub fn interval_ms(&self) -> u64 {
        match self {
            Speed::Slow => SLOW_MOVE_MS,
            Speed::Normal => NORMAL_MOVE_MS,
            Speed::Fast => FAST_MOVE_MS,
        }
    }

    /// Cycle to the next preset (wraps around)
    pub fn next(&self) -> Self {
        match self {
            Speed::Slow => Speed::Normal,
            Speed::Normal => Speed::Fast,
            Speed::Fast => Speed::Slow,
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "slow" => Some(Speed::Slow),
            "normal" => Some(Speed::Normal),
            "fast" => Some(Speed::Fast),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Speed::Slow => "slow",
            Speed::Normal => "normal",
            Speed::Fast => "fast",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peg_roundtrip() {
        for peg in PegId::ALL {
            assert_eq!(PegId::from_str(peg.as_str()), Some(peg));
            assert_eq!(PegId::from_str(&peg.label().to_string()), Some(peg));
        }
        assert_eq!(PegId::from_str("d"), None);
    }

    #[test]
    fn test_peg_indexes_are_distinct() {
        assert_eq!(PegId::Source.index(), 0);
        assert_eq!(PegId::Auxiliary.index(), 1);
        assert_eq!(PegId::Destination.index(), 2);
    }

    #[test]
    fn test_move_display() {
        let mv = Move::new(3, PegId::Source, PegId::Destination);
        assert_eq!(mv.to_string(), "move disk 3 from A to C");
    }

    #[test]
    fn test_speed_cycle() {
        assert_eq!(Speed::Slow.next(), Speed::Normal);
        assert_eq!(Speed::Normal.next(), Speed::Fast);
        assert_eq!(Speed::Fast.next(), Speed::Slow);
        assert_eq!(Speed::from_str("FAST"), Some(Speed::Fast));
        assert_eq!(Speed::from_str("turbo"), None);
    }
}
