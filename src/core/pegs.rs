//! Peg model: a fixed-capacity stack of disk sizes.
//!
//! Disks are stored bottom-to-top, so the last element is the top of the
//! peg. The ordering invariant (no disk ever rests on a smaller one) is
//! enforced at push time.

use arrayvec::ArrayVec;

use crate::types::{PegId, MAX_DISKS};

/// One of the three holding areas for disks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Peg {
    id: PegId,
    disks: ArrayVec<u8, { MAX_DISKS as usize }>,
}

impl Peg {
    /// Create an empty peg.
    pub fn new(id: PegId) -> Self {
        Self {
            id,
            disks: ArrayVec::new(),
        }
    }

    /// Create a peg holding all `n` disks, largest at the bottom.
    pub fn full(id: PegId, n: u8) -> Self {
        let mut peg = Self::new(id);
        for size in (1..=n).rev() {
            peg.disks.push(size);
        }
        peg
    }

    pub fn id(&self) -> PegId {
        self.id
    }

    /// Disk sizes bottom-to-top.
    pub fn disks(&self) -> &[u8] {
        &self.disks
    }

    pub fn len(&self) -> usize {
        self.disks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// Size of the top disk, if any.
    pub fn top(&self) -> Option<u8> {
        self.disks.last().copied()
    }

    /// Push a disk onto the peg. Returns false (leaving the peg untouched)
    /// if the disk would rest on a smaller one.
    pub fn push(&mut self, disk: u8) -> bool {
        if let Some(top) = self.top() {
            if top < disk {
                return false;
            }
        }
        self.disks.push(disk);
        true
    }

    /// Pop the top disk off the peg.
    pub fn pop(&mut self) -> Option<u8> {
        self.disks.pop()
    }

    /// True when reading top-to-bottom yields strictly increasing sizes.
    pub fn is_ordered(&self) -> bool {
        self.disks.windows(2).all(|w| w[0] > w[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_peg_is_ordered() {
        let peg = Peg::full(PegId::Source, 5);
        assert_eq!(peg.len(), 5);
        assert_eq!(peg.disks(), &[5, 4, 3, 2, 1]);
        assert_eq!(peg.top(), Some(1));
        assert!(peg.is_ordered());
    }

    #[test]
    fn test_push_rejects_larger_on_smaller() {
        let mut peg = Peg::new(PegId::Auxiliary);
        assert!(peg.push(2));
        assert!(!peg.push(3));
        assert_eq!(peg.disks(), &[2]);
        assert!(peg.push(1));
        assert_eq!(peg.top(), Some(1));
    }

    #[test]
    fn test_pop_returns_top() {
        let mut peg = Peg::full(PegId::Source, 3);
        assert_eq!(peg.pop(), Some(1));
        assert_eq!(peg.pop(), Some(2));
        assert_eq!(peg.pop(), Some(3));
        assert_eq!(peg.pop(), None);
        assert!(peg.is_empty());
    }

    #[test]
    fn test_empty_peg_accepts_any_disk() {
        let mut peg = Peg::new(PegId::Destination);
        assert_eq!(peg.top(), None);
        assert!(peg.push(10));
        assert_eq!(peg.top(), Some(10));
    }
}
