//! FIFO (First-In-First-Out) replacement policy.
//!
//! Tracks arrival order with a circular queue over the frame array itself:
//! `rear` is the slot that received the newest page, `front` the slot holding
//! the oldest. Pinned frames are skipped at eviction time without losing
//! their place in arrival order.

use crate::buffer::Frame;

/// Circular-queue bookkeeping for FIFO replacement.
#[derive(Debug)]
pub(crate) struct FifoState {
    /// Slot of the oldest resident page.
    front: usize,
    /// Slot of the newest resident page.
    rear: usize,
    /// Number of occupied slots.
    occupied: usize,
    capacity: usize,
}

impl FifoState {
    /// Create queue state for a pool of `capacity` frames.
    ///
    /// `rear` starts one step behind slot 0 so the first admission lands
    /// there.
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            front: 0,
            rear: capacity - 1,
            occupied: 0,
            capacity,
        }
    }

    /// Admit a new page: advance `rear` circularly and return the slot the
    /// caller must load into. After an eviction this is exactly the slot the
    /// victim vacated.
    pub(crate) fn admit(&mut self) -> usize {
        self.rear = (self.rear + 1) % self.capacity;
        self.occupied += 1;
        self.rear
    }

    /// Find the victim slot without mutating queue state: the first unpinned
    /// frame at or after `front` in arrival order. Returns None if every
    /// frame is pinned.
    pub(crate) fn peek_victim(&self, frames: &[Frame]) -> Option<usize> {
        if frames.iter().all(|f| f.is_pinned()) {
            return None;
        }
        let mut pos = self.front;
        while frames[pos].is_pinned() {
            pos = (pos + 1) % self.capacity;
        }
        Some(pos)
    }

    /// Commit the eviction of `victim` (a slot returned by `peek_victim`):
    /// `rear` moves immediately behind the victim, `front` just past it.
    pub(crate) fn evict(&mut self, victim: usize) {
        self.rear = if victim == 0 {
            self.capacity - 1
        } else {
            victim - 1
        };
        self.front = (victim + 1) % self.capacity;
        self.occupied -= 1;
    }

    #[cfg(test)]
    fn occupied(&self) -> usize {
        self.occupied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::PageNum;
    use crate::storage::Page;

    fn resident_frames(count: usize, capacity: usize) -> Vec<Frame> {
        let content = Page::new();
        (0..capacity)
            .map(|i| {
                let mut frame = Frame::new();
                if i < count {
                    frame.load(PageNum::new(i as u32), &content);
                    frame.unpin();
                }
                frame
            })
            .collect()
    }

    #[test]
    fn test_admit_fills_slots_in_order() {
        let mut fifo = FifoState::new(3);
        assert_eq!(fifo.admit(), 0);
        assert_eq!(fifo.admit(), 1);
        assert_eq!(fifo.admit(), 2);
        assert_eq!(fifo.occupied(), 3);
    }

    #[test]
    fn test_evict_oldest_first() {
        let mut fifo = FifoState::new(3);
        for _ in 0..3 {
            fifo.admit();
        }
        let frames = resident_frames(3, 3);

        let victim = fifo.peek_victim(&frames).unwrap();
        assert_eq!(victim, 0);

        fifo.evict(victim);
        assert_eq!(fifo.occupied(), 2);

        // The freed slot is the next admission target.
        assert_eq!(fifo.admit(), 0);
    }

    #[test]
    fn test_evict_skips_pinned() {
        let mut fifo = FifoState::new(3);
        for _ in 0..3 {
            fifo.admit();
        }
        let mut frames = resident_frames(3, 3);
        frames[0].pin();

        let victim = fifo.peek_victim(&frames).unwrap();
        assert_eq!(victim, 1);

        fifo.evict(victim);
        assert_eq!(fifo.admit(), 1);
    }

    #[test]
    fn test_all_pinned_yields_no_victim() {
        let mut fifo = FifoState::new(2);
        fifo.admit();
        fifo.admit();

        let mut frames = resident_frames(2, 2);
        frames[0].pin();
        frames[1].pin();

        assert!(fifo.peek_victim(&frames).is_none());
    }
}
