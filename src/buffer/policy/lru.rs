//! LRU (Least-Recently-Used) replacement policy.
//!
//! Keeps a recency sequence of resident page numbers, oldest-used at index 0,
//! with one slot reserved per physical frame. Unused slots hold `None`. An
//! access rotates the page's entry to the tail; eviction takes the oldest
//! entry whose frame is unpinned.

use crate::buffer::pool::find_frame;
use crate::buffer::Frame;
use crate::common::PageNum;

/// Recency-sequence bookkeeping for LRU replacement.
#[derive(Debug)]
pub(crate) struct LruState {
    /// Resident page numbers from least- to most-recently-used. `None` marks
    /// a slot that has never been filled.
    slots: Vec<Option<PageNum>>,
}

impl LruState {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    /// Record an access: move the page's entry to the most-recently-used end.
    /// A page with no entry is left alone.
    pub(crate) fn touch(&mut self, page_num: PageNum) {
        if let Some(idx) = self.position(page_num) {
            self.slots[idx..].rotate_left(1);
        }
    }

    /// Recompute recency for a page being unpinned.
    ///
    /// This is a deliberate second reordering point distinct from the
    /// pin-time [`LruState::touch`]: the pool invokes it only when it is at
    /// full occupancy, and it shifts eviction order even though no access
    /// occurred. Kept as its own operation so the call sites read as the two
    /// different protocol events they are.
    pub(crate) fn refresh(&mut self, page_num: PageNum) {
        self.touch(page_num);
    }

    /// Admit a page while the pool still has free capacity: fill the first
    /// sentinel slot, scanned from index 0, and return its index.
    ///
    /// This places only the recency entry. Which frame the page loads into
    /// is the pool's choice; a touch rotates sentinels ahead of live
    /// entries, so sentinel indices do not track frame slots.
    ///
    /// The new entry is deliberately *not* placed at the most-recent end;
    /// it takes whatever sentinel slot comes first.
    pub(crate) fn admit_free(&mut self, page_num: PageNum) -> Option<usize> {
        let idx = self.slots.iter().position(|slot| slot.is_none())?;
        self.slots[idx] = Some(page_num);
        Some(idx)
    }

    /// Find the victim without mutating: the oldest entry whose frame is
    /// unpinned, skipping pinned pages the same way FIFO does. Returns the
    /// recency index and the frame slot, or None if no resident frame is
    /// unpinned.
    pub(crate) fn peek_victim(&self, frames: &[Frame]) -> Option<(usize, usize)> {
        for (idx, entry) in self.slots.iter().enumerate() {
            let Some(page_num) = entry else { continue };
            if let Some(slot) = find_frame(frames, *page_num) {
                if !frames[slot].is_pinned() {
                    return Some((idx, slot));
                }
            }
        }
        None
    }

    /// Commit an eviction at recency index `idx` and admit `new_page` at the
    /// most-recently-used end in one shift.
    pub(crate) fn evict_and_admit(&mut self, idx: usize, new_page: PageNum) {
        self.slots[idx..].rotate_left(1);
        let last = self.slots.len() - 1;
        self.slots[last] = Some(new_page);
    }

    fn position(&self, page_num: PageNum) -> Option<usize> {
        self.slots.iter().position(|slot| *slot == Some(page_num))
    }

    #[cfg(test)]
    fn entries(&self) -> &[Option<PageNum>] {
        &self.slots
    }
}
