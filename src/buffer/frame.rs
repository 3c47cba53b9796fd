//! Frame - a slot in the buffer pool.
//!
//! A [`Frame`] holds one page's content plus the bookkeeping the pool needs:
//! - Which page is resident (if any)
//! - Pin count for reference counting
//! - Dirty flag for write-back tracking

use crate::common::PageNum;
use crate::storage::Page;

/// A frame in the buffer pool.
///
/// Frames are the slots of the pool. Each frame holds at most one page; the
/// pool allocates a fixed number of them up front and reuses them across
/// evictions. The pool is single-threaded, so all bookkeeping is plain data
/// mutated through `&mut` access.
///
/// Invariant: an empty frame always has `pin_count == 0` and `dirty == false`.
#[derive(Debug)]
pub struct Frame {
    /// Which page is resident, or None if the frame is empty.
    page_num: Option<PageNum>,

    /// Number of outstanding pins on this frame.
    pin_count: u32,

    /// Whether the resident page has been modified since loading.
    dirty: bool,

    /// The page content. The frame owns this buffer; callers never hold a
    /// live reference into it (see PageHandle).
    page: Page,
}

impl Frame {
    /// Create a new empty frame.
    pub fn new() -> Self {
        Self {
            page_num: None,
            pin_count: 0,
            dirty: false,
            page: Page::new(),
        }
    }

    /// Get the resident page number, or None if empty.
    #[inline]
    pub fn page_num(&self) -> Option<PageNum> {
        self.page_num
    }

    /// Get the current pin count.
    #[inline]
    pub fn pin_count(&self) -> u32 {
        self.pin_count
    }

    /// Check if the frame is currently pinned.
    #[inline]
    pub fn is_pinned(&self) -> bool {
        self.pin_count > 0
    }

    /// Check if the frame is dirty.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Check if the frame is empty (no page resident).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.page_num.is_none()
    }

    /// Check if the frame can be evicted: resident and unpinned.
    #[inline]
    pub fn is_evictable(&self) -> bool {
        self.page_num.is_some() && self.pin_count == 0
    }

    /// Read access to the frame's page content.
    #[inline]
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Write access to the frame's page content.
    #[inline]
    pub(crate) fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    /// Increment the pin count.
    #[inline]
    pub(crate) fn pin(&mut self) {
        self.pin_count += 1;
    }

    /// Decrement the pin count. Callers must have rejected a zero count first.
    #[inline]
    pub(crate) fn unpin(&mut self) {
        debug_assert!(self.pin_count > 0, "pin count underflow");
        self.pin_count -= 1;
    }

    /// Mark the resident page as modified.
    #[inline]
    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Clear the dirty flag after a write-back.
    #[inline]
    pub(crate) fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Install a freshly loaded page: resident, pinned once, clean.
    pub(crate) fn load(&mut self, page_num: PageNum, content: &Page) {
        self.page.copy_from(content);
        self.page_num = Some(page_num);
        self.pin_count = 1;
        self.dirty = false;
    }

    /// Reset the frame to empty state after eviction or shutdown.
    pub(crate) fn reset(&mut self) {
        self.page.reset();
        self.page_num = None;
        self.pin_count = 0;
        self.dirty = false;
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}
