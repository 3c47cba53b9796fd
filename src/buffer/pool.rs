//! Buffer Pool - the core page caching layer.
//!
//! The [`BufferPool`] provides:
//! - Page caching between a page file and memory
//! - Pin-based reference counting
//! - Dirty page write-back on unpin, eviction, flush, and shutdown
//! - Pluggable eviction policies (FIFO, LRU)

use std::path::Path;

use crate::buffer::policy::{PolicyState, Strategy};
use crate::buffer::stats::{IoCounters, PoolSnapshot};
use crate::buffer::{Frame, PageHandle};
use crate::common::{Error, PageNum, Result};
use crate::storage::{Page, PageFile};

/// A fixed-capacity pool of buffer frames caching pages of one page file.
///
/// # Architecture
/// ```text
/// ┌────────────────────────────────────────────────────────┐
/// │                      BufferPool                        │
/// │  ┌───────────────────────────────┐  ┌──────────────┐   │
/// │  │      frames: Vec<Frame>       │  │    policy    │   │
/// │  │ [Frame0] [Frame1] [Frame2] …  │  │  FIFO | LRU  │   │
/// │  └───────────────────────────────┘  └──────────────┘   │
/// │  ┌──────────────────┐  ┌──────────────┐                │
/// │  │ file: PageFile   │  │ io: counters │                │
/// │  └──────────────────┘  └──────────────┘                │
/// └────────────────────────────────────────────────────────┘
/// ```
///
/// The pool is single-threaded: every operation takes `&mut self` and runs to
/// completion, blocking only on the synchronous disk I/O of loads and
/// write-backs. Each pool owns its frames, policy state, and counters, so any
/// number of pools over distinct page files can coexist in one process. A
/// page file must not be shared between pools.
///
/// # Usage
/// ```ignore
/// PageFile::create("pool.db")?;
/// let mut pool = BufferPool::new("pool.db", 16, Strategy::Lru)?;
///
/// let mut handle = pool.pin(PageNum::new(0))?;
/// handle.data_mut()[0] = 0xAB;
/// pool.mark_dirty(&handle)?;
/// pool.unpin(&handle)?;
/// pool.shutdown()?;
/// ```
#[derive(Debug)]
pub struct BufferPool {
    /// The attached page file; None once shut down.
    file: Option<PageFile>,

    /// Fixed pool of frames allocated at construction.
    frames: Vec<Frame>,

    /// Eviction policy bookkeeping.
    policy: PolicyState,

    /// Cumulative read/write counters.
    io: IoCounters,
}

impl BufferPool {
    /// Attach a new pool of `capacity` frames to the page file at `path`.
    ///
    /// All frames start empty and no page is read eagerly.
    ///
    /// # Errors
    /// - [`Error::InvalidParams`] if `capacity` is zero
    /// - [`Error::UnsupportedStrategy`] for strategies other than FIFO/LRU
    /// - [`Error::FileNotFound`] if the page file does not already exist
    pub fn new<P: AsRef<Path>>(path: P, capacity: usize, strategy: Strategy) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidParams("pool capacity must be positive"));
        }
        let policy = PolicyState::new(strategy, capacity)?;
        let file = PageFile::open(path)?;
        let frames = (0..capacity).map(|_| Frame::new()).collect();

        Ok(Self {
            file: Some(file),
            frames,
            policy,
            io: IoCounters::new(),
        })
    }

    /// Flush all evictable dirty pages and detach the page file.
    ///
    /// After shutdown every operation fails with [`Error::NotInitialized`],
    /// including a second shutdown.
    ///
    /// # Errors
    /// - [`Error::NotInitialized`] if the pool was already shut down
    /// - [`Error::InvalidState`] if any frame is still pinned; callers must
    ///   unpin everything first
    pub fn shutdown(&mut self) -> Result<()> {
        if self.file.is_none() {
            return Err(Error::NotInitialized);
        }
        if self.frames.iter().any(|f| f.is_pinned()) {
            return Err(Error::InvalidState("shutdown with pinned pages outstanding"));
        }

        self.force_flush()?;
        self.file = None;
        for frame in &mut self.frames {
            frame.reset();
        }
        self.policy = PolicyState::new(self.policy.strategy(), self.frames.len())?;
        Ok(())
    }

    // ========================================================================
    // Public API: pin / unpin / mark_dirty / force
    // ========================================================================

    /// Pin a page, loading it from the page file on a miss.
    ///
    /// On a hit the frame's pin count is incremented and the LRU policy (if
    /// active) records the access. On a miss the page is loaded into a free
    /// frame, or into the frame freed by evicting the policy's victim when
    /// the pool is full; a dirty victim is written back first. Loading counts
    /// one read and leaves the frame with `pin_count == 1` and a clean dirty
    /// bit. The returned handle carries a snapshot of the page content.
    ///
    /// # Errors
    /// - [`Error::NotInitialized`] after shutdown
    /// - [`Error::NoFreeFrame`] if the pool is full and every frame is pinned
    /// - [`Error::ReadFailed`] if the load fails; the pool is left untouched
    pub fn pin(&mut self, page_num: PageNum) -> Result<PageHandle> {
        if self.file.is_none() {
            return Err(Error::NotInitialized);
        }

        if let Some(slot) = find_frame(&self.frames, page_num) {
            // Cache hit
            self.frames[slot].pin();
            if let PolicyState::Lru(lru) = &mut self.policy {
                lru.touch(page_num);
            }
            return Ok(PageHandle::new(page_num, self.frames[slot].page()));
        }

        self.load_miss(page_num)
    }

    /// Release one pin on the page a handle refers to.
    ///
    /// Under LRU, unpinning while the pool is at full occupancy also
    /// refreshes the page's recency. If the pin count reaches zero and the
    /// frame is dirty, the page is written back immediately (counts one
    /// write) and its dirty bit cleared.
    ///
    /// # Errors
    /// - [`Error::NotInitialized`] after shutdown
    /// - [`Error::PageNotResident`] if the page is not cached
    /// - [`Error::InvalidState`] if the frame's pin count is already zero
    pub fn unpin(&mut self, handle: &PageHandle) -> Result<()> {
        let page_num = handle.page_num();
        let full = self.occupied_count() == self.frames.len();

        let Self {
            file,
            frames,
            policy,
            io,
        } = self;
        let file = file.as_mut().ok_or(Error::NotInitialized)?;
        let slot = find_frame(frames, page_num).ok_or(Error::PageNotResident(page_num))?;

        if frames[slot].pin_count() == 0 {
            return Err(Error::InvalidState("unpin on a frame with zero pin count"));
        }
        frames[slot].unpin();

        if let PolicyState::Lru(lru) = policy {
            if full {
                lru.refresh(page_num);
            }
        }

        if frames[slot].is_evictable() && frames[slot].is_dirty() {
            flush_frame(file, &mut frames[slot], io)?;
        }
        Ok(())
    }

    /// Publish the handle's content into the frame and set its dirty bit.
    ///
    /// The bytes are copied in; the handle remains a caller-owned buffer and
    /// the frame's storage stays private.
    ///
    /// # Errors
    /// - [`Error::NotInitialized`] after shutdown
    /// - [`Error::PageNotResident`] if the page is not cached
    pub fn mark_dirty(&mut self, handle: &PageHandle) -> Result<()> {
        if self.file.is_none() {
            return Err(Error::NotInitialized);
        }
        let page_num = handle.page_num();
        let slot = find_frame(&self.frames, page_num).ok_or(Error::PageNotResident(page_num))?;

        let frame = &mut self.frames[slot];
        frame.page_mut().as_mut_slice().copy_from_slice(handle.data());
        frame.mark_dirty();
        Ok(())
    }

    /// Write the frame's current content to the page file unconditionally.
    ///
    /// Counts one write. The dirty bit is left as-is; pairing a force with
    /// clearing dirty state is the flush paths' job, not this one's.
    ///
    /// # Errors
    /// - [`Error::NotInitialized`] after shutdown
    /// - [`Error::PageNotResident`] if the page is not cached
    /// - [`Error::WriteFailed`] on I/O failure
    pub fn force_page(&mut self, handle: &PageHandle) -> Result<()> {
        let page_num = handle.page_num();
        let Self {
            file, frames, io, ..
        } = self;
        let file = file.as_mut().ok_or(Error::NotInitialized)?;
        let slot = find_frame(frames, page_num).ok_or(Error::PageNotResident(page_num))?;

        file.ensure_capacity(page_num.0 + 1)?;
        file.write_block(page_num, frames[slot].page())?;
        io.record_write();
        Ok(())
    }

    /// Write back every dirty frame whose pin count is zero.
    ///
    /// Clears the dirty bit of each written frame and counts one write per
    /// frame. Iteration order across frames carries no guarantee.
    ///
    /// # Errors
    /// - [`Error::NotInitialized`] after shutdown
    /// - [`Error::WriteFailed`] on I/O failure
    pub fn force_flush(&mut self) -> Result<()> {
        let Self {
            file, frames, io, ..
        } = self;
        let file = file.as_mut().ok_or(Error::NotInitialized)?;

        for frame in frames.iter_mut() {
            if frame.is_evictable() && frame.is_dirty() {
                flush_frame(file, frame, io)?;
            }
        }
        Ok(())
    }

    // ========================================================================
    // Public API: statistics
    // ========================================================================

    /// Resident page number per frame slot; `None` for empty frames.
    pub fn frame_contents(&self) -> Vec<Option<PageNum>> {
        self.frames.iter().map(Frame::page_num).collect()
    }

    /// Dirty flag per frame slot; `false` for empty frames.
    pub fn dirty_flags(&self) -> Vec<bool> {
        self.frames.iter().map(Frame::is_dirty).collect()
    }

    /// Pin count per frame slot; `0` for empty frames.
    pub fn pin_counts(&self) -> Vec<u32> {
        self.frames.iter().map(Frame::pin_count).collect()
    }

    /// Pages read from the page file since initialization.
    pub fn num_reads(&self) -> u64 {
        self.io.reads()
    }

    /// Pages written to the page file since initialization.
    pub fn num_writes(&self) -> u64 {
        self.io.writes()
    }

    /// A point-in-time snapshot of frames and counters.
    pub fn snapshot(&self) -> PoolSnapshot {
        PoolSnapshot {
            frame_contents: self.frame_contents(),
            dirty_flags: self.dirty_flags(),
            pin_counts: self.pin_counts(),
            reads: self.io.reads(),
            writes: self.io.writes(),
        }
    }

    /// Number of frames in the pool.
    pub fn capacity(&self) -> usize {
        self.frames.len()
    }

    /// Number of frames currently holding a page.
    pub fn occupied_count(&self) -> usize {
        self.frames.iter().filter(|f| !f.is_empty()).count()
    }

    /// The replacement strategy this pool was built with.
    pub fn strategy(&self) -> Strategy {
        self.policy.strategy()
    }

    // ========================================================================
    // Internal: miss handling
    // ========================================================================

    /// Load a page that is not resident, evicting a victim if the pool is
    /// full.
    fn load_miss(&mut self, page_num: PageNum) -> Result<PageHandle> {
        let full = self.occupied_count() == self.frames.len();

        let Self {
            file,
            frames,
            policy,
            io,
        } = self;
        let file = file.as_mut().ok_or(Error::NotInitialized)?;

        match policy {
            PolicyState::Fifo(fifo) => {
                // Settle on a victim before any I/O so an unevictable pool
                // fails with no side effects.
                let victim = if full {
                    Some(
                        fifo.peek_victim(frames)
                            .ok_or(Error::NoFreeFrame(frames.len()))?,
                    )
                } else {
                    None
                };

                let incoming = read_page(file, io, page_num)?;

                let slot = match victim {
                    Some(v) => {
                        if frames[v].is_dirty() {
                            flush_frame(file, &mut frames[v], io)?;
                        }
                        fifo.evict(v);
                        frames[v].reset();
                        // Admission lands on the slot the victim vacated.
                        fifo.admit()
                    }
                    None => fifo.admit(),
                };

                frames[slot].load(page_num, &incoming);
                Ok(PageHandle::new(page_num, frames[slot].page()))
            }
            PolicyState::Lru(lru) => {
                let victim = if full {
                    Some(
                        lru.peek_victim(frames)
                            .ok_or(Error::NoFreeFrame(frames.len()))?,
                    )
                } else {
                    None
                };

                let incoming = read_page(file, io, page_num)?;

                let slot = match victim {
                    Some((recency_idx, v)) => {
                        if frames[v].is_dirty() {
                            flush_frame(file, &mut frames[v], io)?;
                        }
                        frames[v].reset();
                        lru.evict_and_admit(recency_idx, page_num);
                        v
                    }
                    None => {
                        // The recency entry and the frame choice are separate
                        // concerns: the entry fills the first sentinel slot,
                        // but after a touch the sentinel order no longer
                        // mirrors the frame order, so the page itself loads
                        // into the first empty frame.
                        lru.admit_free(page_num).ok_or(Error::InvalidState(
                            "no free recency slot in a non-full pool",
                        ))?;
                        frames
                            .iter()
                            .position(Frame::is_empty)
                            .ok_or(Error::InvalidState("no empty frame in a non-full pool"))?
                    }
                };

                frames[slot].load(page_num, &incoming);
                Ok(PageHandle::new(page_num, frames[slot].page()))
            }
        }
    }
}

/// Residency lookup: the slot holding `page_num`, if any.
///
/// This linear scan is the single source of truth for "is this page cached";
/// pin, unpin, mark_dirty, force, and the LRU victim resolution all go
/// through it rather than inferring residency from policy state.
pub(crate) fn find_frame(frames: &[Frame], page_num: PageNum) -> Option<usize> {
    frames.iter().position(|f| f.page_num() == Some(page_num))
}

/// Write a frame's page back, clear its dirty bit, and count the write.
fn flush_frame(file: &mut PageFile, frame: &mut Frame, io: &mut IoCounters) -> Result<()> {
    let Some(page_num) = frame.page_num() else {
        return Ok(());
    };
    file.ensure_capacity(page_num.0 + 1)?;
    file.write_block(page_num, frame.page())?;
    frame.clear_dirty();
    io.record_write();
    Ok(())
}

/// Read `page_num` into a scratch page, extending the file first, and count
/// the read. No frame is touched, so a failure here leaves the pool as it
/// was.
fn read_page(file: &mut PageFile, io: &mut IoCounters, page_num: PageNum) -> Result<Page> {
    let mut incoming = Page::new();
    file.ensure_capacity(page_num.0 + 1)?;
    file.read_block(page_num, &mut incoming)?;
    io.record_read();
    Ok(incoming)
}
