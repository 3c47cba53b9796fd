//! Buffer pool statistics.

use std::fmt;

use crate::common::PageNum;

/// Cumulative I/O counters for one pool.
///
/// `reads` counts pages loaded from the page file; `writes` counts pages
/// written back (eviction flush, unpin write-back, force, flush, shutdown).
/// Counters start at zero on pool initialization and only ever grow.
#[derive(Debug, Default)]
pub(crate) struct IoCounters {
    reads: u64,
    writes: u64,
}

impl IoCounters {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn record_read(&mut self) {
        self.reads += 1;
    }

    #[inline]
    pub(crate) fn record_write(&mut self) {
        self.writes += 1;
    }

    #[inline]
    pub(crate) fn reads(&self) -> u64 {
        self.reads
    }

    #[inline]
    pub(crate) fn writes(&self) -> u64 {
        self.writes
    }
}

/// A point-in-time view of a pool's frames and counters.
///
/// The three vectors are parallel, indexed by frame slot. Empty frames report
/// `None`, a clean flag, and a zero pin count.
///
/// # Example
/// ```ignore
/// let snapshot = pool.snapshot();
/// println!("{}", snapshot);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolSnapshot {
    /// Resident page number per frame slot.
    pub frame_contents: Vec<Option<PageNum>>,
    /// Dirty flag per frame slot.
    pub dirty_flags: Vec<bool>,
    /// Pin count per frame slot.
    pub pin_counts: Vec<u32>,
    /// Pages read from the page file since initialization.
    pub reads: u64,
    /// Pages written to the page file since initialization.
    pub writes: u64,
}

impl PoolSnapshot {
    /// Number of frames holding a page.
    pub fn occupied(&self) -> usize {
        self.frame_contents.iter().flatten().count()
    }
}

impl fmt::Display for PoolSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pool {{ reads: {}, writes: {}, frames: [", self.reads, self.writes)?;
        for (i, content) in self.frame_contents.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match content {
                Some(page) => write!(
                    f,
                    "{}:{}{}x{}",
                    i,
                    page.0,
                    if self.dirty_flags[i] { "*" } else { "" },
                    self.pin_counts[i]
                )?,
                None => write!(f, "{}:-", i)?,
            }
        }
        write!(f, "] }}")
    }
}
