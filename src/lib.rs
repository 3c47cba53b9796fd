//! pagepool - a fixed-capacity page buffer pool.
//!
//! The pool caches a bounded number of 4KB pages from a disk-resident page
//! file, serves them to callers through a pin/unpin protocol, and evicts via
//! a pluggable replacement policy (FIFO or LRU) when full. Dirty pages are
//! written back on unpin, eviction, explicit flush, and shutdown.
//!
//! # Layers
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              Buffer Pool (buffer/)          │
//! │   BufferPool + Frame + PageHandle + stats   │
//! │   ┌─────────────────────────────────────┐   │
//! │   │   Replacement policies: FIFO | LRU  │   │
//! │   └─────────────────────────────────────┘   │
//! └─────────────────────────────────────────────┘
//!                       ↓
//! ┌─────────────────────────────────────────────┐
//! │             Storage layer (storage/)        │
//! │              PageFile + Page                │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageNum, Error, config)
//! - [`buffer`] - Buffer pool, frames, handles, policies, statistics
//! - [`storage`] - Page file block I/O
//!
//! # Quick Start
//! ```no_run
//! use pagepool::{BufferPool, PageFile, PageNum, Strategy};
//!
//! PageFile::create("pool.db").unwrap();
//! let mut pool = BufferPool::new("pool.db", 16, Strategy::Lru).unwrap();
//!
//! let mut handle = pool.pin(PageNum::new(0)).unwrap();
//! handle.data_mut()[0] = 0xAB;
//! pool.mark_dirty(&handle).unwrap();
//! pool.unpin(&handle).unwrap();
//! pool.shutdown().unwrap();
//! ```

pub mod buffer;
pub mod common;
pub mod storage;

// Re-export commonly used items at crate root for convenience
pub use common::config::PAGE_SIZE;
pub use common::{Error, PageNum, Result};

pub use buffer::{BufferPool, Frame, PageHandle, PoolSnapshot, Strategy};
pub use storage::{Page, PageFile};
