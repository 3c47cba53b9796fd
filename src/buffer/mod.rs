//! Buffer pool management.
//!
//! The buffer pool is the in-memory cache layer between callers and a page
//! file. It manages a fixed pool of frames, each holding one page.
//!
//! # Components
//! - [`BufferPool`] - The pool orchestrator (pin/unpin/flush/shutdown)
//! - [`Frame`] - A slot in the pool holding a page + bookkeeping
//! - [`PageHandle`] - Caller-owned view of a pinned page
//! - [`PoolSnapshot`] - Point-in-time statistics view
//! - [`policy`] - FIFO and LRU replacement policies

mod frame;
mod handle;
pub mod policy;
mod pool;
mod stats;

pub use frame::Frame;
pub use handle::PageHandle;
pub use policy::Strategy;
pub use pool::BufferPool;
pub use stats::PoolSnapshot;
