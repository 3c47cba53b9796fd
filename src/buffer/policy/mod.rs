//! Replacement policy implementations.
//!
//! A pool is constructed with a [`Strategy`] tag; the two implemented
//! strategies carry their bookkeeping in [`FifoState`] and [`LruState`],
//! dispatched through the closed [`PolicyState`] union. The remaining
//! declared strategies fail fast at pool construction.

use std::fmt;

use crate::common::{Error, Result};

mod fifo;
mod lru;

pub(crate) use fifo::FifoState;
pub(crate) use lru::LruState;

/// Replacement strategy selector.
///
/// FIFO and LRU are implemented; the other declared strategies are rejected
/// with [`Error::UnsupportedStrategy`] when a pool is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Evict in strict arrival order, skipping pinned pages.
    Fifo,
    /// Evict the least-recently-used page, skipping pinned pages.
    Lru,
    /// Second-chance clock sweep. Not implemented.
    Clock,
    /// Least-frequently-used. Not implemented.
    Lfu,
    /// LRU-K distance. Not implemented.
    LruK,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Fifo => "FIFO",
            Strategy::Lru => "LRU",
            Strategy::Clock => "CLOCK",
            Strategy::Lfu => "LFU",
            Strategy::LruK => "LRU-K",
        };
        f.write_str(name)
    }
}

/// Per-pool policy bookkeeping, one variant per implemented strategy.
#[derive(Debug)]
pub(crate) enum PolicyState {
    Fifo(FifoState),
    Lru(LruState),
}

impl PolicyState {
    /// Build zeroed policy state for `strategy`.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedStrategy`] for the unimplemented variants.
    pub(crate) fn new(strategy: Strategy, capacity: usize) -> Result<Self> {
        match strategy {
            Strategy::Fifo => Ok(PolicyState::Fifo(FifoState::new(capacity))),
            Strategy::Lru => Ok(PolicyState::Lru(LruState::new(capacity))),
            other => Err(Error::UnsupportedStrategy(other)),
        }
    }

    /// The tag this state was built from.
    pub(crate) fn strategy(&self) -> Strategy {
        match self {
            PolicyState::Fifo(_) => Strategy::Fifo,
            PolicyState::Lru(_) => Strategy::Lru,
        }
    }
}
