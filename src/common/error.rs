//! Error types for pagepool.

use thiserror::Error;

use crate::buffer::Strategy;
use crate::common::PageNum;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagepool.
///
/// Every fallible operation in the crate returns this type, so callers match
/// on one enum regardless of which layer failed.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed call arguments, e.g. a zero pool capacity.
    #[error("invalid parameters: {0}")]
    InvalidParams(&'static str),

    /// Operation on a pool with no attached page file (never initialized
    /// or already shut down).
    #[error("buffer pool is not initialized")]
    NotInitialized,

    /// The named page file does not exist at pool creation time.
    #[error("page file not found: {0}")]
    FileNotFound(String),

    /// The referenced page is not currently cached in any frame.
    #[error("page {0} is not resident in the buffer pool")]
    PageNotResident(PageNum),

    /// Eviction is needed but every frame is pinned.
    #[error("no evictable frame: all {0} frames are pinned")]
    NoFreeFrame(usize),

    /// Reading a page from the backing file failed.
    #[error("failed to read page {page}: {source}")]
    ReadFailed {
        page: PageNum,
        source: std::io::Error,
    },

    /// Writing a page to the backing file failed.
    #[error("failed to write page {page}: {source}")]
    WriteFailed {
        page: PageNum,
        source: std::io::Error,
    },

    /// A replacement strategy other than FIFO or LRU was requested.
    #[error("replacement strategy {0} is not supported")]
    UnsupportedStrategy(Strategy),

    /// A protocol violation by the caller, e.g. unpinning a frame whose pin
    /// count is already zero, or shutting down a pool with pinned pages.
    #[error("invalid pool state: {0}")]
    InvalidState(&'static str),

    /// Other I/O failure, e.g. while extending the backing file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::PageNotResident(PageNum::new(42));
        assert_eq!(
            format!("{}", err),
            "page Page(42) is not resident in the buffer pool"
        );

        let err = Error::NoFreeFrame(3);
        assert_eq!(format!("{}", err), "no evictable frame: all 3 frames are pinned");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => {}
            _ => panic!("expected Io error"),
        }
    }

    #[test]
    fn test_unsupported_strategy_display() {
        let err = Error::UnsupportedStrategy(Strategy::Clock);
        assert_eq!(
            format!("{}", err),
            "replacement strategy CLOCK is not supported"
        );
    }
}
