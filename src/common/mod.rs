//! Common types and utilities shared across pagepool.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - The page number identifier

pub mod config;
pub mod error;
mod page_num;

pub use error::{Error, Result};
pub use page_num::PageNum;
