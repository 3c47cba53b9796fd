//! Storage layer - block I/O against page files.
//!
//! - [`PageFile`] - Fixed-size block reads, writes, and capacity extension
//! - [`Page`] - The raw 4KB data container

mod page;
mod page_file;

pub use page::Page;
pub use page_file::PageFile;
