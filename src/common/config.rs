//! Configuration constants for pagepool.

/// Size of a page in bytes (4KB).
///
/// Matches the OS page size on most systems and the block size of the page
/// files this pool caches. Every read and write against the backing file
/// moves exactly one block of this size.
pub const PAGE_SIZE: usize = 4096;
