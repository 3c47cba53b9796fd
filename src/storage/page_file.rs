//! Page file - low-level block I/O for the buffer pool.
//!
//! A [`PageFile`] is the backing store the pool reads pages from and writes
//! dirty pages back to:
//! - Fixed-size block reads and writes, addressed by page number
//! - Capacity extension with zeroed blocks

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::common::config::PAGE_SIZE;
use crate::common::{Error, PageNum, Result};
use crate::storage::Page;

/// Block-addressed I/O over a single page file.
///
/// # File Layout
/// Pages are laid out sequentially: page `N` is located at file offset
/// `N × PAGE_SIZE`. The page count is derived from the file length on open
/// and maintained across extensions.
///
/// # Durability
/// Every block write is followed by `fsync()`. This is conservative; the
/// pool's write counters assume a completed write is on disk.
#[derive(Debug)]
pub struct PageFile {
    file: File,
    /// Number of pages currently in the file.
    page_count: u32,
}

impl PageFile {
    /// Create a new, empty page file.
    ///
    /// # Errors
    /// Fails if the file already exists or cannot be created.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create_new(true)
            .open(path)?;

        Ok(Self {
            file,
            page_count: 0,
        })
    }

    /// Open an existing page file.
    ///
    /// # Errors
    /// Returns [`Error::FileNotFound`] if the file does not exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&path)
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::FileNotFound(path.as_ref().display().to_string())
                } else {
                    Error::Io(e)
                }
            })?;

        // Derive page count from file size
        let file_size = file.metadata()?.len();
        let page_count = (file_size / PAGE_SIZE as u64) as u32;

        Ok(Self { file, page_count })
    }

    /// Guarantee the file holds at least `min_pages` blocks.
    ///
    /// Extends the file with zeroed blocks if needed; a no-op if the file is
    /// already large enough.
    pub fn ensure_capacity(&mut self, min_pages: u32) -> Result<()> {
        if self.page_count >= min_pages {
            return Ok(());
        }

        let offset = (self.page_count as u64) * (PAGE_SIZE as u64);
        self.file.seek(SeekFrom::Start(offset))?;

        let zeros = [0u8; PAGE_SIZE];
        for _ in self.page_count..min_pages {
            self.file.write_all(&zeros)?;
        }
        self.file.sync_all()?;

        self.page_count = min_pages;
        Ok(())
    }

    /// Read one block into `page`.
    ///
    /// # Errors
    /// Returns [`Error::ReadFailed`] if the block lies past the end of the
    /// file or the read itself fails.
    pub fn read_block(&mut self, page_num: PageNum, page: &mut Page) -> Result<()> {
        if page_num.0 >= self.page_count {
            return Err(Error::ReadFailed {
                page: page_num,
                source: std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    "read past end of page file",
                ),
            });
        }

        let offset = (page_num.0 as u64) * (PAGE_SIZE as u64);
        self.seek_and_read(offset, page)
            .map_err(|source| Error::ReadFailed {
                page: page_num,
                source,
            })
    }

    /// Write one block from `page`.
    ///
    /// The block must lie within the current capacity; callers extend first
    /// via [`PageFile::ensure_capacity`].
    ///
    /// # Errors
    /// Returns [`Error::WriteFailed`] on an out-of-range block or I/O failure.
    pub fn write_block(&mut self, page_num: PageNum, page: &Page) -> Result<()> {
        if page_num.0 >= self.page_count {
            return Err(Error::WriteFailed {
                page: page_num,
                source: std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    "write past end of page file",
                ),
            });
        }

        let offset = (page_num.0 as u64) * (PAGE_SIZE as u64);
        self.seek_and_write(offset, page)
            .map_err(|source| Error::WriteFailed {
                page: page_num,
                source,
            })
    }

    /// Get the number of pages in the file.
    #[inline]
    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    /// Get the total size of the file in bytes.
    #[inline]
    pub fn file_size(&self) -> u64 {
        (self.page_count as u64) * (PAGE_SIZE as u64)
    }

    fn seek_and_read(&mut self, offset: u64, page: &mut Page) -> std::io::Result<()> {
        self.file.seek(SeekFrom::Start(offset))?;
        self.file.read_exact(page.as_mut_slice())
    }

    fn seek_and_write(&mut self, offset: u64, page: &Page) -> std::io::Result<()> {
        self.file.seek(SeekFrom::Start(offset))?;
        self.file.write_all(page.as_slice())?;
        self.file.sync_all()
    }
}
