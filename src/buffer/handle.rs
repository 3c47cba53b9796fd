//! Caller-side page handle.
//!
//! A [`PageHandle`] is what `pin` hands back: the pinned page's number plus a
//! caller-owned copy of its content. The frame keeps its own private buffer;
//! modifications made through the handle only reach the pool when the caller
//! publishes them with `mark_dirty`.

use crate::common::PageNum;
use crate::storage::Page;

/// A pinned page as seen by the caller.
///
/// The handle identifies the pinned page for `unpin`, `mark_dirty`, and
/// `force_page`, and carries a snapshot of the page content taken at pin
/// time. There is no aliasing with the frame's buffer: reading the handle
/// never observes later pool activity, and writing it changes nothing until
/// `mark_dirty` copies the bytes in.
///
/// # Example
/// ```ignore
/// let mut handle = pool.pin(PageNum::new(3))?;
/// handle.data_mut()[0] = 0xAB;
/// pool.mark_dirty(&handle)?;
/// pool.unpin(&handle)?;
/// ```
#[derive(Debug)]
pub struct PageHandle {
    page_num: PageNum,
    data: Box<Page>,
}

impl PageHandle {
    /// Create a handle holding a copy of `content`.
    ///
    /// Called by `BufferPool::pin`.
    pub(crate) fn new(page_num: PageNum, content: &Page) -> Self {
        let mut data = Box::new(Page::new());
        data.copy_from(content);
        Self { page_num, data }
    }

    /// The page number this handle refers to.
    #[inline]
    pub fn page_num(&self) -> PageNum {
        self.page_num
    }

    /// Read access to the handle's page content.
    #[inline]
    pub fn data(&self) -> &[u8] {
        self.data.as_slice()
    }

    /// Write access to the handle's page content.
    ///
    /// Changes stay local to the handle until published via `mark_dirty`.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        self.data.as_mut_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_snapshots_content() {
        let mut page = Page::new();
        page.as_mut_slice()[0] = 0x42;

        let handle = PageHandle::new(PageNum::new(5), &page);
        assert_eq!(handle.page_num(), PageNum::new(5));
        assert_eq!(handle.data()[0], 0x42);
    }

    #[test]
    fn test_handle_mutation_is_local() {
        let page = Page::new();
        let mut handle = PageHandle::new(PageNum::new(0), &page);

        handle.data_mut()[0] = 0xFF;

        // The source page is untouched.
        assert_eq!(page.as_slice()[0], 0);
        assert_eq!(handle.data()[0], 0xFF);
    }
}
