//! Page number type.

use std::fmt;

/// Identifies a page in a page file.
///
/// Page numbers are zero-based: page `N` lives at file offset `N × PAGE_SIZE`.
/// An empty frame is modeled as `Option<PageNum>` being `None`, so there is no
/// in-band "no page" sentinel and no negative page numbers to validate.
///
/// # Example
/// ```
/// use pagepool::PageNum;
///
/// let page = PageNum::new(42);
/// assert_eq!(page.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageNum(pub u32);

impl PageNum {
    /// Create a new PageNum.
    #[inline]
    pub fn new(n: u32) -> Self {
        PageNum(n)
    }
}

impl fmt::Display for PageNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_num_new() {
        let page = PageNum::new(42);
        assert_eq!(page.0, 42);
    }

    #[test]
    fn test_page_num_ordering() {
        assert!(PageNum::new(1) < PageNum::new(2));
        assert!(PageNum::new(5) > PageNum::new(3));
    }

    #[test]
    fn test_page_num_display() {
        assert_eq!(format!("{}", PageNum::new(42)), "Page(42)");
    }
}
