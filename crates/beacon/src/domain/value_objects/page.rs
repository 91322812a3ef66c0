//! Page
//!
//! An ordered window over a collection, produced from a windowed repository
//! query. Page indexes are 1-based.

use serde::{Deserialize, Serialize};

/// One page of a windowed listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    /// Total item count across all pages
    pub total: u64,
}

impl<T> Page<T> {
    /// Convert the page items into another shape, keeping the window intact
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total: self.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_preserves_the_window() {
        let page = Page {
            items: vec![1, 2, 3],
            page: 2,
            page_size: 3,
            total: 7,
        };
        let mapped = page.map(|n| n.to_string());
        assert_eq!(mapped.items, vec!["1", "2", "3"]);
        assert_eq!(mapped.page, 2);
        assert_eq!(mapped.page_size, 3);
        assert_eq!(mapped.total, 7);
    }
}
