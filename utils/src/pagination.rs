// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

/// Holds the pagination state (generic, for various entities)
///
/// Pages are 1-indexed: page 1 shows the first `items_per_page` items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    pub items_per_page: usize,
    pub current_page: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        PaginationConfig {
            items_per_page: 8,
            current_page: 1,
        }
    }
}

impl PaginationConfig {
    /// Number of pages needed to show `item_count` items.
    pub fn total_pages(&self, item_count: usize) -> usize {
        if self.items_per_page == 0 {
            return 0;
        }

        item_count.div_ceil(self.items_per_page)
    }

    /// Index range of the items visible on the current page.
    pub fn page_bounds(&self, item_count: usize) -> std::ops::Range<usize> {
        let start = self
            .current_page
            .saturating_sub(1)
            .saturating_mul(self.items_per_page)
            .min(item_count);
        let end = start.saturating_add(self.items_per_page).min(item_count);

        start..end
    }

    /// Moves to `page` if it exists for `item_count` items, otherwise does nothing.
    pub fn select_page(&mut self, page: usize, item_count: usize) {
        if (1..=self.total_pages(item_count)).contains(&page) {
            self.current_page = page;
        }
    }
}
