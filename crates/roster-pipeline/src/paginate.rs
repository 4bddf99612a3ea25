use roster_model::Page;

/// Half-open slice `[(index-1)*size, index*size)` of `items`, truncated at
/// the end. A page past the end yields an empty slice.
pub fn paginate<T>(items: &[T], page: Page) -> &[T] {
    let start = page.offset().min(items.len());
    let end = start.saturating_add(page.size()).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `total` items, never less than one.
pub fn page_count(total: usize, size: usize) -> usize {
    if size == 0 {
        return 1;
    }
    total.div_ceil(size).max(1)
}

/// Navigation facts for one page of a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: Page,
    pub total: usize,
    pub page_count: usize,
    /// 1-based number of the first item shown, 0 when the page is empty.
    pub first_item: usize,
    /// 1-based number of the last item shown, 0 when the page is empty.
    pub last_item: usize,
}

impl PageWindow {
    pub fn new(total: usize, page: Page) -> Self {
        let offset = page.offset();
        let (first_item, last_item) = if offset >= total {
            (0, 0)
        } else {
            (offset + 1, offset.saturating_add(page.size()).min(total))
        };
        Self {
            page,
            total,
            page_count: page_count(total, page.size()),
            first_item,
            last_item,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page.index() > 1
    }

    pub fn has_next(&self) -> bool {
        self.page.index() < self.page_count
    }

    pub fn is_out_of_range(&self) -> bool {
        self.page.index() > self.page_count
    }

    /// Move an out-of-range page back to the last valid one.
    pub fn clamp(total: usize, page: Page) -> Page {
        page.with_index(page.index().min(page_count(total, page.size())))
    }

    /// "Showing X-Y of N" label.
    pub fn label(&self) -> String {
        if self.total == 0 {
            return "No records".to_string();
        }
        format!(
            "Showing {}-{} of {} (page {} of {})",
            self.first_item,
            self.last_item,
            self.total,
            self.page.index(),
            self.page_count
        )
    }
}
