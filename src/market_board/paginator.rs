use std::ops::{Range, RangeInclusive};

/// Fixed-size pages over a list of item ids. Pages are numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    total_items: usize,
    page_size: usize,
}

impl Paginator {
    pub fn new(total_items: usize, page_size: usize) -> Self {
        Self {
            total_items,
            page_size: page_size.max(1),
        }
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// At least one page, even when there are no items
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size).max(1)
    }

    pub fn clamp_page(&self, page: usize) -> usize {
        page.clamp(1, self.total_pages())
    }

    /// Index range of `page` after clamping
    pub fn page_bounds(&self, page: usize) -> Range<usize> {
        let page = self.clamp_page(page);
        let start = ((page - 1) * self.page_size).min(self.total_items);
        let end = (start + self.page_size).min(self.total_items);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T], page: usize) -> &'a [T] {
        let bounds = self.page_bounds(page);
        let end = bounds.end.min(items.len());
        &items[bounds.start.min(end)..end]
    }

    /// Page numbers shown around `page`: up to `2 * radius + 1` of them,
    /// shifted so the window stays inside `1..=total_pages`.
    pub fn window(&self, page: usize, radius: usize) -> RangeInclusive<usize> {
        let total = self.total_pages();
        let page = self.clamp_page(page);
        let width = (2 * radius + 1).min(total);

        let start = page.saturating_sub(radius).max(1).min(total + 1 - width);
        start..=start + width - 1
    }
}
