//! Paging over a result

/// One page of a result: `size` records starting at `start`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub start: usize,
    pub size: usize,
    pub total: usize,
}

impl Page {
    /// Page starting at `start`. A zero size is treated as one.
    pub fn new(start: usize, size: usize, total: usize) -> Self {
        Self {
            start,
            size: size.max(1),
            total,
        }
    }

    /// The records on this page. Empty when `start` is past the end.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.start.min(items.len());
        let end = self.start.saturating_add(self.size).min(items.len());
        &items[start..end]
    }

    /// Start of the previous page, if any.
    ///
    /// Past the end, this is the last page that holds records.
    pub fn previous(&self) -> Option<usize> {
        if self.start == 0 || self.total == 0 {
            None
        } else if self.start >= self.total {
            Some((self.total - 1) / self.size * self.size)
        } else {
            Some(self.start.saturating_sub(self.size))
        }
    }

    /// Start of the next page, if any
    pub fn next(&self) -> Option<usize> {
        let next = self.start.saturating_add(self.size);
        (next < self.total).then_some(next)
    }

    /// One-based index of the first record shown, 0 if none
    pub fn first_shown(&self) -> usize {
        if self.start < self.total {
            self.start + 1
        } else {
            0
        }
    }

    /// One-based index of the last record shown, 0 if none
    pub fn last_shown(&self) -> usize {
        if self.start < self.total {
            self.start.saturating_add(self.size).min(self.total)
        } else {
            0
        }
    }
}
