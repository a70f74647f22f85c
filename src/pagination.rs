//! Windowed pagination over an already-loaded collection.

/// Number of pages needed to show `total` items, `per_page` at a time.
pub fn page_count(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

/// Slice of `items` visible on 1-based `page`. Pages past the end (or a zero
/// page or page size) yield an empty slice; clamped callers never ask for
/// one.
pub fn window<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    if page == 0 || per_page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

/// Page cursor clamped to `[1, max(1, total_pages)]`. Movement past either
/// end is refused, which is what disables the Previous/Next buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    total_pages: usize,
}

impl Pager {
    pub fn new(total_items: usize, per_page: usize) -> Self {
        Self {
            page: 1,
            total_pages: page_count(total_items, per_page),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn can_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn prev(&mut self) {
        if self.can_prev() {
            self.page -= 1;
        }
    }

    pub fn next(&mut self) {
        if self.can_next() {
            self.page += 1;
        }
    }

    pub fn goto(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages.max(1));
    }

    /// "{page} of {total}" indicator between the two buttons.
    pub fn label(&self) -> String {
        format!("{} of {}", self.page, self.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_items_in_pages_of_four() {
        let items: Vec<u32> = (0..10).collect();
        assert_eq!(page_count(items.len(), 4), 3);
        assert_eq!(window(&items, 1, 4), &[0, 1, 2, 3]);
        assert_eq!(window(&items, 2, 4), &[4, 5, 6, 7]);
        assert_eq!(window(&items, 3, 4), &[8, 9]);
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let items: Vec<u32> = (0..10).collect();
        assert!(window(&items, 4, 4).is_empty());
        assert!(window(&items, 0, 4).is_empty());
        assert!(window::<u32>(&[], 1, 4).is_empty());
    }

    #[test]
    fn exact_multiple_has_no_ragged_page() {
        let items: Vec<u32> = (0..8).collect();
        assert_eq!(page_count(items.len(), 4), 2);
        assert_eq!(window(&items, 2, 4).len(), 4);
        assert!(window(&items, 3, 4).is_empty());
    }

    #[test]
    fn pager_refuses_to_leave_the_valid_range() {
        let mut pager = Pager::new(10, 4);
        assert_eq!(pager.page(), 1);
        assert!(!pager.can_prev());
        pager.prev();
        assert_eq!(pager.page(), 1);

        pager.next();
        pager.next();
        assert_eq!(pager.page(), 3);
        assert!(!pager.can_next());
        pager.next();
        assert_eq!(pager.page(), 3);
        assert_eq!(pager.label(), "3 of 3");
    }

    #[test]
    fn goto_clamps_both_directions() {
        let mut pager = Pager::new(10, 4);
        pager.goto(99);
        assert_eq!(pager.page(), 3);
        pager.goto(0);
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn empty_collection_still_has_a_resting_page() {
        let mut pager = Pager::new(0, 4);
        assert_eq!(pager.total_pages(), 0);
        assert_eq!(pager.page(), 1);
        pager.next();
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.label(), "1 of 0");
    }
}
