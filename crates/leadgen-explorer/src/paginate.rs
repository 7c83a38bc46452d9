//! Fixed-size, 1-indexed pagination over an already filtered list.

use serde::Serialize;

/// One page of results plus the totals needed to render a pager.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

/// Number of pages needed for `total_items`. Always at least 1, so an empty
/// result still renders as "page 1 of 1". A `page_size` of 0 counts as 1.
#[must_use]
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1)).max(1)
}

/// Returns page `page` (1-indexed) of `items`.
///
/// Page 0 and pages past the end yield no items; the totals are still
/// reported.
#[must_use]
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size);

    let slice: &[T] = if page == 0 || start >= items.len() {
        &[]
    } else {
        let end = start.saturating_add(page_size).min(items.len());
        &items[start..end]
    };

    Page {
        items: slice.to_vec(),
        page,
        page_size,
        total_items: items.len(),
        total_pages: total_pages(items.len(), page_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last_pages() {
        let items: Vec<u32> = (1..=25).collect();
        let first = paginate(&items, 1, 10);
        assert_eq!(first.items, (1..=10).collect::<Vec<_>>());
        assert_eq!(first.total_items, 25);
        assert_eq!(first.total_pages, 3);

        let last = paginate(&items, 3, 10);
        assert_eq!(last.items, (21..=25).collect::<Vec<_>>());
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let items: Vec<u32> = (1..=5).collect();
        assert!(paginate(&items, 0, 10).items.is_empty());
        let past = paginate(&items, 2, 10);
        assert!(past.items.is_empty());
        assert_eq!(past.total_pages, 1);
        assert!(paginate(&items, usize::MAX, 10).items.is_empty());
    }

    #[test]
    fn empty_input_has_one_page() {
        let page = paginate::<u32>(&[], 1, 50);
        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 0);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn zero_page_size_is_treated_as_one() {
        let items = ["a", "b"];
        let page = paginate(&items, 2, 0);
        assert_eq!(page.items, ["b"]);
        assert_eq!(page.page_size, 1);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        assert_eq!(total_pages(20, 10), 2);
        assert_eq!(total_pages(21, 10), 3);
        assert_eq!(total_pages(0, 10), 1);
    }
}
