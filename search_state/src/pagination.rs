//! Which page links the pagination bar shows.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationWindow {
    /// Numbered links, ascending.
    pub pages: Vec<u32>,
    pub show_first: bool,
    pub leading_gap: bool,
    pub trailing_gap: bool,
    pub show_last: bool,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Pages around `current`, widened to five links near either end of `1..=total`.
pub fn pagination_window(current: u32, total: u32) -> PaginationWindow {
    let pages = (1..=total)
        .filter(|&n| {
            n == current
                || (current <= 2 && n <= 5)
                || (current.saturating_add(1) >= total && n.saturating_add(4) >= total)
                || n.abs_diff(current) <= 2
        })
        .collect::<Vec<_>>();
    let show_first = current > 3 && !pages.contains(&1);
    let show_last = current.saturating_add(2) < total && !pages.contains(&total);
    PaginationWindow {
        show_first,
        leading_gap: current > 4 && total > 6,
        trailing_gap: current.saturating_add(3) < total && total > 6,
        show_last,
        has_previous: current >= 2,
        has_next: current < total,
        pages,
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_of_many() {
        let window = pagination_window(1, 10);
        assert_eq!(window.pages, vec![1, 2, 3, 4, 5]);
        assert!(!window.show_first && !window.leading_gap);
        assert!(window.trailing_gap && window.show_last);
        assert!(!window.has_previous && window.has_next);
    }

    #[test]
    fn middle_page_has_both_gaps() {
        let window = pagination_window(6, 12);
        assert_eq!(window.pages, vec![4, 5, 6, 7, 8]);
        assert!(window.show_first && window.leading_gap);
        assert!(window.trailing_gap && window.show_last);
        assert!(window.has_previous && window.has_next);
    }

    #[test]
    fn last_page_widens_backwards() {
        let window = pagination_window(10, 10);
        assert_eq!(window.pages, vec![6, 7, 8, 9, 10]);
        assert!(window.show_first && window.leading_gap);
        assert!(!window.trailing_gap && !window.show_last);
        assert!(!window.has_next);
    }

    #[test]
    fn no_gap_right_after_page_one() {
        let window = pagination_window(4, 10);
        assert_eq!(window.pages, vec![2, 3, 4, 5, 6]);
        assert!(window.show_first && !window.leading_gap);
    }

    #[test]
    fn few_pages_are_all_listed() {
        let window = pagination_window(3, 4);
        assert_eq!(window.pages, vec![1, 2, 3, 4]);
        assert!(!window.show_first && !window.show_last);
        assert!(!window.leading_gap && !window.trailing_gap);
    }

    #[test]
    fn page_past_the_end_shows_the_last_pages() {
        let window = pagination_window(u32::MAX, 5);
        assert_eq!(window.pages, vec![1, 2, 3, 4, 5]);
        assert!(!window.show_first && !window.show_last);
        assert!(!window.leading_gap && !window.trailing_gap);
        assert!(window.has_previous && !window.has_next);
    }

    #[test]
    fn nothing_without_results() {
        let window = pagination_window(1, 0);
        assert!(window.pages.is_empty());
        assert!(!window.has_previous && !window.has_next);
    }
}
