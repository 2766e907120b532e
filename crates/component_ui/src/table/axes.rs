//! The four interactive axes of a data table and their transitions.

use std::collections::HashSet;
use std::hash::Hash;

use component_state::{ExpandedKeys, PageWindow, SortState};
use leptos::*;

use crate::controlled::Controlled;

/// Sort, page, page-size, and expansion slots of one table.
///
/// Each axis is resolved independently, so a table may control its page while leaving the
/// sort state to the component.
pub(crate) struct TableAxes<K: 'static> {
    pub(crate) sort: Controlled<SortState>,
    pub(crate) page: Controlled<usize>,
    pub(crate) size: Controlled<usize>,
    pub(crate) expanded: Controlled<HashSet<K>>,
}

impl<K: 'static> Clone for TableAxes<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: 'static> Copy for TableAxes<K> {}

impl<K: Eq + Hash + Clone + 'static> TableAxes<K> {
    /// Advances the sort cycle for `column`. Clicks on unsortable columns are ignored.
    pub(crate) fn click_header(&self, column: &str, sortable: bool) {
        if sortable {
            self.sort.update(|current| current.next_for(column));
        }
    }

    pub(crate) fn set_page(&self, page: usize) {
        self.page.set(page);
    }

    /// Changes the page size and returns to the first page.
    pub(crate) fn set_page_size(&self, size: usize) {
        self.size.set(size);
        self.page.set(1);
    }

    /// Flips one row, leaving every other expanded row as it was.
    pub(crate) fn toggle_row(&self, key: &K) {
        self.expanded
            .update(|keys| ExpandedKeys::from(keys.clone()).toggled(key).into_set());
    }

    /// Page window over `len` sorted rows, tracked.
    pub(crate) fn window(&self, len: usize, pagination: bool) -> PageWindow {
        PageWindow::resolve(len, self.page.get(), self.size.get(), pagination)
    }
}

/// `(row_index, absolute_index)` of every visible row.
///
/// `row_index` points into the caller's data; `absolute_index` is the row's position across
/// all pages of the sorted order.
pub(crate) fn visible_rows(order: &[usize], window: &PageWindow) -> Vec<(usize, usize)> {
    window
        .slice(order)
        .iter()
        .enumerate()
        .map(|(local, row_index)| (*row_index, window.absolute_index(local)))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    fn recorder<T: Clone + 'static>() -> (Rc<RefCell<Vec<T>>>, Callback<T>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (
            seen,
            Callback::new(move |value: T| sink.borrow_mut().push(value)),
        )
    }

    fn uncontrolled_axes(
        on_page: Option<Callback<usize>>,
        on_size: Option<Callback<usize>>,
    ) -> TableAxes<&'static str> {
        TableAxes {
            sort: Controlled::from_prop("table sort", MaybeProp::default(), SortState::Unsorted, None),
            page: Controlled::from_prop("table page", MaybeProp::default(), 1, on_page),
            size: Controlled::from_prop("table size", MaybeProp::default(), 10, on_size),
            expanded: Controlled::from_prop("table expanded", MaybeProp::default(), HashSet::new(), None),
        }
    }

    #[test]
    fn page_size_change_returns_to_first_page() {
        let _ = create_runtime();
        let (pages, on_page) = recorder();
        let (sizes, on_size) = recorder();
        let axes = uncontrolled_axes(Some(on_page), Some(on_size));

        axes.set_page(3);
        axes.set_page_size(20);

        assert_eq!(axes.page.get_untracked(), 1);
        assert_eq!(axes.size.get_untracked(), 20);
        assert_eq!(*pages.borrow(), vec![3, 1]);
        assert_eq!(*sizes.borrow(), vec![20]);
    }

    #[test]
    fn controlled_sort_only_reports_the_requested_state() {
        let _ = create_runtime();
        let external = create_rw_signal(SortState::Unsorted);
        let (seen, on_sort) = recorder();
        let mut axes = uncontrolled_axes(None, None);
        axes.sort = Controlled::new(
            "table sort",
            Signal::derive(move || Some(external.get())),
            SortState::Unsorted,
            Some(on_sort),
        );

        axes.click_header("name", true);
        assert_eq!(axes.sort.get_untracked(), SortState::Unsorted);
        assert_eq!(*seen.borrow(), vec![SortState::Ascending("name".into())]);

        external.set(SortState::Ascending("name".into()));
        axes.click_header("name", true);
        assert_eq!(
            seen.borrow().last(),
            Some(&SortState::Descending("name".into()))
        );
    }

    #[test]
    fn unsortable_header_click_is_ignored() {
        let _ = create_runtime();
        let (seen, on_sort) = recorder();
        let mut axes = uncontrolled_axes(None, None);
        axes.sort = Controlled::from_prop(
            "table sort",
            MaybeProp::default(),
            SortState::Unsorted,
            Some(on_sort),
        );

        axes.click_header("notes", false);

        assert_eq!(axes.sort.get_untracked(), SortState::Unsorted);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn uncontrolled_sort_cycles_through_three_states() {
        let _ = create_runtime();
        let axes = uncontrolled_axes(None, None);

        axes.click_header("amount", true);
        assert_eq!(axes.sort.get_untracked(), SortState::Ascending("amount".into()));
        axes.click_header("amount", true);
        assert_eq!(axes.sort.get_untracked(), SortState::Descending("amount".into()));
        axes.click_header("amount", true);
        assert_eq!(axes.sort.get_untracked(), SortState::Unsorted);
    }

    #[test]
    fn toggling_one_row_leaves_others_expanded() {
        let _ = create_runtime();
        let axes = uncontrolled_axes(None, None);

        axes.toggle_row(&"k1");
        axes.toggle_row(&"k2");
        axes.toggle_row(&"k1");

        assert_eq!(axes.expanded.get_untracked(), HashSet::from(["k2"]));
    }

    #[test]
    fn second_page_rows_carry_absolute_indices() {
        let _ = create_runtime();
        let axes = uncontrolled_axes(None, None);
        axes.set_page(2);
        let order: Vec<usize> = (0..25).rev().collect();

        let window = axes.window(order.len(), true);
        let rows = visible_rows(&order, &window);

        assert_eq!(rows.len(), 10);
        assert_eq!(rows.first(), Some(&(14, 10)));
        assert_eq!(rows.last(), Some(&(5, 19)));
    }

    #[test]
    fn disabled_pagination_shows_every_row_from_zero() {
        let _ = create_runtime();
        let axes = uncontrolled_axes(None, None);
        axes.set_page(3);
        let order = vec![2, 0, 1];

        let window = axes.window(order.len(), false);

        assert_eq!(visible_rows(&order, &window), vec![(2, 0), (0, 1), (1, 2)]);
    }
}
