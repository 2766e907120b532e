//! Pagination arithmetic and numbered page-link layout.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// One-based page position and page size.
pub struct PageState {
    /// Current page, starting at 1.
    pub current_page: usize,
    /// Rows per page.
    pub page_size: usize,
}

impl PageState {
    /// First page at `page_size`.
    pub fn first(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// "Showing `start`–`end` of `total`" summary. `start` is one-based; all zero for no rows.
pub struct RecordRange {
    /// First visible record, one-based.
    pub start: usize,
    /// Last visible record, inclusive.
    pub end: usize,
    /// Total record count.
    pub total: usize,
}

/// Page count for `len` rows.
///
/// Always at least 1. Disabled pagination or a zero page size puts every row on one page.
pub fn total_pages(len: usize, page_size: usize, enabled: bool) -> usize {
    if !enabled || page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Resolved visible slice of a sorted row sequence.
pub struct PageWindow {
    /// Effective page, clamped into `1..=total_pages`.
    pub page: usize,
    /// Page count.
    pub total_pages: usize,
    /// Absolute index of the first visible row.
    pub offset: usize,
    /// Number of visible rows.
    pub visible: usize,
    /// Record range summary.
    pub range: RecordRange,
}

impl PageWindow {
    /// Resolves the window for `len` sorted rows.
    pub fn resolve(len: usize, current_page: usize, page_size: usize, enabled: bool) -> Self {
        let total_pages = total_pages(len, page_size, enabled);
        if !enabled || page_size == 0 {
            return Self {
                page: 1,
                total_pages,
                offset: 0,
                visible: len,
                range: RecordRange {
                    start: usize::from(len > 0),
                    end: len,
                    total: len,
                },
            };
        }

        let page = current_page.clamp(1, total_pages);
        let offset = (page - 1) * page_size;
        let end = (page * page_size).min(len);
        Self {
            page,
            total_pages,
            offset,
            visible: end.saturating_sub(offset),
            range: RecordRange {
                start: if len == 0 { 0 } else { offset + 1 },
                end,
                total: len,
            },
        }
    }

    /// Absolute index of the `local`-th visible row.
    pub fn absolute_index(&self, local: usize) -> usize {
        self.offset + local
    }

    /// Visible part of `items`.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset.min(items.len());
        let end = (self.offset + self.visible).min(items.len());
        &items[start..end]
    }

    /// Whether a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Entry of a numbered pagination strip.
pub enum PageLink {
    /// Link to a one-based page.
    Page(usize),
    /// Collapsed run of pages.
    Ellipsis,
}

/// Numbered page links for `current` of `total` pages.
///
/// The first and last page are always present, plus `sibling_count` pages on either side of
/// the current one. A gap of exactly one page shows that page; a longer gap becomes a single
/// [`PageLink::Ellipsis`].
pub fn page_links(current: usize, total: usize, sibling_count: usize) -> Vec<PageLink> {
    let total = total.max(1);
    let current = current.clamp(1, total);
    let mut pages = BTreeSet::from([1, total]);
    let low = current.saturating_sub(sibling_count).max(1);
    let high = current.saturating_add(sibling_count).min(total);
    pages.extend(low..=high);

    let mut links = Vec::with_capacity(pages.len() + 2);
    let mut previous = None;
    for page in pages {
        if let Some(previous) = previous {
            match page - previous {
                1 => {}
                2 => links.push(PageLink::Page(previous + 1)),
                _ => links.push(PageLink::Ellipsis),
            }
        }
        links.push(PageLink::Page(page));
        previous = Some(page);
    }
    links
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::PageLink::{Ellipsis, Page};
    use super::*;

    #[test]
    fn page_count_rounds_up_and_never_drops_below_one() {
        assert_eq!(total_pages(25, 10, true), 3);
        assert_eq!(total_pages(30, 10, true), 3);
        assert_eq!(total_pages(0, 10, true), 1);
        assert_eq!(total_pages(25, 10, false), 1);
        assert_eq!(total_pages(25, 0, true), 1);
    }

    #[test]
    fn last_partial_page_range() {
        let window = PageWindow::resolve(25, 3, 10, true);
        assert_eq!(
            window.range,
            RecordRange {
                start: 21,
                end: 25,
                total: 25
            }
        );
        assert_eq!(window.visible, 5);
        assert_eq!(window.absolute_index(0), 20);
        assert!(window.has_previous());
        assert!(!window.has_next());
    }

    #[test]
    fn out_of_range_pages_are_clamped() {
        let beyond = PageWindow::resolve(25, 9, 10, true);
        assert_eq!(beyond.page, 3);
        let zero = PageWindow::resolve(25, 0, 10, true);
        assert_eq!(zero.page, 1);
        assert_eq!(zero.offset, 0);
    }

    #[test]
    fn zero_page_size_shows_everything() {
        let rows: Vec<u8> = (0..25).collect();
        let window = PageWindow::resolve(rows.len(), 4, 0, true);
        assert_eq!(window.total_pages, 1);
        assert_eq!(window.slice(&rows).len(), 25);
        assert_eq!(
            window.range,
            RecordRange {
                start: 1,
                end: 25,
                total: 25
            }
        );
    }

    #[test]
    fn empty_data_has_zero_range() {
        let window = PageWindow::resolve(0, 1, 10, true);
        assert_eq!(
            window.range,
            RecordRange {
                start: 0,
                end: 0,
                total: 0
            }
        );
        assert_eq!(window.slice::<u8>(&[]), &[] as &[u8]);
    }

    #[test]
    fn links_collapse_long_gaps_only() {
        assert_eq!(
            page_links(5, 10, 1),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_links(4, 10, 1),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]
        );
        assert_eq!(page_links(1, 10, 1), vec![Page(1), Page(2), Ellipsis, Page(10)]);
        assert_eq!(page_links(1, 1, 1), vec![Page(1)]);
        assert_eq!(page_links(2, 3, 0), vec![Page(1), Page(2), Page(3)]);
    }
}
