use component_state::{page_links, PageLink, PageWindow, RecordRange};
use leptos::logging::warn;
use leptos::*;
use style_variants::{bool_token, ButtonSize, ButtonVariant, LayoutGap, LayoutJustify};

use crate::primitives::{Button, Cluster, SelectField, Text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Pagination control rendered below a data table.
pub enum PaginationStyle {
    /// Previous/next buttons, a page-size selector, and the record range.
    Simple,
    /// Numbered page links with ellipsis collapsing.
    Numbered,
}

impl Default for PaginationStyle {
    fn default() -> Self {
        Self::Simple
    }
}

impl PaginationStyle {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Numbered => "numbered",
        }
    }
}

/// "Showing 21–25 of 25" text for a record range.
pub fn record_range_label(range: RecordRange) -> String {
    if range.total == 0 {
        "No records".to_string()
    } else {
        format!("Showing {}–{} of {}", range.start, range.end, range.total)
    }
}

/// Page size chosen in the selector, if it is one of the offered options.
pub(crate) fn parse_page_size(raw: &str, options: &[usize]) -> Option<usize> {
    raw.parse::<usize>()
        .ok()
        .filter(|size| options.contains(size))
}

#[component]
/// Numbered page links. The first and last pages stay visible; distant runs collapse into an
/// ellipsis.
pub fn PageLinks(
    #[prop(into)] window: Signal<PageWindow>,
    #[prop(default = 1)] sibling_count: usize,
    on_page: Callback<usize>,
) -> impl IntoView {
    let links = move || {
        let window = window.get();
        page_links(window.page, window.total_pages, sibling_count)
            .into_iter()
            .map(|link| match link {
                PageLink::Page(page) => {
                    let current = page == window.page;
                    view! {
                        <Button
                            variant=if current { ButtonVariant::Outline } else { ButtonVariant::Quiet }
                            size=ButtonSize::Icon
                            ui_slot="page-link"
                            aria_label=format!("Page {page}")
                            selected=current
                            on_click=Callback::new(move |_| on_page.call(page))
                        >
                            {page}
                        </Button>
                    }
                    .into_view()
                }
                PageLink::Ellipsis => view! {
                    <span data-ui-slot="ellipsis" aria-hidden="true">"…"</span>
                }
                .into_view(),
            })
            .collect_view()
    };

    view! {
        <nav
            class="ui-pagination"
            aria-label="Pagination"
            data-ui-primitive="true"
            data-ui-kind="pagination"
            data-ui-variant=PaginationStyle::Numbered.token()
        >
            <Button
                variant=ButtonVariant::Quiet
                ui_slot="previous"
                disabled=Signal::derive(move || !window.get().has_previous())
                on_click=Callback::new(move |_| on_page.call(window.get_untracked().page.saturating_sub(1)))
            >
                "Previous"
            </Button>
            {links}
            <Button
                variant=ButtonVariant::Quiet
                ui_slot="next"
                disabled=Signal::derive(move || !window.get().has_next())
                on_click=Callback::new(move |_| on_page.call(window.get_untracked().page + 1))
            >
                "Next"
            </Button>
        </nav>
    }
}

#[component]
/// Previous/next strip with a page-size selector and the record range.
pub fn SimplePager(
    #[prop(into)] window: Signal<PageWindow>,
    #[prop(into)] page_size: Signal<usize>,
    page_size_options: Vec<usize>,
    on_page: Callback<usize>,
    on_page_size: Callback<usize>,
) -> impl IntoView {
    let options = store_value(page_size_options);

    view! {
        <Cluster
            layout_class="ui-pagination"
            justify=LayoutJustify::Between
            gap=LayoutGap::Sm
            role="navigation"
            aria_label="Pagination"
        >
            <Text ui_slot="range">{move || record_range_label(window.get().range)}</Text>
            <Cluster gap=LayoutGap::Sm ui_slot="controls">
                <label data-ui-slot="page-size">
                    <span>"Rows per page"</span>
                    <SelectField
                        aria_label="Rows per page"
                        value=Signal::derive(move || page_size.get().to_string())
                        on_change=Callback::new(move |ev| {
                            let raw = event_target_value(&ev);
                            match options.with_value(|options| parse_page_size(&raw, options)) {
                                Some(size) => on_page_size.call(size),
                                None => warn!("ignoring unsupported page size `{raw}`"),
                            }
                        })
                    >
                        {options
                            .get_value()
                            .into_iter()
                            .map(|size| view! { <option value=size.to_string()>{size}</option> })
                            .collect_view()}
                    </SelectField>
                </label>
                <span
                    data-ui-slot="page-status"
                    data-ui-last=move || bool_token(!window.get().has_next())
                >
                    {move || {
                        let window = window.get();
                        format!("Page {} of {}", window.page, window.total_pages)
                    }}
                </span>
                <Button
                    variant=ButtonVariant::Outline
                    size=ButtonSize::Sm
                    ui_slot="previous"
                    disabled=Signal::derive(move || !window.get().has_previous())
                    on_click=Callback::new(move |_| on_page.call(window.get_untracked().page.saturating_sub(1)))
                >
                    "Previous"
                </Button>
                <Button
                    variant=ButtonVariant::Outline
                    size=ButtonSize::Sm
                    ui_slot="next"
                    disabled=Signal::derive(move || !window.get().has_next())
                    on_click=Callback::new(move |_| on_page.call(window.get_untracked().page + 1))
                >
                    "Next"
                </Button>
            </Cluster>
        </Cluster>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn range_label_reads_naturally() {
        assert_eq!(
            record_range_label(RecordRange {
                start: 21,
                end: 25,
                total: 25
            }),
            "Showing 21–25 of 25"
        );
        assert_eq!(
            record_range_label(RecordRange {
                start: 0,
                end: 0,
                total: 0
            }),
            "No records"
        );
    }

    #[test]
    fn only_offered_page_sizes_are_accepted() {
        let options = [10, 20, 30, 50];
        assert_eq!(parse_page_size("20", &options), Some(20));
        assert_eq!(parse_page_size("25", &options), None);
        assert_eq!(parse_page_size("ten", &options), None);
    }
}
