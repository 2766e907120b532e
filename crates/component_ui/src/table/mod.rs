//! Sortable, paginated, expandable data table.
//!
//! Sort state, current page, page size, and the expanded-key set are four independent
//! [`Controlled`] slots. Each render derives the sorted order and the page window from the
//! committed state; both are memoised.

use std::collections::HashSet;
use std::hash::Hash;
use std::rc::Rc;

use component_state::{check_unique_keys, sorted_order, ColumnSpec, SortDirection, SortState};
use leptos::logging::warn;
use leptos::*;
use style_variants::{bool_token, ExtraAttributes};

use crate::attributes::{forward_attributes, root_class};
use crate::config::use_component_defaults;
use crate::controlled::Controlled;
use crate::primitives::EmptyState;

mod axes;
mod column;
mod pagination;

use axes::{visible_rows, TableAxes};

pub use column::{CellRenderer, Column, HeaderRenderer, RowRenderer};
pub use pagination::{record_range_label, PageLinks, PaginationStyle, SimplePager};

#[component]
/// Data table over caller-owned rows.
///
/// Rows are addressed only through `columns` and `get_row_key`, whose keys must be unique and
/// stable. Passing any of `sort_state`, `current_page`, `page_size`, or `expanded_keys` makes
/// that axis controlled for the table's lifetime; the matching `on_*` callback receives every
/// requested transition either way.
pub fn DataTable<R, K, F>(
    /// Rows in input order.
    #[prop(into)]
    data: MaybeSignal<Vec<R>>,
    /// Column descriptors, in display order.
    columns: Vec<Column<R>>,
    /// Unique, stable key of a row.
    get_row_key: F,
    /// Splits rows into pages.
    #[prop(optional)]
    pagination: bool,
    /// Pagination control style.
    #[prop(optional)]
    pagination_style: PaginationStyle,
    /// Choices offered by the page-size selector.
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
    /// Initial page size when the page size is uncontrolled.
    #[prop(optional)]
    default_page_size: Option<usize>,
    /// Detail panel for expanded rows. Rows are expandable only when this is set.
    #[prop(optional)]
    render_expanded_row: Option<RowRenderer<R>>,
    /// Shows the loading row instead of data.
    #[prop(optional, into)]
    loading: MaybeSignal<bool>,
    /// Text of the empty-data row.
    #[prop(optional, into)]
    empty_message: Option<String>,
    /// Controlled sort state.
    #[prop(optional, into)]
    sort_state: MaybeProp<SortState>,
    /// Controlled one-based page.
    #[prop(optional, into)]
    current_page: MaybeProp<usize>,
    /// Controlled page size.
    #[prop(optional, into)]
    page_size: MaybeProp<usize>,
    /// Controlled expanded row keys.
    #[prop(optional, into)]
    expanded_keys: MaybeProp<HashSet<K>>,
    /// Receives the next sort state after a header click.
    #[prop(optional)]
    on_sort_change: Option<Callback<SortState>>,
    /// Receives the next page.
    #[prop(optional)]
    on_page_change: Option<Callback<usize>>,
    /// Receives the next page size.
    #[prop(optional)]
    on_page_size_change: Option<Callback<usize>>,
    /// Receives the full next expanded-key set.
    #[prop(optional)]
    on_expanded_change: Option<Callback<HashSet<K>>>,
    /// Accessible table label.
    #[prop(optional, into)]
    aria_label: Option<String>,
    /// Layout-only class appended to the root class list.
    #[prop(optional)]
    layout_class: Option<&'static str>,
    /// Attributes forwarded to the root element. A `class` entry joins the class list.
    #[prop(optional)]
    extra_attributes: ExtraAttributes,
) -> impl IntoView
where
    R: Clone + 'static,
    K: Eq + Hash + Clone + 'static,
    F: Fn(&R) -> K + 'static,
{
    let data = Signal::derive(move || data.get());
    let loading = Signal::derive(move || loading.get());
    let defaults = use_component_defaults();
    let page_size_options = page_size_options.unwrap_or(defaults.page_size_options);
    let default_page_size = default_page_size.unwrap_or(defaults.default_page_size);
    let empty_message = empty_message.unwrap_or(defaults.empty_message);
    let loading_message = defaults.loading_message;
    let sibling_count = defaults.sibling_count;

    let key_of: Rc<dyn Fn(&R) -> K> = Rc::new(get_row_key);
    let specs: Vec<ColumnSpec<R>> = columns.iter().map(|column| column.spec().clone()).collect();
    let specs = store_value(specs);
    let columns = store_value(columns);
    let expandable = render_expanded_row.is_some();
    let column_count = columns.with_value(Vec::len) + usize::from(expandable);

    let axes = TableAxes {
        sort: Controlled::from_prop(
            "DataTable sort_state",
            sort_state,
            SortState::Unsorted,
            on_sort_change,
        ),
        page: Controlled::from_prop("DataTable current_page", current_page, 1, on_page_change),
        size: Controlled::from_prop(
            "DataTable page_size",
            page_size,
            default_page_size,
            on_page_size_change,
        ),
        expanded: Controlled::from_prop(
            "DataTable expanded_keys",
            expanded_keys,
            HashSet::new(),
            on_expanded_change,
        ),
    };

    {
        let key_of = Rc::clone(&key_of);
        create_effect(move |_| {
            data.with(|rows| {
                if let Err(err) = check_unique_keys(rows, |row| key_of(row)) {
                    warn!("DataTable: {err}; expansion state may attach to the wrong row");
                }
            });
        });
    }

    let order = create_memo(move |_| {
        let sort = axes.sort.get();
        data.with(|rows| specs.with_value(|specs| sorted_order(rows, specs, &sort)))
    });
    let window = create_memo(move |_| axes.window(order.with(Vec::len), pagination));

    let on_header_click = move |key: String| {
        let sortable = specs.with_value(|specs| {
            specs
                .iter()
                .any(|spec| spec.key() == key && spec.is_sortable())
        });
        axes.click_header(&key, sortable);
    };
    let set_page = Callback::new(move |next: usize| axes.set_page(next));
    let set_page_size = Callback::new(move |next: usize| axes.set_page_size(next));

    let header = move || {
        let sort = axes.sort.get();
        columns.with_value(|columns| {
            columns
                .iter()
                .map(|column| {
                    let key = column.key().to_string();
                    let sortable = column.spec().is_sortable();
                    let direction = sort.direction_for(&key);
                    let align = column.header_align_token();
                    let label = column.header_view();
                    view! {
                        <th
                            scope="col"
                            class=align.class()
                            style=column.width_style()
                            aria-sort=direction.map(|direction| direction.token())
                            data-ui-slot="header-cell"
                            data-ui-align=align.token()
                            data-ui-sortable=bool_token(sortable)
                            data-ui-sort=direction.map(|direction| direction.token()).unwrap_or("none")
                        >
                            {if sortable {
                                view! {
                                    <button
                                        type="button"
                                        data-ui-slot="sort-trigger"
                                        on:click=move |_| on_header_click(key.clone())
                                    >
                                        {label}
                                        <span data-ui-slot="sort-indicator" aria-hidden="true">
                                            {match direction {
                                                Some(SortDirection::Ascending) => "▲",
                                                Some(SortDirection::Descending) => "▼",
                                                None => "↕",
                                            }}
                                        </span>
                                    </button>
                                }
                                .into_view()
                            } else {
                                label
                            }}
                        </th>
                    }
                })
                .collect_view()
        })
    };

    let render_expanded_row = render_expanded_row.map(store_value);
    let body = move || {
        if loading.get() {
            return view! {
                <tr data-ui-slot="loading-row">
                    <td colspan=column_count aria-busy="true">{loading_message.clone()}</td>
                </tr>
            }
            .into_view();
        }

        let window = window.get();
        let order = order.get();
        let expanded_keys = axes.expanded.get();
        data.with(|rows| {
            if rows.is_empty() {
                return view! {
                    <tr data-ui-slot="empty-row">
                        <td colspan=column_count>
                            <EmptyState message=empty_message.clone() />
                        </td>
                    </tr>
                }
                .into_view();
            }

            visible_rows(&order, &window)
                .into_iter()
                .map(|(row_index, index)| {
                    let row = &rows[row_index];
                    let key = key_of(row);
                    let is_expanded = expandable && expanded_keys.contains(&key);
                    let cells = columns.with_value(|columns| {
                        columns
                            .iter()
                            .map(|column| {
                                let align = column.cell_align_token();
                                view! {
                                    <td class=align.class() data-ui-align=align.token()>
                                        {column.cell_view(row, index)}
                                    </td>
                                }
                            })
                            .collect_view()
                    });
                    let toggle = expandable.then(|| {
                        let key = key.clone();
                        view! {
                            <td data-ui-slot="expand-cell">
                                <button
                                    type="button"
                                    data-ui-slot="expand-trigger"
                                    aria-expanded=bool_token(is_expanded)
                                    aria-label=if is_expanded { "Collapse row" } else { "Expand row" }
                                    on:click=move |_| axes.toggle_row(&key)
                                >
                                    {if is_expanded { "−" } else { "+" }}
                                </button>
                            </td>
                        }
                    });
                    let detail = render_expanded_row
                        .filter(|_| is_expanded)
                        .map(|render| {
                            view! {
                                <tr data-ui-slot="expanded-row">
                                    <td colspan=column_count>
                                        {render.with_value(|render| render(row))}
                                    </td>
                                </tr>
                            }
                        });
                    view! {
                        <tr
                            data-ui-slot="row"
                            data-ui-index=index
                            data-ui-expanded=bool_token(is_expanded)
                        >
                            {toggle}
                            {cells}
                        </tr>
                        {detail}
                    }
                    .into_view()
                })
                .collect_view()
        })
    };

    let pager = move || {
        if !pagination {
            return ().into_view();
        }
        match pagination_style {
            PaginationStyle::Numbered => view! {
                <PageLinks window=window sibling_count=sibling_count on_page=set_page />
            }
            .into_view(),
            PaginationStyle::Simple => view! {
                <SimplePager
                    window=window
                    page_size=axes.size.signal()
                    page_size_options=page_size_options.clone()
                    on_page=set_page
                    on_page_size=set_page_size
                />
            }
            .into_view(),
        }
    };

    let node_ref = create_node_ref::<html::Div>();
    forward_attributes(node_ref, &extra_attributes);

    view! {
        <div
            class=root_class("ui-data-table", layout_class, &extra_attributes)
            node_ref=node_ref
            data-ui-primitive="true"
            data-ui-kind="data-table"
            data-ui-pagination=pagination.then(|| pagination_style.token())
            data-ui-expandable=bool_token(expandable)
        >
            <table aria-label=aria_label aria-busy=move || bool_token(loading.get())>
                <thead>
                    <tr>
                        {expandable.then(|| view! { <th scope="col" data-ui-slot="expand-header"></th> })}
                        {header}
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
            {pager}
        </div>
    }
}
