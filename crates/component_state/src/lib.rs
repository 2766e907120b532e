//! Headless state for the design-system components.
//!
//! Everything here is runtime-agnostic: the controlled/uncontrolled [`ControlledSlot`], the
//! sort, pagination and expansion engines behind the data table, the [`TableState`] driver,
//! selection sets, the toast queue, graceful amount/date parsing and the library-wide
//! [`ComponentDefaults`]. The Leptos components in `component_ui` run the same transitions over
//! reactive signals. Nothing in this crate logs; failures come back as typed errors.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod calendar;
pub mod cell;
pub mod config;
pub mod error;
pub mod expansion;
pub mod input;
pub mod pagination;
pub mod selection;
pub mod slot;
pub mod sort;
pub mod table;
pub mod toast;

pub use calendar::{shift_month, MonthGrid, WEEKDAY_LABELS};
pub use cell::{compare_cells, locale_compare, CellValue, TableRecord};
pub use config::ComponentDefaults;
pub use error::{ConfigError, ParseError, StateError, TableError};
pub use expansion::{check_unique_keys, ExpandedKeys};
pub use input::{format_amount, format_date, parse_amount, parse_date};
pub use pagination::{page_links, total_pages, PageLink, PageState, PageWindow, RecordRange};
pub use selection::{filter_options, label_for, toggle_value, SelectOption, SelectionMode};
pub use slot::{ControlledSlot, Ownership};
pub use sort::{sorted_order, CellAccessor, ColumnSpec, SortDirection, SortFn, SortState};
pub use table::{TableInit, TableState, TableView, VisibleRow, DEFAULT_PAGE_SIZE};
pub use toast::{Toast, ToastId, ToastQueue, ToastRequest, ToastTone};
