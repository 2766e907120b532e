use std::cmp::Ordering;
use std::rc::Rc;

use component_state::{CellValue, ColumnSpec, TableRecord};
use leptos::*;
use style_variants::Align;

/// Renders a header cell.
pub type HeaderRenderer = Rc<dyn Fn() -> View>;

/// Renders a body cell from the row and its absolute index.
pub type CellRenderer<R> = Rc<dyn Fn(&R, usize) -> View>;

/// Renders the detail panel below an expanded row.
pub type RowRenderer<R> = Rc<dyn Fn(&R) -> View>;

/// Data table column descriptor.
///
/// Without a custom renderer a cell shows the column's [`CellValue`], with nulls rendered
/// empty.
pub struct Column<R> {
    spec: ColumnSpec<R>,
    title: String,
    header: Option<HeaderRenderer>,
    render: Option<CellRenderer<R>>,
    header_align: Align,
    cell_align: Align,
    width: Option<String>,
}

impl<R: TableRecord + 'static> Column<R> {
    /// Column reading `key` from each record, headed by `title`.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self::from_spec(ColumnSpec::new(key), title)
    }
}

impl<R: 'static> Column<R> {
    /// Column reading its value through `accessor`.
    pub fn with_accessor(
        key: impl Into<String>,
        title: impl Into<String>,
        accessor: impl Fn(&R) -> CellValue + 'static,
    ) -> Self {
        Self::from_spec(ColumnSpec::with_accessor(key, accessor), title)
    }

    fn from_spec(spec: ColumnSpec<R>, title: impl Into<String>) -> Self {
        Self {
            spec,
            title: title.into(),
            header: None,
            render: None,
            header_align: Align::Left,
            cell_align: Align::Left,
            width: None,
        }
    }

    /// Enables header-click sorting with the default comparator.
    pub fn sortable(mut self) -> Self {
        self.spec = self.spec.sortable();
        self
    }

    /// Enables header-click sorting with a custom ascending comparator.
    pub fn sort_by(mut self, compare: impl Fn(&R, &R) -> Ordering + 'static) -> Self {
        self.spec = self.spec.sort_by(compare);
        self
    }

    /// Replaces the header text with custom content.
    pub fn header<IV: IntoView>(mut self, header: impl Fn() -> IV + 'static) -> Self {
        self.header = Some(Rc::new(move || header().into_view()));
        self
    }

    /// Replaces the default cell content.
    pub fn render<IV: IntoView>(mut self, render: impl Fn(&R, usize) -> IV + 'static) -> Self {
        self.render = Some(Rc::new(move |row, index| render(row, index).into_view()));
        self
    }

    /// Header cell alignment.
    pub fn header_align(mut self, align: Align) -> Self {
        self.header_align = align;
        self
    }

    /// Body cell alignment.
    pub fn cell_align(mut self, align: Align) -> Self {
        self.cell_align = align;
        self
    }

    /// Fixed column width, as a CSS length.
    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Sorting descriptor.
    pub fn spec(&self) -> &ColumnSpec<R> {
        &self.spec
    }

    /// Column key.
    pub fn key(&self) -> &str {
        self.spec.key()
    }

    /// Header text.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn header_view(&self) -> View {
        match self.header.as_ref() {
            Some(header) => header(),
            None => self.title.clone().into_view(),
        }
    }

    pub(crate) fn cell_view(&self, row: &R, index: usize) -> View {
        match self.render.as_ref() {
            Some(render) => render(row, index),
            None => match self.spec.cell(row) {
                CellValue::Null => ().into_view(),
                value => value.to_string().into_view(),
            },
        }
    }

    pub(crate) fn header_align_token(&self) -> Align {
        self.header_align
    }

    pub(crate) fn cell_align_token(&self) -> Align {
        self.cell_align
    }

    pub(crate) fn width_style(&self) -> Option<String> {
        self.width.as_ref().map(|width| format!("width: {width}"))
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            spec: self.spec.clone(),
            title: self.title.clone(),
            header: self.header.clone(),
            render: self.render.clone(),
            header_align: self.header_align,
            cell_align: self.cell_align,
            width: self.width.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    use super::*;

    #[test]
    fn builder_carries_sorting_and_layout() {
        let column = Column::<Value>::new("amount", "Amount")
            .sortable()
            .cell_align(Align::Right)
            .width("8rem");

        assert!(column.spec().is_sortable());
        assert_eq!(column.key(), "amount");
        assert_eq!(column.title(), "Amount");
        assert_eq!(column.cell_align_token(), Align::Right);
        assert_eq!(column.header_align_token(), Align::Left);
        assert_eq!(column.width_style().as_deref(), Some("width: 8rem"));
        assert_eq!(
            column.spec().cell(&json!({ "amount": 12.5 })),
            CellValue::Number(12.5)
        );
    }

    #[test]
    fn accessor_columns_work_on_plain_structs() {
        struct Order {
            total: u32,
        }
        let column = Column::with_accessor("total", "Total", |order: &Order| {
            CellValue::from(i64::from(order.total))
        })
        .sort_by(|a: &Order, b: &Order| a.total.cmp(&b.total));

        assert!(column.spec().has_custom_sort());
        assert_eq!(column.spec().cell(&Order { total: 7 }), CellValue::Number(7.0));
    }
}
