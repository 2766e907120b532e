//! Leptos components for the design system.
//!
//! Every stateful component accepts an optional controlled value plus a change callback and
//! falls back to internal state when the value is absent (see [`Controlled`]). Components that
//! only make sense inside a parent (tab triggers, radio items, accordion items, toggle-group
//! items) take the parent's handle as a required prop, so misuse fails to compile instead of
//! failing at runtime. Rendered roots carry the `data-ui-*` attribute contract consumed by the
//! stylesheet layers.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod accordion;
mod amount_input;
mod attributes;
mod combobox;
mod config;
mod controlled;
mod date_input;
mod dialog;
mod draft;
mod dropdown;
mod form_field;
mod popover;
mod primitives;
mod radio;
mod roving;
mod table;
mod tabs;
mod toast;
mod toggle;
mod tokens;

pub use accordion::{Accordion, AccordionHandle, AccordionItem, AccordionMode};
pub use amount_input::AmountInput;
pub use combobox::Combobox;
pub use config::{
    defaults_from_json, provide_component_defaults, provide_component_defaults_json,
    use_component_defaults, ComponentDefaultsProvider,
};
pub use controlled::Controlled;
pub use date_input::DateInput;
pub use dialog::{Dialog, Drawer, Sheet};
pub use dropdown::DropdownMenu;
pub use form_field::{BoundTextField, FieldBinding, FormField};
pub use popover::Popover;
pub use primitives::{
    Badge, Button, Cluster, EmptyState, Panel, SelectField, Stack, Surface, Text, TextField,
};
pub use radio::{RadioGroup, RadioGroupHandle, RadioItem};
pub use table::{
    record_range_label, CellRenderer, Column, DataTable, HeaderRenderer, PageLinks,
    PaginationStyle, RowRenderer, SimplePager,
};
pub use tabs::{TabList, TabPanel, TabTrigger, Tabs, TabsHandle};
pub use toast::{Toaster, ToasterHandle};
pub use toggle::{Toggle, ToggleGroup, ToggleGroupHandle, ToggleGroupItem};
pub use tokens::{token_stylesheet, TokenStylesheet};

/// Convenience imports for application crates.
pub mod prelude {
    pub use crate::{
        Accordion, AccordionHandle, AccordionItem, AccordionMode, AmountInput, Badge,
        BoundTextField, Button, Cluster, Column, Combobox, ComponentDefaultsProvider, DataTable,
        DateInput, Dialog, Drawer, DropdownMenu, EmptyState, FieldBinding, FormField, PaginationStyle,
        Panel, Popover, RadioGroup, RadioGroupHandle, RadioItem, SelectField, Sheet, Stack, Surface,
        TabList, TabPanel, TabTrigger, Tabs, TabsHandle, Text, TextField, Toaster, ToasterHandle,
        Toggle, ToggleGroup, ToggleGroupHandle, ToggleGroupItem, TokenStylesheet,
    };
    pub use component_state::{
        CellValue, ComponentDefaults, SelectOption, SelectionMode, SortDirection, SortState,
        TableRecord, ToastRequest, ToastTone,
    };
    pub use style_variants::{
        Align, ButtonSize, ButtonVariant, Elevation, ExtraAttributes, FieldVariant, LayoutAlign,
        LayoutGap, LayoutJustify, LayoutPadding, SheetSide, SurfaceVariant, TextRole, TextTone,
    };
}
