//! Presentational building blocks shared by the stateful components.

use leptos::ev::{FocusEvent, KeyboardEvent, MouseEvent};
use leptos::*;
use style_variants::{
    bool_token, merge_layout_class, ButtonSize, ButtonVariant, Elevation, FieldVariant,
    LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, SurfaceVariant, TextRole, TextTone,
};

mod controls;
mod data_display;
mod layout;

pub use controls::{Button, SelectField, TextField};
pub use data_display::{Badge, EmptyState, Panel, Surface, Text};
pub use layout::{Cluster, Stack};
