//! Semantic style-variant tokens and class helpers shared by the component library.
//!
//! Components never emit raw style values. They publish a stable `data-ui-*` attribute
//! contract built from the enums below, plus a merged utility-class list, and leave the CSS
//! layer to map those onto design tokens.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use indexmap::IndexMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Semantic surface variants for structural primitives.
pub enum SurfaceVariant {
    /// Primary surface.
    Standard,
    /// Secondary or muted surface.
    Muted,
    /// Inset surface.
    Inset,
}

impl Default for SurfaceVariant {
    fn default() -> Self {
        Self::Standard
    }
}

impl SurfaceVariant {
    /// Attribute token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Muted => "muted",
            Self::Inset => "inset",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Semantic elevation levels.
pub enum Elevation {
    /// Flat surface.
    Flat,
    /// Raised surface.
    Raised,
    /// Overlay surface (popovers, dialogs, toasts).
    Overlay,
}

impl Default for Elevation {
    fn default() -> Self {
        Self::Flat
    }
}

impl Elevation {
    /// Attribute token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Raised => "raised",
            Self::Overlay => "overlay",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Standard action button.
    Standard,
    /// Primary emphasized action button.
    Primary,
    /// Secondary action button.
    Secondary,
    /// Quiet/ghost button.
    Quiet,
    /// Outlined button.
    Outline,
    /// Danger/destructive button.
    Danger,
    /// Text-link styled button.
    Link,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Standard
    }
}

impl ButtonVariant {
    /// Attribute token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Quiet => "quiet",
            Self::Outline => "outline",
            Self::Danger => "danger",
            Self::Link => "link",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    Md,
    /// Large button.
    Lg,
    /// Square icon-only button.
    Icon,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Md
    }
}

impl ButtonSize {
    /// Attribute token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Icon => "icon",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared input-field variants.
pub enum FieldVariant {
    /// Standard input.
    Standard,
    /// Inset/editor input.
    Inset,
}

impl Default for FieldVariant {
    fn default() -> Self {
        Self::Standard
    }
}

impl FieldVariant {
    /// Attribute token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Inset => "inset",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared text roles.
pub enum TextRole {
    /// Body text.
    Body,
    /// Label text.
    Label,
    /// Caption text.
    Caption,
    /// Title text.
    Title,
}

impl Default for TextRole {
    fn default() -> Self {
        Self::Body
    }
}

impl TextRole {
    /// Attribute token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Label => "label",
            Self::Caption => "caption",
            Self::Title => "title",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared text and status tone.
pub enum TextTone {
    /// Primary text.
    Primary,
    /// Secondary text.
    Secondary,
    /// Success/status tone.
    Success,
    /// Warning tone.
    Warning,
    /// Danger tone.
    Danger,
}

impl Default for TextTone {
    fn default() -> Self {
        Self::Primary
    }
}

impl TextTone {
    /// Attribute token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared layout gap tokens.
pub enum LayoutGap {
    /// No gap.
    None,
    /// Small gap.
    Sm,
    /// Default gap.
    Md,
    /// Large gap.
    Lg,
}

impl Default for LayoutGap {
    fn default() -> Self {
        Self::Md
    }
}

impl LayoutGap {
    /// Attribute token.
    pub fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared layout padding tokens.
pub enum LayoutPadding {
    /// No padding.
    None,
    /// Compact padding.
    Sm,
    /// Default padding.
    Md,
    /// Spacious padding.
    Lg,
}

impl Default for LayoutPadding {
    fn default() -> Self {
        Self::Md
    }
}

impl LayoutPadding {
    /// Attribute token.
    pub fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared cross-axis layout alignment tokens.
pub enum LayoutAlign {
    /// Stretch/fill alignment.
    Stretch,
    /// Start alignment.
    Start,
    /// Center alignment.
    Center,
    /// End alignment.
    End,
}

impl Default for LayoutAlign {
    fn default() -> Self {
        Self::Stretch
    }
}

impl LayoutAlign {
    /// Attribute token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Stretch => "stretch",
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared main-axis justification tokens.
pub enum LayoutJustify {
    /// Start justification.
    Start,
    /// Center justification.
    Center,
    /// Space between items.
    Between,
    /// End justification.
    End,
}

impl Default for LayoutJustify {
    fn default() -> Self {
        Self::Start
    }
}

impl LayoutJustify {
    /// Attribute token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::Between => "between",
            Self::End => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Horizontal text alignment for table headers and cells.
pub enum Align {
    /// Left aligned.
    Left,
    /// Centered.
    Center,
    /// Right aligned.
    Right,
}

impl Default for Align {
    fn default() -> Self {
        Self::Left
    }
}

impl Align {
    /// Attribute token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }

    /// Utility class applying the alignment.
    pub fn class(self) -> &'static str {
        match self {
            Self::Left => "text-left",
            Self::Center => "text-center",
            Self::Right => "text-right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Edge a sheet slides in from.
pub enum SheetSide {
    /// Top edge.
    Top,
    /// Right edge.
    Right,
    /// Bottom edge.
    Bottom,
    /// Left edge.
    Left,
}

impl Default for SheetSide {
    fn default() -> Self {
        Self::Right
    }
}

impl SheetSide {
    /// Attribute token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

/// Joins a primitive's base class with an optional layout-only class hook.
pub fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

/// Renders a boolean as an attribute token.
pub fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Open/closed state token used by disclosure-style components.
pub fn open_token(open: bool) -> &'static str {
    if open {
        "open"
    } else {
        "closed"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Ordered utility-class list.
///
/// Classes are split on whitespace and kept in first-seen order; a repeated class is dropped.
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    /// Starts a list from a base class string.
    pub fn new(base: &str) -> Self {
        Self::default().with(base)
    }

    /// Appends every class in `classes`.
    pub fn with(mut self, classes: &str) -> Self {
        for class in classes.split_whitespace() {
            if !self.classes.iter().any(|existing| existing == class) {
                self.classes.push(class.to_string());
            }
        }
        self
    }

    /// Appends `classes` when present.
    pub fn with_opt(self, classes: Option<&str>) -> Self {
        match classes {
            Some(classes) => self.with(classes),
            None => self,
        }
    }

    /// Appends `classes` when `condition` holds.
    pub fn with_if(self, condition: bool, classes: &str) -> Self {
        if condition {
            self.with(classes)
        } else {
            self
        }
    }

    /// Whether no class has been added.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Space-separated class attribute value.
    pub fn build(&self) -> String {
        self.classes.join(" ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Extra attributes forwarded to a component's root element.
///
/// Insertion order is preserved so rendered markup is stable. A `class` entry is not applied
/// as an attribute; components merge it into their class list instead.
pub struct ExtraAttributes {
    entries: IndexMap<String, String>,
}

impl ExtraAttributes {
    /// Empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an attribute, keeping its original position on replace.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds or replaces an attribute in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Value of an attribute.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Forwarded `class` entry, if any.
    pub fn class(&self) -> Option<&str> {
        self.get("class")
    }

    /// Attributes to set on the element, excluding `class`.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter(|(name, _)| name.as_str() != "class")
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ExtraAttributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        for (name, value) in iter {
            attributes.insert(name, value);
        }
        attributes
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_class_merges_only_non_empty_hooks() {
        assert_eq!(merge_layout_class("ui-stack", None), "ui-stack");
        assert_eq!(merge_layout_class("ui-stack", Some("")), "ui-stack");
        assert_eq!(
            merge_layout_class("ui-stack", Some("gallery-column")),
            "ui-stack gallery-column"
        );
    }

    #[test]
    fn class_list_drops_repeats_and_keeps_first_order() {
        let classes = ClassList::new("ui-button px-4")
            .with("px-4 font-medium")
            .with_opt(None)
            .with_opt(Some("ui-button rounded-md"))
            .with_if(false, "opacity-50")
            .with_if(true, "w-full");
        assert_eq!(
            classes.build(),
            "ui-button px-4 font-medium rounded-md w-full"
        );
    }

    #[test]
    fn extra_attributes_keep_insertion_order_and_hide_class() {
        let attrs: ExtraAttributes = [
            ("data-testid", "orders"),
            ("class", "min-w-full"),
            ("aria-describedby", "orders-caption"),
            ("data-testid", "orders-table"),
        ]
        .into_iter()
        .collect();

        assert_eq!(attrs.class(), Some("min-w-full"));
        assert_eq!(
            attrs.attributes().collect::<Vec<_>>(),
            vec![
                ("data-testid", "orders-table"),
                ("aria-describedby", "orders-caption"),
            ]
        );
    }

    #[test]
    fn tokens_are_stable() {
        assert_eq!(ButtonVariant::default().token(), "standard");
        assert_eq!(Align::Right.class(), "text-right");
        assert_eq!(SheetSide::default().token(), "right");
        assert_eq!(open_token(true), "open");
        assert_eq!(bool_token(false), "false");
    }
}
