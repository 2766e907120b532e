//! Forwarding of caller-supplied attributes to a rendered root element.

use leptos::html::ElementDescriptor;
use leptos::*;
use style_variants::{ClassList, ExtraAttributes};

/// Sets every non-class entry of `extra` on the element behind `node_ref` once it mounts.
pub(crate) fn forward_attributes<E>(node_ref: NodeRef<E>, extra: &ExtraAttributes)
where
    E: ElementDescriptor + Clone + 'static,
{
    let attributes: Vec<(String, String)> = extra
        .attributes()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();
    if attributes.is_empty() {
        return;
    }
    node_ref.on_load(move |element| {
        attributes
            .into_iter()
            .fold(element, |element, (name, value)| element.attr(name, value));
    });
}

/// Root class list: `base`, then the layout class, then any forwarded `class` entry.
pub(crate) fn root_class(
    base: &'static str,
    layout_class: Option<&'static str>,
    extra: &ExtraAttributes,
) -> String {
    ClassList::new(base)
        .with_opt(layout_class)
        .with_opt(extra.class())
        .build()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn forwarded_class_is_merged_after_layout_class() {
        let extra = ExtraAttributes::new()
            .with("class", "w-full ui-data-table")
            .with("data-testid", "orders");
        assert_eq!(
            root_class("ui-data-table", Some("mt-4"), &extra),
            "ui-data-table mt-4 w-full"
        );
    }
}
