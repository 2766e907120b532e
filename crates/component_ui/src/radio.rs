//! Radio group with roving selection.

use leptos::ev::KeyboardEvent;
use leptos::*;
use style_variants::{bool_token, merge_layout_class};

use crate::controlled::Controlled;
use crate::roving::RovingGroup;

#[derive(Clone, Copy)]
/// Selected-value state shared by a [`RadioGroup`] and its items.
///
/// An empty string means nothing is selected.
pub struct RadioGroupHandle {
    value: Controlled<String>,
    items: RovingGroup,
    name: StoredValue<String>,
}

impl RadioGroupHandle {
    /// Creates the state. A `value` makes the selection controlled.
    pub fn new(
        name: impl Into<String>,
        value: MaybeProp<String>,
        default_value: String,
        on_value_change: Option<Callback<String>>,
    ) -> Self {
        Self {
            value: Controlled::from_prop("RadioGroup value", value, default_value, on_value_change),
            items: RovingGroup::new(),
            name: store_value(name.into()),
        }
    }

    /// Selected value, empty when none. Tracked.
    pub fn value(&self) -> String {
        self.value.get()
    }

    /// Whether `item` is selected. Tracked.
    pub fn is_selected(&self, item: &str) -> bool {
        self.value.get() == item
    }

    /// Requests `item` as the selection.
    pub fn select(&self, item: impl Into<String>) {
        self.value.set(item.into());
    }
}

#[component]
/// Radio group. Children receive the [`RadioGroupHandle`] through `let:`.
pub fn RadioGroup<F, IV>(
    /// Group name, also the element id prefix.
    #[prop(into)]
    name: String,
    /// Controlled selected value.
    #[prop(optional, into)]
    value: MaybeProp<String>,
    /// Initially selected value when uncontrolled.
    #[prop(optional, into)]
    default_value: String,
    /// Receives every selected value.
    #[prop(optional)]
    on_value_change: Option<Callback<String>>,
    /// Accessible label of the group.
    #[prop(optional, into)]
    aria_label: Option<String>,
    /// Layout-only class appended to the root class list.
    #[prop(optional)]
    layout_class: Option<&'static str>,
    children: F,
) -> impl IntoView
where
    F: Fn(RadioGroupHandle) -> IV + 'static,
    IV: IntoView,
{
    let handle = RadioGroupHandle::new(name, value, default_value, on_value_change);
    view! {
        <div
            class=merge_layout_class("ui-radio-group", layout_class)
            role="radiogroup"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="radio-group"
        >
            {children(handle)}
        </div>
    }
}

#[component]
/// Radio option. Arrow keys move the selection through the group.
pub fn RadioItem(
    handle: RadioGroupHandle,
    /// Value selected by this item.
    #[prop(into)]
    value: String,
    /// Visible item label.
    #[prop(into)]
    label: String,
    /// Disables the control.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let node_ref = create_node_ref::<html::Button>();
    handle.items.register(value.clone(), node_ref);
    let id = handle.name.with_value(|name| format!("{name}-{value}"));
    let item = store_value(value);
    let selected = Signal::derive(move || item.with_value(|item| handle.is_selected(item)));
    let group_has_value = Signal::derive(move || !handle.value().is_empty());

    let on_keydown = move |ev: KeyboardEvent| {
        let target = item.with_value(|item| handle.items.target(item, &ev.key()));
        if let Some(target) = target {
            ev.prevent_default();
            handle.select(target.clone());
            handle.items.focus(&target);
        }
    };

    view! {
        <div class="ui-radio-item" data-ui-primitive="true" data-ui-kind="radio-item">
            <button
                type="button"
                id=id.clone()
                role="radio"
                node_ref=node_ref
                aria-checked=move || bool_token(selected.get())
                tabindex=move || if selected.get() || !group_has_value.get() { 0 } else { -1 }
                disabled=move || disabled.get()
                data-ui-slot="indicator"
                data-ui-state=move || if selected.get() { "checked" } else { "unchecked" }
                on:click=move |_| item.with_value(|item| handle.select(item.clone()))
                on:keydown=on_keydown
            ></button>
            <label for=id data-ui-slot="label">{label}</label>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn selection_moves_between_items() {
        let _ = create_runtime();
        let handle = RadioGroupHandle::new("plan", MaybeProp::default(), String::new(), None);
        assert_eq!(handle.value(), "");
        handle.select("pro");
        assert!(handle.is_selected("pro"));
        handle.select("team");
        assert!(!handle.is_selected("pro"));
    }
}
