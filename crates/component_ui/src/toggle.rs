//! Pressed-state toggles and toggle groups.

use component_state::{toggle_value, SelectionMode};
use leptos::*;
use style_variants::{merge_layout_class, ButtonSize, ButtonVariant};

use crate::controlled::Controlled;
use crate::primitives::Button;

#[component]
/// Two-state button.
pub fn Toggle(
    /// Controlled pressed state.
    #[prop(optional, into)]
    pressed: MaybeProp<bool>,
    /// Initial pressed state when uncontrolled.
    #[prop(optional)]
    default_pressed: bool,
    /// Receives the next pressed state on every click.
    #[prop(optional)]
    on_pressed_change: Option<Callback<bool>>,
    /// Button variant of the toggle.
    #[prop(default = ButtonVariant::Quiet)]
    variant: ButtonVariant,
    /// Button size of the toggle.
    #[prop(default = ButtonSize::Md)]
    size: ButtonSize,
    /// Accessible label, for icon-only toggles.
    #[prop(optional, into)]
    aria_label: MaybeSignal<String>,
    /// Disables the control.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    /// Layout-only class appended to the root class list.
    #[prop(optional)]
    layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let state = Controlled::from_prop("Toggle pressed", pressed, default_pressed, on_pressed_change);
    let is_pressed = state.signal();

    view! {
        <Button
            variant=variant
            size=size
            layout_class=layout_class.unwrap_or("ui-toggle")
            aria_label=aria_label
            aria_pressed=is_pressed
            pressed=is_pressed
            disabled=disabled
            ui_slot="toggle"
            on_click=Callback::new(move |_| state.update(|pressed| !pressed))
        >
            {children()}
        </Button>
    }
}

#[derive(Clone, Copy)]
/// Pressed-value state shared by a [`ToggleGroup`] and its items.
pub struct ToggleGroupHandle {
    value: Controlled<Vec<String>>,
    mode: SelectionMode,
}

impl ToggleGroupHandle {
    /// Creates the state. A `value` makes the pressed set controlled.
    pub fn new(
        value: MaybeProp<Vec<String>>,
        default_value: Vec<String>,
        on_value_change: Option<Callback<Vec<String>>>,
        mode: SelectionMode,
    ) -> Self {
        Self {
            value: Controlled::from_prop("ToggleGroup value", value, default_value, on_value_change),
            mode,
        }
    }

    /// Whether `item` is pressed. Tracked.
    pub fn is_pressed(&self, item: &str) -> bool {
        self.value.get().iter().any(|value| value == item)
    }

    /// Pressed values. Tracked.
    pub fn values(&self) -> Vec<String> {
        self.value.get()
    }

    /// Presses or releases `item` according to the mode.
    pub fn toggle(&self, item: &str) {
        let mode = self.mode;
        self.value.update(|current| toggle_value(current, item, mode));
    }
}

#[component]
/// Group of toggles. Children receive the [`ToggleGroupHandle`] through `let:`.
pub fn ToggleGroup<F, IV>(
    /// Controlled pressed values.
    #[prop(optional, into)]
    value: MaybeProp<Vec<String>>,
    /// Initially pressed item values when uncontrolled.
    #[prop(optional)]
    default_value: Vec<String>,
    /// Receives the full next list of pressed item values.
    #[prop(optional)]
    on_value_change: Option<Callback<Vec<String>>>,
    /// Single keeps at most one item pressed; multiple allows any number.
    #[prop(optional)]
    mode: SelectionMode,
    /// Accessible label of the group.
    #[prop(optional, into)]
    aria_label: Option<String>,
    /// Layout-only class appended to the root class list.
    #[prop(optional)]
    layout_class: Option<&'static str>,
    children: F,
) -> impl IntoView
where
    F: Fn(ToggleGroupHandle) -> IV + 'static,
    IV: IntoView,
{
    let handle = ToggleGroupHandle::new(value, default_value, on_value_change, mode);
    let variant = match mode {
        SelectionMode::Single { .. } => "single",
        SelectionMode::Multiple => "multiple",
    };
    view! {
        <div
            class=merge_layout_class("ui-toggle-group", layout_class)
            role="group"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="toggle-group"
            data-ui-variant=variant
        >
            {children(handle)}
        </div>
    }
}

#[component]
/// Toggle inside a [`ToggleGroup`].
pub fn ToggleGroupItem(
    handle: ToggleGroupHandle,
    /// Item identity within the group.
    #[prop(into)]
    value: String,
    /// Accessible label, for icon-only toggles.
    #[prop(optional, into)]
    aria_label: MaybeSignal<String>,
    /// Disables the control.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    let item = store_value(value);
    let pressed = Signal::derive(move || item.with_value(|item| handle.is_pressed(item)));

    view! {
        <Button
            variant=ButtonVariant::Quiet
            layout_class="ui-toggle-group-item"
            aria_label=aria_label
            aria_pressed=pressed
            pressed=pressed
            disabled=disabled
            ui_slot="toggle-group-item"
            on_click=Callback::new(move |_| item.with_value(|item| handle.toggle(item)))
        >
            {children()}
        </Button>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn multiple_group_reports_full_value_set() {
        let _ = create_runtime();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let handle = ToggleGroupHandle::new(
            MaybeProp::default(),
            vec!["bold".to_string()],
            Some(Callback::new(move |values: Vec<String>| {
                sink.borrow_mut().push(values)
            })),
            SelectionMode::Multiple,
        );

        handle.toggle("italic");
        handle.toggle("bold");

        assert_eq!(handle.values(), vec!["italic".to_string()]);
        assert_eq!(
            *seen.borrow(),
            vec![
                vec!["bold".to_string(), "italic".to_string()],
                vec!["italic".to_string()],
            ]
        );
    }

    #[test]
    fn single_group_swaps_pressed_item() {
        let _ = create_runtime();
        let handle = ToggleGroupHandle::new(
            MaybeProp::default(),
            Vec::new(),
            None,
            SelectionMode::Single { allow_empty: false },
        );
        handle.toggle("left");
        handle.toggle("center");
        handle.toggle("center");
        assert!(handle.is_pressed("center"));
        assert!(!handle.is_pressed("left"));
    }
}
