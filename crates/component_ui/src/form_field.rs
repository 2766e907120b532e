//! Labelled form field wrapper and the binding contract form libraries plug into.

use leptos::*;
use style_variants::{bool_token, merge_layout_class, FieldVariant};

use crate::primitives::TextField;

/// Narrow value contract between a form library and a field control.
///
/// A form library owns the value; the control reads `value`, reports edits through
/// `on_change`, reports focus loss through `on_blur`, and exposes its element via `node_ref`.
pub struct FieldBinding<T: 'static> {
    /// Current value.
    pub value: Signal<T>,
    /// Receives every edit.
    pub on_change: Callback<T>,
    /// Receives focus loss, for touched/validation tracking.
    pub on_blur: Option<Callback<()>>,
    /// Input element, for focusing on validation failure.
    pub node_ref: NodeRef<html::Input>,
}

impl<T: 'static> Clone for FieldBinding<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for FieldBinding<T> {}

impl<T: Clone + 'static> FieldBinding<T> {
    /// Binding that reads and writes `signal` directly.
    pub fn from_signal(signal: RwSignal<T>) -> Self {
        Self {
            value: signal.into(),
            on_change: Callback::new(move |value| signal.set(value)),
            on_blur: None,
            node_ref: create_node_ref(),
        }
    }

    /// Adds a blur observer.
    pub fn with_on_blur(mut self, on_blur: Callback<()>) -> Self {
        self.on_blur = Some(on_blur);
        self
    }
}

#[component]
/// Label, optional description and optional error message around a control.
///
/// The control should use `{id}` as its id and `{id}-description {id}-error` as its
/// `aria-describedby`; [`BoundTextField`] inside a `FormField` with the same id does this.
pub fn FormField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(optional, into)] description: Option<String>,
    /// Error message. `None` means the field is valid.
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional)] required: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let description_id = format!("{id}-description");
    let error_id = format!("{id}-error");
    let error = Signal::derive(move || error.get());
    let invalid = move || error.with(Option::is_some);

    view! {
        <div
            class=merge_layout_class("ui-form-field", layout_class)
            data-ui-primitive="true"
            data-ui-kind="form-field"
            data-ui-invalid=move || bool_token(invalid())
        >
            <label for=id data-ui-slot="label">
                {label}
                {required
                    .then(|| view! { <span data-ui-slot="required" aria-hidden="true">"*"</span> })}
            </label>
            {children()}
            {description.map(|description| view! {
                <p id=description_id data-ui-slot="description">{description}</p>
            })}
            <p id=error_id role="alert" data-ui-slot="error" hidden=move || !invalid()>
                {move || error.get().unwrap_or_default()}
            </p>
        </div>
    }
}

#[component]
/// Text input driven by a [`FieldBinding`].
pub fn BoundTextField(
    binding: FieldBinding<String>,
    /// Element id; match the enclosing [`FormField`] id.
    #[prop(into)]
    id: String,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] invalid: MaybeSignal<bool>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] variant: FieldVariant,
) -> impl IntoView {
    let described_by = format!("{id}-description {id}-error");
    let on_blur = binding.on_blur;

    view! {
        <TextField
            variant=variant
            id=id
            placeholder=placeholder.unwrap_or_default()
            aria_describedby=described_by
            aria_invalid=invalid
            input_type=input_type.unwrap_or("text")
            node_ref=binding.node_ref
            ui_slot="bound-field"
            value=binding.value
            on_input=Callback::new(move |ev| binding.on_change.call(event_target_value(&ev)))
            on_blur=Callback::new(move |_| {
                if let Some(on_blur) = on_blur.as_ref() {
                    on_blur.call(());
                }
            })
        />
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn signal_binding_writes_through() {
        let _ = create_runtime();
        let email = create_rw_signal(String::new());
        let binding = FieldBinding::from_signal(email);

        binding.on_change.call("ada@example.com".to_string());

        assert_eq!(binding.value.get_untracked(), "ada@example.com");
        assert!(binding.on_blur.is_none());
    }
}
