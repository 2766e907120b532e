//! Currency amount input.

use component_state::{format_amount, parse_amount};
use leptos::*;
use style_variants::merge_layout_class;

use crate::config::use_component_defaults;
use crate::controlled::Controlled;
use crate::draft::TextDraft;
use crate::primitives::TextField;

#[component]
/// Numeric field that accepts grouping separators and an optional currency symbol.
///
/// The text is re-formatted on blur or when the amount changes from outside. While typing, text
/// that does not parse marks the field invalid and leaves the last valid amount in place.
pub fn AmountInput(
    /// Controlled amount. `Some` makes the amount controlled; the inner `None` means empty.
    #[prop(optional, into)]
    value: Option<Signal<Option<f64>>>,
    /// Initial amount when uncontrolled.
    #[prop(optional)]
    default_value: Option<f64>,
    /// Receives every committed amount, `None` when the text is cleared.
    #[prop(optional)]
    on_value_change: Option<Callback<Option<f64>>>,
    /// Overrides the configured number of decimals.
    #[prop(optional)]
    decimals: Option<usize>,
    /// Overrides the configured currency symbol.
    #[prop(optional, into)]
    currency_symbol: Option<String>,
    /// Accessible label. Defaults to "Amount".
    #[prop(optional, into)]
    aria_label: Option<String>,
    /// Placeholder text. Defaults to a formatted zero.
    #[prop(optional, into)]
    placeholder: Option<String>,
    /// Layout-only class appended to the root class list.
    #[prop(optional)]
    layout_class: Option<&'static str>,
) -> impl IntoView {
    let defaults = use_component_defaults();
    let decimals = decimals.unwrap_or(defaults.amount_decimals);
    let symbol = store_value(currency_symbol.unwrap_or(defaults.currency_symbol));

    let external = match value {
        Some(value) => Signal::derive(move || Some(value.get())),
        None => Signal::derive(|| None),
    };
    let amount = Controlled::new("AmountInput value", external, default_value, on_value_change);
    let draft = TextDraft::new(
        "AmountInput",
        amount,
        move |text| symbol.with_value(|symbol| parse_amount(text, symbol)),
        move |amount| symbol.with_value(|symbol| format_amount(*amount, decimals, symbol)),
    );

    let on_input = Callback::new(move |ev| {
        draft.input(event_target_value(&ev)).ok();
    });
    let on_blur = Callback::new(move |_| draft.blur());

    view! {
        <div
            class=merge_layout_class("ui-amount-input", layout_class)
            data-ui-primitive="true"
            data-ui-kind="amount-input"
        >
            <TextField
                aria_label=aria_label.unwrap_or_else(|| "Amount".to_string())
                placeholder=placeholder.unwrap_or_else(|| draft.formatted(&Some(0.0)))
                inputmode="decimal"
                ui_slot="amount-text"
                aria_invalid=draft.invalid()
                value=draft.text()
                on_input=on_input
                on_blur=on_blur
            />
        </div>
    }
}
