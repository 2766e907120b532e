//! Searchable single-value picker.

use component_state::{filter_options, label_for, SelectOption};
use leptos::*;
use style_variants::{bool_token, merge_layout_class, open_token, ButtonVariant};

use crate::controlled::Controlled;
use crate::dialog::close_on_escape;
use crate::primitives::{Button, TextField};

#[component]
/// Combobox with a filter box. Both the open flag and the selected value may be controlled;
/// the filter query is always internal.
pub fn Combobox(
    options: Vec<SelectOption>,
    /// Controlled selected value. Empty means nothing selected.
    #[prop(optional, into)]
    value: MaybeProp<String>,
    /// Initially selected option value when uncontrolled.
    #[prop(optional, into)]
    default_value: String,
    /// Receives the value of every chosen option.
    #[prop(optional)]
    on_value_change: Option<Callback<String>>,
    /// Controlled open flag.
    #[prop(optional, into)]
    open: MaybeProp<bool>,
    /// Initial listbox visibility when uncontrolled.
    #[prop(optional)]
    default_open: bool,
    /// Receives every requested listbox visibility.
    #[prop(optional)]
    on_open_change: Option<Callback<bool>>,
    #[prop(default = "Select…".to_string(), into)] placeholder: String,
    #[prop(default = "Search…".to_string(), into)] search_placeholder: String,
    #[prop(default = "No match found.".to_string(), into)] empty_message: String,
    /// Layout-only class appended to the root class list.
    #[prop(optional)]
    layout_class: Option<&'static str>,
) -> impl IntoView {
    let selected = Controlled::from_prop("Combobox value", value, default_value, on_value_change);
    let open = Controlled::from_prop("Combobox open", open, default_open, on_open_change);
    let is_open = open.signal();
    let query = create_rw_signal(String::new());
    let options = store_value(options);
    close_on_escape(is_open, move || open.set(false));

    let trigger_text = move || {
        let value = selected.get();
        options
            .with_value(|options| label_for(options, &value).map(str::to_string))
            .unwrap_or_else(|| placeholder.clone())
    };

    let choose = move |value: String| {
        selected.set(value);
        open.set(false);
        query.set(String::new());
    };

    let list = move || {
        let current = selected.get();
        let matches: Vec<SelectOption> = options.with_value(|options| {
            filter_options(options, &query.get())
                .into_iter()
                .cloned()
                .collect()
        });
        if matches.is_empty() {
            return view! { <div data-ui-slot="empty">{empty_message.clone()}</div> }.into_view();
        }
        matches
            .into_iter()
            .map(|option| {
                let is_selected = option.value == current;
                let value = option.value.clone();
                view! {
                    <div
                        role="option"
                        data-ui-slot="option"
                        aria-selected=bool_token(is_selected)
                        aria-disabled=bool_token(option.disabled)
                        data-ui-selected=bool_token(is_selected)
                        on:click=move |_| {
                            if !option.disabled {
                                choose(value.clone());
                            }
                        }
                    >
                        {option.label.clone()}
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div
            class=merge_layout_class("ui-combobox", layout_class)
            data-ui-primitive="true"
            data-ui-kind="combobox"
            data-ui-state=move || open_token(is_open.get())
        >
            <Button
                variant=ButtonVariant::Outline
                role="combobox"
                ui_slot="combobox-trigger"
                aria_expanded=is_open
                aria_haspopup="listbox"
                on_click=Callback::new(move |_| open.update(|open| !open))
            >
                {trigger_text}
            </Button>
            <Show when=move || is_open.get() fallback=|| ()>
                <div data-ui-slot="popup">
                    <TextField
                        placeholder=search_placeholder.clone()
                        aria_label=search_placeholder.clone()
                        ui_slot="search"
                        value=query
                        on_input=Callback::new(move |ev| query.set(event_target_value(&ev)))
                    />
                    <div role="listbox" data-ui-slot="options">{list.clone()}</div>
                </div>
            </Show>
        </div>
    }
}
