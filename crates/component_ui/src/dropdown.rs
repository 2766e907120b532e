//! Dropdown action menu.

use component_state::SelectOption;
use leptos::*;
use style_variants::{merge_layout_class, open_token, ButtonVariant};

use crate::controlled::Controlled;
use crate::dialog::close_on_escape;
use crate::primitives::Button;

#[component]
/// Menu of actions behind a trigger button. Choosing an item reports its value and closes the
/// menu.
pub fn DropdownMenu(
    /// Controlled open flag.
    #[prop(optional, into)]
    open: MaybeProp<bool>,
    /// Initial open state when uncontrolled.
    #[prop(optional)]
    default_open: bool,
    /// Receives every requested open state.
    #[prop(optional)]
    on_open_change: Option<Callback<bool>>,
    /// Text of the menu trigger.
    #[prop(into)]
    trigger_label: String,
    items: Vec<SelectOption>,
    on_select: Callback<String>,
    /// Layout-only class appended to the root class list.
    #[prop(optional)]
    layout_class: Option<&'static str>,
) -> impl IntoView {
    let open = Controlled::from_prop("DropdownMenu open", open, default_open, on_open_change);
    let is_open = open.signal();
    close_on_escape(is_open, move || open.set(false));
    let items = store_value(items);

    let menu = move || {
        items
            .get_value()
            .into_iter()
            .map(|item| {
                let value = item.value.clone();
                view! {
                    <Button
                        variant=ButtonVariant::Quiet
                        role="menuitem"
                        ui_slot="menu-item"
                        disabled=item.disabled
                        on_click=Callback::new(move |_| {
                            on_select.call(value.clone());
                            open.set(false);
                        })
                    >
                        {item.label}
                    </Button>
                }
            })
            .collect_view()
    };

    view! {
        <div
            class=merge_layout_class("ui-dropdown-menu", layout_class)
            data-ui-primitive="true"
            data-ui-kind="dropdown-menu"
            data-ui-state=move || open_token(is_open.get())
        >
            <Button
                ui_slot="menu-trigger"
                aria_haspopup="menu"
                aria_expanded=is_open
                on_click=Callback::new(move |_| open.update(|open| !open))
            >
                {trigger_label}
            </Button>
            <Show when=move || is_open.get() fallback=|| ()>
                <div role="menu" data-ui-slot="menu">{menu}</div>
            </Show>
        </div>
    }
}
