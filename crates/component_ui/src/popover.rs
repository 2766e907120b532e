//! Anchored popover.

use leptos::*;
use style_variants::{merge_layout_class, open_token};

use crate::controlled::Controlled;
use crate::dialog::close_on_escape;
use crate::primitives::Button;

#[component]
/// Non-modal floating panel toggled by its trigger button. `Escape` closes it.
pub fn Popover(
    /// Controlled open flag.
    #[prop(optional, into)]
    open: MaybeProp<bool>,
    /// Initial open state when uncontrolled.
    #[prop(optional)]
    default_open: bool,
    /// Receives every requested open state.
    #[prop(optional)]
    on_open_change: Option<Callback<bool>>,
    /// Text of the popover trigger.
    #[prop(into)]
    trigger_label: String,
    /// Layout-only class appended to the root class list.
    #[prop(optional)]
    layout_class: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let open = Controlled::from_prop("Popover open", open, default_open, on_open_change);
    let is_open = open.signal();
    close_on_escape(is_open, move || open.set(false));

    view! {
        <div
            class=merge_layout_class("ui-popover", layout_class)
            data-ui-primitive="true"
            data-ui-kind="popover"
            data-ui-state=move || open_token(is_open.get())
        >
            <Button
                ui_slot="popover-trigger"
                aria_haspopup="dialog"
                aria_expanded=is_open
                on_click=Callback::new(move |_| open.update(|open| !open))
            >
                {trigger_label}
            </Button>
            <Show when=move || is_open.get() fallback=|| ()>
                <div role="dialog" data-ui-slot="content">
                    {children()}
                </div>
            </Show>
        </div>
    }
}
