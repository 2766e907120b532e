//! Modal overlays: dialog, sheet, and drawer.
//!
//! All three share one controlled open flag. `Escape` and a click on the backdrop request a
//! close; the built-in close button does the same.

use leptos::*;
use style_variants::{open_token, ButtonSize, ButtonVariant, SheetSide};

use crate::controlled::Controlled;
use crate::primitives::Button;

/// Registers a window `Escape` listener that calls `close` while `open` is true.
pub(crate) fn close_on_escape(open: Signal<bool>, close: impl Fn() + 'static) {
    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && open.get_untracked() {
            close();
        }
    });
    on_cleanup(move || handle.remove());
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OverlayKind {
    Dialog,
    Sheet(SheetSide),
    Drawer,
}

impl OverlayKind {
    fn kind_token(self) -> &'static str {
        match self {
            Self::Dialog => "dialog",
            Self::Sheet(_) => "sheet",
            Self::Drawer => "drawer",
        }
    }

    fn side_token(self) -> Option<&'static str> {
        match self {
            Self::Dialog => None,
            Self::Sheet(side) => Some(side.token()),
            Self::Drawer => Some(SheetSide::Bottom.token()),
        }
    }
}

#[component]
fn OverlayLayer(
    kind: OverlayKind,
    open: Controlled<bool>,
    trigger_label: Option<String>,
    title: String,
    description: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let is_open = open.signal();
    close_on_escape(is_open, move || open.set(false));
    let title_id = format!("{}-title", kind.kind_token());

    view! {
        {trigger_label.map(|label| view! {
            <Button
                ui_slot="overlay-trigger"
                aria_haspopup="dialog"
                aria_expanded=is_open
                on_click=Callback::new(move |_| open.set(true))
            >
                {label}
            </Button>
        })}
        <Show when=move || is_open.get() fallback=|| ()>
            <div class="ui-overlay" data-ui-primitive="true" data-ui-kind="overlay">
                <div
                    data-ui-slot="backdrop"
                    aria-hidden="true"
                    on:click=move |_| open.set(false)
                ></div>
                <div
                    class="ui-overlay-content"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby=title_id.clone()
                    data-ui-kind=kind.kind_token()
                    data-ui-side=kind.side_token()
                    data-ui-state=move || open_token(is_open.get())
                >
                    {(kind == OverlayKind::Drawer)
                        .then(|| view! { <div data-ui-slot="handle" aria-hidden="true"></div> })}
                    <header data-ui-slot="header">
                        <h2 id=title_id.clone() data-ui-slot="title">{title.clone()}</h2>
                        {description.clone().map(|description| view! {
                            <p data-ui-slot="description">{description}</p>
                        })}
                    </header>
                    <div data-ui-slot="body">{children()}</div>
                    <Button
                        variant=ButtonVariant::Quiet
                        size=ButtonSize::Icon
                        ui_slot="close"
                        aria_label="Close"
                        on_click=Callback::new(move |_| open.set(false))
                    >
                        "×"
                    </Button>
                </div>
            </div>
        </Show>
    }
}

#[component]
/// Centered modal dialog.
pub fn Dialog(
    /// Controlled open flag.
    #[prop(optional, into)]
    open: MaybeProp<bool>,
    /// Initial open state when uncontrolled.
    #[prop(optional)]
    default_open: bool,
    /// Receives every requested open state.
    #[prop(optional)]
    on_open_change: Option<Callback<bool>>,
    /// Renders a button that opens the dialog.
    #[prop(optional, into)]
    trigger_label: Option<String>,
    /// Heading, also the accessible name.
    #[prop(into)]
    title: String,
    /// Supporting text, linked through `aria-describedby`.
    #[prop(optional, into)]
    description: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let open = Controlled::from_prop("Dialog open", open, default_open, on_open_change);
    view! {
        <OverlayLayer
            kind=OverlayKind::Dialog
            open=open
            trigger_label=trigger_label
            title=title
            description=description
        >
            {children()}
        </OverlayLayer>
    }
}

#[component]
/// Panel sliding in from one edge.
pub fn Sheet(
    /// Controlled open state.
    #[prop(optional, into)]
    open: MaybeProp<bool>,
    /// Initial open state when uncontrolled.
    #[prop(optional)]
    default_open: bool,
    /// Receives every requested open state.
    #[prop(optional)]
    on_open_change: Option<Callback<bool>>,
    /// Edge the sheet slides in from.
    #[prop(optional)]
    side: SheetSide,
    /// Text of the built-in trigger button. No trigger is rendered without it.
    #[prop(optional, into)]
    trigger_label: Option<String>,
    /// Heading, also the accessible name.
    #[prop(into)]
    title: String,
    /// Supporting text, linked through `aria-describedby`.
    #[prop(optional, into)]
    description: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let open = Controlled::from_prop("Sheet open", open, default_open, on_open_change);
    view! {
        <OverlayLayer
            kind=OverlayKind::Sheet(side)
            open=open
            trigger_label=trigger_label
            title=title
            description=description
        >
            {children()}
        </OverlayLayer>
    }
}

#[component]
/// Bottom sheet with a drag handle bar.
pub fn Drawer(
    /// Controlled open state.
    #[prop(optional, into)]
    open: MaybeProp<bool>,
    /// Initial open state when uncontrolled.
    #[prop(optional)]
    default_open: bool,
    /// Receives every requested open state.
    #[prop(optional)]
    on_open_change: Option<Callback<bool>>,
    /// Text of the built-in trigger button. No trigger is rendered without it.
    #[prop(optional, into)]
    trigger_label: Option<String>,
    /// Heading, also the accessible name.
    #[prop(into)]
    title: String,
    /// Supporting text, linked through `aria-describedby`.
    #[prop(optional, into)]
    description: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let open = Controlled::from_prop("Drawer open", open, default_open, on_open_change);
    view! {
        <OverlayLayer
            kind=OverlayKind::Drawer
            open=open
            trigger_label=trigger_label
            title=title
            description=description
        >
            {children()}
        </OverlayLayer>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn drawer_is_a_bottom_sheet() {
        assert_eq!(OverlayKind::Drawer.side_token(), Some("bottom"));
        assert_eq!(OverlayKind::Sheet(SheetSide::Left).side_token(), Some("left"));
        assert_eq!(OverlayKind::Dialog.side_token(), None);
    }
}
