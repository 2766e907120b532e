//! Accordion with single or multiple open items.

use component_state::{toggle_value, SelectionMode};
use leptos::*;
use style_variants::{bool_token, merge_layout_class, open_token};

use crate::controlled::Controlled;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How many accordion items may be open at once.
pub enum AccordionMode {
    /// One item at a time. `collapsible` lets the open item close again.
    Single {
        /// Whether the open item can be collapsed.
        collapsible: bool,
    },
    /// Any number of items.
    Multiple,
}

impl Default for AccordionMode {
    fn default() -> Self {
        Self::Single { collapsible: true }
    }
}

impl AccordionMode {
    fn selection(self) -> SelectionMode {
        match self {
            Self::Single { collapsible } => SelectionMode::Single {
                allow_empty: collapsible,
            },
            Self::Multiple => SelectionMode::Multiple,
        }
    }

    fn token(self) -> &'static str {
        match self {
            Self::Single { .. } => "single",
            Self::Multiple => "multiple",
        }
    }
}

#[derive(Clone, Copy)]
/// Open-item state shared by an [`Accordion`] and its items.
pub struct AccordionHandle {
    open: Controlled<Vec<String>>,
    mode: AccordionMode,
}

impl AccordionHandle {
    /// Creates the state. A `value` makes the open set controlled.
    pub fn new(
        value: MaybeProp<Vec<String>>,
        default_value: Vec<String>,
        on_value_change: Option<Callback<Vec<String>>>,
        mode: AccordionMode,
    ) -> Self {
        Self {
            open: Controlled::from_prop("Accordion value", value, default_value, on_value_change),
            mode,
        }
    }

    /// Whether `item` is open. Tracked.
    pub fn is_open(&self, item: &str) -> bool {
        self.open.get().iter().any(|open| open == item)
    }

    /// Open items in the order they were opened. Tracked.
    pub fn open_items(&self) -> Vec<String> {
        self.open.get()
    }

    /// Opens or closes `item` according to the mode.
    pub fn toggle(&self, item: &str) {
        let mode = self.mode.selection();
        self.open.update(|current| toggle_value(current, item, mode));
    }

    /// Selection mode.
    pub fn mode(&self) -> AccordionMode {
        self.mode
    }
}

#[component]
/// Accordion container. Children receive the [`AccordionHandle`] through `let:`.
pub fn Accordion<F, IV>(
    /// Controlled open items.
    #[prop(optional, into)]
    value: MaybeProp<Vec<String>>,
    /// Initially open items when uncontrolled.
    #[prop(optional)]
    default_value: Vec<String>,
    /// Receives the full next list of open item values.
    #[prop(optional)]
    on_value_change: Option<Callback<Vec<String>>>,
    /// Whether one or several items may be open at once.
    #[prop(optional)]
    mode: AccordionMode,
    /// Layout-only class appended to the root class list.
    #[prop(optional)]
    layout_class: Option<&'static str>,
    children: F,
) -> impl IntoView
where
    F: Fn(AccordionHandle) -> IV + 'static,
    IV: IntoView,
{
    let handle = AccordionHandle::new(value, default_value, on_value_change, mode);
    view! {
        <div
            class=merge_layout_class("ui-accordion", layout_class)
            data-ui-primitive="true"
            data-ui-kind="accordion"
            data-ui-variant=mode.token()
        >
            {children(handle)}
        </div>
    }
}

#[component]
/// Collapsible accordion section.
pub fn AccordionItem(
    handle: AccordionHandle,
    /// Item identity within the accordion.
    #[prop(into)]
    value: String,
    /// Header trigger text.
    #[prop(into)]
    title: String,
    /// Disables the control.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    let item = store_value(value.clone());
    let open = Signal::derive(move || item.with_value(|item| handle.is_open(item)));
    let trigger_id = format!("accordion-{value}-trigger");
    let panel_id = format!("accordion-{value}-panel");

    view! {
        <section
            class="ui-accordion-item"
            data-ui-primitive="true"
            data-ui-kind="accordion-item"
            data-ui-state=move || open_token(open.get())
            data-ui-disabled=move || bool_token(disabled.get())
        >
            <h3 data-ui-slot="heading">
                <button
                    type="button"
                    id=trigger_id.clone()
                    data-ui-slot="trigger"
                    aria-controls=panel_id.clone()
                    aria-expanded=move || bool_token(open.get())
                    disabled=move || disabled.get()
                    on:click=move |_| item.with_value(|item| handle.toggle(item))
                >
                    <span data-ui-slot="title">{title}</span>
                    <span data-ui-slot="indicator" aria-hidden="true">
                        {move || if open.get() { "−" } else { "+" }}
                    </span>
                </button>
            </h3>
            <Show when=move || open.get() fallback=|| ()>
                <div
                    id=panel_id.clone()
                    role="region"
                    aria-labelledby=trigger_id.clone()
                    data-ui-slot="content"
                >
                    {children()}
                </div>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn single_collapsible_accordion_replaces_then_closes() {
        let _ = create_runtime();
        let handle = AccordionHandle::new(
            MaybeProp::default(),
            vec!["shipping".to_string()],
            None,
            AccordionMode::default(),
        );

        handle.toggle("returns");
        assert_eq!(handle.open_items(), vec!["returns".to_string()]);
        handle.toggle("returns");
        assert!(handle.open_items().is_empty());
    }

    #[test]
    fn multiple_accordion_keeps_several_open() {
        let _ = create_runtime();
        let handle =
            AccordionHandle::new(MaybeProp::default(), Vec::new(), None, AccordionMode::Multiple);
        handle.toggle("a");
        handle.toggle("b");
        assert!(handle.is_open("a"));
        assert!(handle.is_open("b"));
        handle.toggle("a");
        assert_eq!(handle.open_items(), vec!["b".to_string()]);
    }

    #[test]
    fn non_collapsible_single_item_stays_open() {
        let _ = create_runtime();
        let handle = AccordionHandle::new(
            MaybeProp::default(),
            vec!["faq".to_string()],
            None,
            AccordionMode::Single { collapsible: false },
        );
        handle.toggle("faq");
        assert!(handle.is_open("faq"));
    }
}
