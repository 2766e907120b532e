//! Tabs with roving keyboard focus between triggers.

use leptos::ev::KeyboardEvent;
use leptos::*;
use style_variants::{bool_token, merge_layout_class, ButtonVariant};

use crate::controlled::Controlled;
use crate::primitives::Button;
use crate::roving::RovingGroup;

#[derive(Clone, Copy)]
/// Active-tab state shared by [`Tabs`], [`TabTrigger`], and [`TabPanel`].
pub struct TabsHandle {
    active: Controlled<String>,
    triggers: RovingGroup,
    id: StoredValue<String>,
}

impl TabsHandle {
    /// Creates the state. A `value` makes the active tab controlled. `id` prefixes element ids.
    pub fn new(
        id: impl Into<String>,
        value: MaybeProp<String>,
        default_value: String,
        on_value_change: Option<Callback<String>>,
    ) -> Self {
        Self {
            active: Controlled::from_prop("Tabs value", value, default_value, on_value_change),
            triggers: RovingGroup::new(),
            id: store_value(id.into()),
        }
    }

    /// Active tab value. Tracked.
    pub fn active(&self) -> String {
        self.active.get()
    }

    /// Whether `value` is the active tab. Tracked.
    pub fn is_active(&self, value: &str) -> bool {
        self.active.get() == value
    }

    /// Requests `value` as the active tab.
    pub fn activate(&self, value: impl Into<String>) {
        self.active.set(value.into());
    }

    fn trigger_id(&self, value: &str) -> String {
        self.id.with_value(|id| format!("{id}-trigger-{value}"))
    }

    fn panel_id(&self, value: &str) -> String {
        self.id.with_value(|id| format!("{id}-panel-{value}"))
    }
}

#[component]
/// Tabs container. Children receive the [`TabsHandle`] through `let:`.
pub fn Tabs<F, IV>(
    /// Prefix for trigger and panel element ids.
    #[prop(default = "tabs".to_string(), into)]
    id: String,
    /// Controlled active tab.
    #[prop(optional, into)]
    value: MaybeProp<String>,
    /// Initially active tab when uncontrolled.
    #[prop(optional, into)]
    default_value: String,
    /// Receives the value of every activated trigger.
    #[prop(optional)]
    on_value_change: Option<Callback<String>>,
    /// Layout-only class appended to the root class list.
    #[prop(optional)]
    layout_class: Option<&'static str>,
    children: F,
) -> impl IntoView
where
    F: Fn(TabsHandle) -> IV + 'static,
    IV: IntoView,
{
    let handle = TabsHandle::new(id, value, default_value, on_value_change);
    view! {
        <div
            class=merge_layout_class("ui-tabs", layout_class)
            data-ui-primitive="true"
            data-ui-kind="tabs"
        >
            {children(handle)}
        </div>
    }
}

#[component]
/// Row of tab triggers.
pub fn TabList(
    /// Accessible label of the tab list.
    #[prop(optional, into)]
    aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-tab-list"
            role="tablist"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="tab-list"
        >
            {children()}
        </div>
    }
}

#[component]
/// Tab trigger. Arrow keys, `Home`, and `End` move focus and activation across triggers.
pub fn TabTrigger(
    handle: TabsHandle,
    /// Panel this trigger activates.
    #[prop(into)]
    value: String,
    /// Disables the control.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    let node_ref = create_node_ref::<html::Button>();
    handle.triggers.register(value.clone(), node_ref);
    let item = store_value(value.clone());
    let active = Signal::derive(move || item.with_value(|item| handle.is_active(item)));

    let on_keydown = Callback::new(move |ev: KeyboardEvent| {
        let target = item.with_value(|item| handle.triggers.target(item, &ev.key()));
        if let Some(target) = target {
            ev.prevent_default();
            handle.activate(target.clone());
            handle.triggers.focus(&target);
        }
    });

    view! {
        <Button
            variant=ButtonVariant::Quiet
            layout_class="ui-tab-trigger"
            id=handle.trigger_id(&value)
            role="tab"
            node_ref=node_ref
            aria_controls=handle.panel_id(&value)
            aria_selected=active
            tabindex=Signal::derive(move || if active.get() { 0 } else { -1 })
            selected=active
            disabled=disabled
            ui_slot="tab"
            on_click=Callback::new(move |_| item.with_value(|item| handle.activate(item.clone())))
            on_keydown=on_keydown
        >
            {children()}
        </Button>
    }
}

#[component]
/// Content of one tab, rendered only while that tab is active.
pub fn TabPanel(handle: TabsHandle, #[prop(into)] value: String, children: ChildrenFn) -> impl IntoView {
    let item = store_value(value.clone());
    let active = Signal::derive(move || item.with_value(|item| handle.is_active(item)));
    let panel_id = handle.panel_id(&value);
    let trigger_id = handle.trigger_id(&value);

    view! {
        <div
            class="ui-tab-panel"
            id=panel_id
            role="tabpanel"
            aria-labelledby=trigger_id
            tabindex="0"
            hidden=move || !active.get()
            data-ui-primitive="true"
            data-ui-kind="tab-panel"
            data-ui-active=move || bool_token(active.get())
        >
            <Show when=move || active.get() fallback=|| ()>
                {children()}
            </Show>
        </div>
    }
}
