//! Component gallery for the design system.
//!
//! Renders every stateful component in both uncontrolled and controlled form so behavior can be
//! reviewed against one shared state snapshot. The controlled examples write into
//! [`GalleryState`], which round-trips through JSON the same way a host would persist it.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::rc::Rc;

use chrono::NaiveDate;
use component_state::format_amount;
use component_ui::prelude::*;
use component_ui::{provide_component_defaults_json, RowRenderer};
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

const GALLERY_DEFAULTS: &str = r#"{
    "page_size_options": [5, 10, 20],
    "default_page_size": 5,
    "toast_limit": 4
}"#;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// State owned by the gallery for its controlled examples.
pub struct GalleryState {
    /// Sort of the controlled orders table.
    pub sort: SortState,
    /// Page of the controlled orders table.
    pub page: usize,
    /// Selected plan radio.
    pub plan: String,
    /// Controlled date input value.
    pub due_date: Option<NaiveDate>,
    /// Controlled amount input value.
    pub budget: Option<f64>,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            sort: SortState::Unsorted,
            page: 1,
            plan: "team".to_string(),
            due_date: None,
            budget: Some(1_250.0),
        }
    }
}

fn order_rows() -> Vec<Value> {
    vec![
        json!({ "id": 1, "customer": "Ada Lovelace", "status": "paid", "amount": 120.5, "placed": "2024-03-02", "note": "Leave at the front desk." }),
        json!({ "id": 2, "customer": "Grace Hopper", "status": "pending", "amount": 89.0, "placed": "2024-03-05" }),
        json!({ "id": 3, "customer": "Alan Turing", "status": "refunded", "amount": null, "placed": "2024-02-27" }),
        json!({ "id": 4, "customer": "katherine Johnson", "status": "paid", "amount": 1_420.75, "placed": "2024-03-09", "note": "Gift wrap." }),
        json!({ "id": 5, "customer": "Edsger Dijkstra", "status": "paid", "amount": 64.2, "placed": null }),
        json!({ "id": 6, "customer": "Barbara Liskov", "status": "pending", "amount": 310.0, "placed": "2024-03-11" }),
        json!({ "id": 7, "customer": "Donald Knuth", "status": "paid", "amount": 42.0, "placed": "2024-01-30" }),
        json!({ "id": 8, "customer": "Frances Allen", "status": "cancelled", "amount": 0.0, "placed": "2024-03-01" }),
        json!({ "id": 9, "customer": "John Backus", "status": "paid", "amount": 530.99, "placed": "2024-02-14" }),
        json!({ "id": 10, "customer": "Radia Perlman", "status": "pending", "amount": 77.7, "placed": "2024-03-12" }),
        json!({ "id": 11, "customer": "Ken Thompson", "status": "paid", "amount": 19.99, "placed": "2024-02-02" }),
        json!({ "id": 12, "customer": "Margaret Hamilton", "status": "paid", "amount": 860.0, "placed": "2024-03-08", "note": "Call before delivery." }),
    ]
}

fn order_key(row: &Value) -> u64 {
    row["id"].as_u64().unwrap_or_default()
}

fn order_columns() -> Vec<Column<Value>> {
    vec![
        Column::new("id", "#")
            .sortable()
            .header_align(Align::Right)
            .cell_align(Align::Right)
            .width("4rem"),
        Column::new("customer", "Customer").sortable(),
        Column::new("status", "Status").render(|row: &Value, _| {
            let status = row["status"].as_str().unwrap_or("unknown").to_string();
            view! { <Badge>{status}</Badge> }
        }),
        Column::new("amount", "Amount")
            .sortable()
            .header_align(Align::Right)
            .cell_align(Align::Right)
            .render(|row: &Value, _| {
                row["amount"]
                    .as_f64()
                    .map(|amount| format_amount(amount, 2, "$"))
                    .unwrap_or_default()
            }),
        Column::new("placed", "Placed").sortable(),
    ]
}

fn order_detail() -> RowRenderer<Value> {
    Rc::new(|row: &Value| {
        let customer = row["customer"].as_str().unwrap_or_default().to_string();
        let note = row["note"]
            .as_str()
            .unwrap_or("No delivery note.")
            .to_string();
        view! {
            <Stack gap=LayoutGap::Sm ui_slot="order-detail">
                <Text role=TextRole::Label>{customer}</Text>
                <Text tone=TextTone::Secondary>{note}</Text>
            </Stack>
        }
        .into_view()
    })
}

fn framework_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("leptos", "Leptos"),
        SelectOption::new("yew", "Yew"),
        SelectOption::new("dioxus", "Dioxus"),
        SelectOption::new("sycamore", "Sycamore"),
    ]
}

fn restore_state(restored_state: Option<Value>) -> GalleryState {
    match restored_state.map(serde_json::from_value::<GalleryState>) {
        Some(Ok(state)) => state,
        Some(Err(err)) => {
            logging::warn!("gallery state ignored: {err}");
            GalleryState::default()
        }
        None => GalleryState::default(),
    }
}

#[component]
/// Gallery page.
pub fn ComponentGalleryApp(
    /// Previously saved [`GalleryState`] payload.
    #[prop(optional)]
    restored_state: Option<Value>,
) -> impl IntoView {
    provide_component_defaults_json(GALLERY_DEFAULTS);
    let toaster = ToasterHandle::from_defaults();
    let state = create_rw_signal(restore_state(restored_state));
    let rows = order_rows();
    let uncontrolled_rows = rows.clone();
    let loading = create_rw_signal(false);

    let snapshot = create_memo(move |_| {
        state.with(|state| match serde_json::to_string_pretty(state) {
            Ok(serialized) => serialized,
            Err(err) => {
                logging::warn!("gallery state serialize failed: {err}");
                String::new()
            }
        })
    });

    let email = create_rw_signal(String::new());
    let email_touched = create_rw_signal(false);
    let email_binding = FieldBinding::from_signal(email)
        .with_on_blur(Callback::new(move |_| email_touched.set(true)));
    let email_error = Signal::derive(move || {
        (email_touched.get() && !email.with(|email| email.contains('@')))
            .then(|| "Enter a valid email address.".to_string())
    });

    let notify = move |title: String| {
        toaster.push(ToastRequest::new(title));
    };

    view! {
        <TokenStylesheet />
        <Surface variant=SurfaceVariant::Muted elevation=Elevation::Flat>
            <Stack gap=LayoutGap::Lg>
                <Panel title="Data table" description="Uncontrolled: sorting, pagination and expansion are internal.">
                    <Stack gap=LayoutGap::Md>
                        <Toggle
                            aria_label="Simulate loading"
                            on_pressed_change=Callback::new(move |pressed: bool| loading.set(pressed))
                        >
                            "Simulate loading"
                        </Toggle>
                        <DataTable
                            data=uncontrolled_rows
                            columns=order_columns()
                            get_row_key=order_key
                            pagination=true
                            loading=loading
                            render_expanded_row=order_detail()
                            aria_label="Orders"
                            extra_attributes=ExtraAttributes::new().with("data-testid", "orders-table")
                        />
                    </Stack>
                </Panel>

                <Panel title="Controlled table" description="Sort and page live in the gallery state.">
                    <DataTable
                        data=rows
                        columns=order_columns()
                        get_row_key=order_key
                        pagination=true
                        pagination_style=PaginationStyle::Numbered
                        sort_state=Signal::derive(move || Some(state.with(|state| state.sort.clone())))
                        current_page=Signal::derive(move || Some(state.with(|state| state.page)))
                        on_sort_change=Callback::new(move |sort: SortState| {
                            state.update(|state| {
                                state.sort = sort;
                                state.page = 1;
                            });
                        })
                        on_page_change=Callback::new(move |page: usize| state.update(|state| state.page = page))
                        aria_label="Orders (controlled)"
                    />
                </Panel>

                <Panel title="Empty table">
                    <DataTable
                        data={Vec::<Value>::new()}
                        columns=order_columns()
                        get_row_key=order_key
                        empty_message="No orders yet."
                    />
                </Panel>

                <Panel title="Disclosure">
                    <Stack gap=LayoutGap::Md>
                        <Accordion default_value=vec!["shipping".to_string()] let:accordion>
                            <AccordionItem handle=accordion value="shipping" title="Shipping">
                                "Orders ship within two business days."
                            </AccordionItem>
                            <AccordionItem handle=accordion value="returns" title="Returns">
                                "Returns are accepted for thirty days."
                            </AccordionItem>
                            <AccordionItem handle=accordion value="warranty" title="Warranty" disabled=true>
                                "Warranty terms vary by product."
                            </AccordionItem>
                        </Accordion>
                        <Tabs id="gallery-tabs" default_value="account" let:tabs>
                            <TabList aria_label="Account settings">
                                <TabTrigger handle=tabs value="account">"Account"</TabTrigger>
                                <TabTrigger handle=tabs value="password">"Password"</TabTrigger>
                                <TabTrigger handle=tabs value="billing">"Billing"</TabTrigger>
                            </TabList>
                            <TabPanel handle=tabs value="account">"Profile details live here."</TabPanel>
                            <TabPanel handle=tabs value="password">"Change your password here."</TabPanel>
                            <TabPanel handle=tabs value="billing">"Invoices and payment methods."</TabPanel>
                        </Tabs>
                    </Stack>
                </Panel>

                <Panel title="Selection">
                    <Stack gap=LayoutGap::Md>
                        <ToggleGroup
                            mode=SelectionMode::Multiple
                            default_value=vec!["bold".to_string()]
                            aria_label="Text style"
                            let:group
                        >
                            <ToggleGroupItem handle=group value="bold" aria_label="Bold">"B"</ToggleGroupItem>
                            <ToggleGroupItem handle=group value="italic" aria_label="Italic">"I"</ToggleGroupItem>
                            <ToggleGroupItem handle=group value="underline" aria_label="Underline">"U"</ToggleGroupItem>
                        </ToggleGroup>
                        <RadioGroup
                            name="plan"
                            value=Signal::derive(move || Some(state.with(|state| state.plan.clone())))
                            on_value_change=Callback::new(move |plan: String| state.update(|state| state.plan = plan))
                            aria_label="Plan"
                            let:radio
                        >
                            <RadioItem handle=radio value="starter" label="Starter" />
                            <RadioItem handle=radio value="team" label="Team" />
                            <RadioItem handle=radio value="enterprise" label="Enterprise" disabled=true />
                        </RadioGroup>
                        <Combobox
                            options=framework_options()
                            placeholder="Pick a framework…"
                            on_value_change=Callback::new(move |value: String| notify(format!("Framework: {value}")))
                        />
                    </Stack>
                </Panel>

                <Panel title="Overlays">
                    <Cluster gap=LayoutGap::Sm>
                        <Dialog
                            trigger_label="Open dialog"
                            title="Archive project"
                            description="Archived projects become read-only."
                        >
                            <Text>"You can restore it later from settings."</Text>
                        </Dialog>
                        <Sheet trigger_label="Open sheet" side=SheetSide::Right title="Filters">
                            <Text>"Filter controls go here."</Text>
                        </Sheet>
                        <Drawer trigger_label="Open drawer" title="Quick actions">
                            <Text>"Swipe down or press Escape to close."</Text>
                        </Drawer>
                        <Popover trigger_label="Popover">
                            <Text>"Popovers stay open until dismissed."</Text>
                        </Popover>
                        <DropdownMenu
                            trigger_label="Actions"
                            items=vec![
                                SelectOption::new("duplicate", "Duplicate"),
                                SelectOption::new("archive", "Archive"),
                            ]
                            on_select=Callback::new(move |value: String| notify(format!("Action: {value}")))
                        />
                    </Cluster>
                </Panel>

                <Panel title="Inputs">
                    <Stack gap=LayoutGap::Md>
                        <DateInput
                            aria_label="Due date"
                            value=Signal::derive(move || state.with(|state| state.due_date))
                            on_value_change=Callback::new(move |date: Option<NaiveDate>| {
                                state.update(|state| state.due_date = date)
                            })
                        />
                        <AmountInput
                            aria_label="Budget"
                            value=Signal::derive(move || state.with(|state| state.budget))
                            on_value_change=Callback::new(move |budget: Option<f64>| {
                                state.update(|state| state.budget = budget)
                            })
                        />
                        <FormField
                            id="email"
                            label="Email"
                            description="Used for receipts."
                            error=email_error
                            required=true
                        >
                            <BoundTextField
                                binding=email_binding
                                id="email"
                                placeholder="you@example.com"
                                invalid=Signal::derive(move || email_error.with(Option::is_some))
                                input_type="email"
                            />
                        </FormField>
                    </Stack>
                </Panel>

                <Panel title="Notifications">
                    <Cluster gap=LayoutGap::Sm>
                        <Button
                            variant=ButtonVariant::Primary
                            on_click=Callback::new(move |_| {
                                toaster.push(
                                    ToastRequest::new("Changes saved")
                                        .description("Your settings are up to date.")
                                        .tone(ToastTone::Success),
                                );
                            })
                        >
                            "Show toast"
                        </Button>
                        <Button
                            variant=ButtonVariant::Danger
                            on_click=Callback::new(move |_| {
                                toaster.push(
                                    ToastRequest::new("Sync failed")
                                        .tone(ToastTone::Danger)
                                        .duration_ms(0),
                                );
                            })
                        >
                            "Sticky error"
                        </Button>
                        <Button variant=ButtonVariant::Quiet on_click=Callback::new(move |_| toaster.clear())>
                            "Clear"
                        </Button>
                    </Cluster>
                </Panel>

                <Panel title="State snapshot">
                    <pre data-ui-slot="state-snapshot">{snapshot}</pre>
                </Panel>
            </Stack>
        </Surface>
        <Toaster handle=toaster />
    }
}

/// Mounts the gallery on the document body.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <ComponentGalleryApp /> })
}

#[cfg(test)]
mod tests {
    use component_state::check_unique_keys;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn partial_saved_state_keeps_other_defaults() {
        let state = restore_state(Some(json!({ "page": 3, "sort": { "descending": "amount" } })));
        assert_eq!(state.page, 3);
        assert_eq!(state.sort, SortState::Descending("amount".to_string()));
        assert_eq!(state.plan, "team");
    }

    #[test]
    fn malformed_saved_state_is_ignored() {
        assert_eq!(
            restore_state(Some(json!({ "page": "three" }))),
            GalleryState::default()
        );
    }

    #[test]
    fn sample_orders_have_unique_keys() {
        let rows = order_rows();
        assert_eq!(check_unique_keys(&rows, order_key), Ok(()));
        assert_eq!(order_key(&rows[11]), 12);
    }

    #[test]
    fn order_columns_expose_expected_sort_keys() {
        let columns = order_columns();
        let sortable: Vec<&str> = columns
            .iter()
            .filter(|column| column.spec().is_sortable())
            .map(|column| column.key())
            .collect();
        assert_eq!(sortable, vec!["id", "customer", "amount", "placed"]);
    }
}
