//! Date text input with a month calendar popup.

use chrono::{NaiveDate, Utc};
use component_state::{format_date, parse_date, shift_month, MonthGrid, WEEKDAY_LABELS};
use leptos::*;
use style_variants::{bool_token, merge_layout_class, open_token, ButtonSize, ButtonVariant};

use crate::config::use_component_defaults;
use crate::controlled::Controlled;
use crate::dialog::close_on_escape;
use crate::draft::TextDraft;
use crate::primitives::{Button, TextField};

#[component]
/// Date field. Typed text is parsed with the configured `chrono` format; text that does not
/// parse leaves the last valid date in place. The calendar popup's visibility may be
/// controlled separately from the date.
pub fn DateInput(
    /// Controlled date. `Some` makes the date controlled; the inner `None` means no date.
    #[prop(optional, into)]
    value: Option<Signal<Option<NaiveDate>>>,
    /// Initial date when uncontrolled.
    #[prop(optional)]
    default_value: Option<NaiveDate>,
    /// Receives every committed date, `None` when the text is cleared.
    #[prop(optional)]
    on_value_change: Option<Callback<Option<NaiveDate>>>,
    /// Controlled calendar visibility.
    #[prop(optional, into)]
    open: MaybeProp<bool>,
    /// Receives every requested calendar visibility.
    #[prop(optional)]
    on_open_change: Option<Callback<bool>>,
    /// Overrides the configured date format.
    #[prop(optional, into)]
    format: Option<String>,
    /// Accessible label. Defaults to "Date".
    #[prop(optional, into)]
    aria_label: Option<String>,
    /// Layout-only class appended to the root class list.
    #[prop(optional)]
    layout_class: Option<&'static str>,
) -> impl IntoView {
    let format = store_value(format.unwrap_or_else(|| use_component_defaults().date_format));
    let external = match value {
        Some(value) => Signal::derive(move || Some(value.get())),
        None => Signal::derive(|| None),
    };
    let date = Controlled::new("DateInput value", external, default_value, on_value_change);
    let open = Controlled::from_prop("DateInput open", open, false, on_open_change);
    let is_open = open.signal();
    close_on_escape(is_open, move || open.set(false));

    let draft = TextDraft::new(
        "DateInput",
        date,
        move |text| format.with_value(|format| parse_date(text, format)),
        move |date| format.with_value(|format| format_date(*date, format)),
    );

    let month = create_rw_signal(
        date.get_untracked()
            .unwrap_or_else(|| Utc::now().date_naive()),
    );

    let on_input = Callback::new(move |ev| {
        if let Ok(Some(parsed)) = draft.input(event_target_value(&ev)) {
            month.set(parsed);
        }
    });
    let on_blur = Callback::new(move |_| draft.blur());

    let pick = move |day: NaiveDate| {
        date.set(Some(day));
        open.set(false);
    };

    let grid = move || {
        let selected = date.get();
        let grid = MonthGrid::for_date(month.get());
        let weeks = grid
            .weeks
            .iter()
            .map(|week| {
                let cells = week
                    .iter()
                    .map(|day| match day {
                        Some(day) => {
                            let day = *day;
                            let is_selected = selected == Some(day);
                            view! {
                                <td>
                                    <button
                                        type="button"
                                        data-ui-slot="day"
                                        aria-pressed=bool_token(is_selected)
                                        data-ui-selected=bool_token(is_selected)
                                        on:click=move |_| pick(day)
                                    >
                                        {day.format("%-d").to_string()}
                                    </button>
                                </td>
                            }
                            .into_view()
                        }
                        None => view! { <td data-ui-slot="blank"></td> }.into_view(),
                    })
                    .collect_view();
                view! { <tr>{cells}</tr> }
            })
            .collect_view();
        view! {
            <div data-ui-slot="calendar-header">
                <Button
                    variant=ButtonVariant::Quiet
                    size=ButtonSize::Icon
                    aria_label="Previous month"
                    on_click=Callback::new(move |_| month.update(|month| *month = shift_month(*month, -1)))
                >
                    "‹"
                </Button>
                <span data-ui-slot="month">{grid.title()}</span>
                <Button
                    variant=ButtonVariant::Quiet
                    size=ButtonSize::Icon
                    aria_label="Next month"
                    on_click=Callback::new(move |_| month.update(|month| *month = shift_month(*month, 1)))
                >
                    "›"
                </Button>
            </div>
            <table role="grid" data-ui-slot="month-grid">
                <thead>
                    <tr>
                        {WEEKDAY_LABELS
                            .iter()
                            .map(|label| view! { <th scope="col">{*label}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>{weeks}</tbody>
            </table>
        }
    };

    view! {
        <div
            class=merge_layout_class("ui-date-input", layout_class)
            data-ui-primitive="true"
            data-ui-kind="date-input"
            data-ui-state=move || open_token(is_open.get())
        >
            <TextField
                aria_label=aria_label.unwrap_or_else(|| "Date".to_string())
                placeholder=format.get_value()
                ui_slot="date-text"
                aria_invalid=draft.invalid()
                value=draft.text()
                on_input=on_input
                on_blur=on_blur
            />
            <Button
                variant=ButtonVariant::Quiet
                size=ButtonSize::Icon
                ui_slot="calendar-trigger"
                aria_label="Choose date"
                aria_expanded=is_open
                aria_haspopup="dialog"
                on_click=Callback::new(move |_| open.update(|open| !open))
            >
                "📅"
            </Button>
            <Show when=move || is_open.get() fallback=|| ()>
                <div role="dialog" aria-label="Calendar" data-ui-slot="calendar">
                    {grid}
                </div>
            </Show>
        </div>
    }
}
