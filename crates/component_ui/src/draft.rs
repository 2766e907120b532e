//! Editable text over a parsed value.

use component_state::ParseError;
use leptos::logging::debug_warn;
use leptos::*;

use crate::controlled::Controlled;

type Parser<T> = Box<dyn Fn(&str) -> Result<T, ParseError>>;
type Formatter<T> = Box<dyn Fn(&T) -> String>;

/// Text a user is typing plus the value it commits to.
///
/// Each keystroke that parses commits the value but leaves the text alone, so partial input
/// such as `12.` survives. The text is rewritten from the value on blur, and whenever the value
/// changes to something the current text does not already spell.
pub(crate) struct TextDraft<T: 'static> {
    label: &'static str,
    value: Controlled<Option<T>>,
    text: RwSignal<String>,
    invalid: RwSignal<bool>,
    parse: StoredValue<Parser<T>>,
    format: StoredValue<Formatter<T>>,
}

impl<T: 'static> Clone for TextDraft<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for TextDraft<T> {}

impl<T: Clone + PartialEq + 'static> TextDraft<T> {
    pub(crate) fn new(
        label: &'static str,
        value: Controlled<Option<T>>,
        parse: impl Fn(&str) -> Result<T, ParseError> + 'static,
        format: impl Fn(&T) -> String + 'static,
    ) -> Self {
        let draft = Self {
            label,
            value,
            text: create_rw_signal(String::new()),
            invalid: create_rw_signal(false),
            parse: store_value(Box::new(parse) as Parser<T>),
            format: store_value(Box::new(format) as Formatter<T>),
        };
        draft.text.set(draft.formatted(&value.get_untracked()));
        create_effect(move |_| {
            let current = value.get();
            if !draft.spells(&current) {
                draft.invalid.set(false);
                draft.text.set(draft.formatted(&current));
            }
        });
        draft
    }

    /// Current text.
    pub(crate) fn text(&self) -> Signal<String> {
        self.text.into()
    }

    /// Whether the current text fails to parse.
    pub(crate) fn invalid(&self) -> Signal<bool> {
        self.invalid.into()
    }

    /// Formats `value`, empty for `None`.
    pub(crate) fn formatted(&self, value: &Option<T>) -> String {
        value
            .as_ref()
            .map(|value| self.format.with_value(|format| format(value)))
            .unwrap_or_default()
    }

    /// Applies typed text. Empty text commits `None`; text that does not parse keeps the last
    /// committed value and marks the draft invalid.
    pub(crate) fn input(&self, text: String) -> Result<Option<T>, ParseError> {
        let parsed = self.parse.with_value(|parse| parse(&text));
        self.text.set(text);
        let committed = match parsed {
            Ok(value) => Some(value),
            Err(ParseError::Empty) => None,
            Err(err) => {
                debug_warn!("{}: {err}", self.label);
                self.invalid.set(true);
                return Err(err);
            }
        };
        self.invalid.set(false);
        self.value.set(committed.clone());
        Ok(committed)
    }

    /// Rewrites the text from the committed value.
    pub(crate) fn blur(&self) {
        self.invalid.set(false);
        self.text.set(self.formatted(&self.value.get_untracked()));
    }

    fn spells(&self, value: &Option<T>) -> bool {
        self.text.with_untracked(|text| {
            match self.parse.with_value(|parse| parse(text)) {
                Ok(parsed) => value.as_ref() == Some(&parsed),
                Err(ParseError::Empty) => value.is_none(),
                Err(_) => false,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use component_state::{format_amount, format_date, parse_amount, parse_date};
    use pretty_assertions::assert_eq;

    use super::*;

    fn amount_draft(value: Controlled<Option<f64>>) -> TextDraft<f64> {
        TextDraft::new(
            "amount",
            value,
            |text| parse_amount(text, "$"),
            |amount| format_amount(*amount, 2, "$"),
        )
    }

    #[test]
    fn typing_keeps_partial_text_until_blur() {
        let _ = create_runtime();
        let value = Controlled::from_prop("amount", MaybeProp::default(), None, None);
        let draft = amount_draft(value);

        assert_eq!(draft.input("1".to_string()), Ok(Some(1.0)));
        assert_eq!(draft.text().get_untracked(), "1");
        draft.input("12.".to_string()).ok();
        assert_eq!(draft.text().get_untracked(), "12.");
        draft.input("12.5".to_string()).ok();
        assert_eq!(draft.text().get_untracked(), "12.5");
        assert_eq!(value.get_untracked(), Some(12.5));

        draft.blur();
        assert_eq!(draft.text().get_untracked(), "$12.50");
    }

    #[test]
    fn unparseable_text_keeps_last_value() {
        let _ = create_runtime();
        let value = Controlled::from_prop("amount", MaybeProp::default(), Some(4.0), None);
        let draft = amount_draft(value);
        assert_eq!(draft.text().get_untracked(), "$4.00");

        assert!(draft.input("4x".to_string()).is_err());
        assert_eq!(draft.text().get_untracked(), "4x");
        assert!(draft.invalid().get_untracked());
        assert_eq!(value.get_untracked(), Some(4.0));

        draft.blur();
        assert!(!draft.invalid().get_untracked());
        assert_eq!(draft.text().get_untracked(), "$4.00");
    }

    #[test]
    fn clearing_the_text_commits_none() {
        let _ = create_runtime();
        let value = Controlled::from_prop("amount", MaybeProp::default(), Some(4.0), None);
        let draft = amount_draft(value);

        assert_eq!(draft.input(String::new()), Ok(None));
        assert_eq!(value.get_untracked(), None);
        assert_eq!(draft.text().get_untracked(), "");
    }

    #[test]
    fn external_change_rewrites_the_text() {
        let _ = create_runtime();
        let external = create_rw_signal(Some(1.0));
        let value = Controlled::new(
            "amount",
            Signal::derive(move || Some(external.get())),
            None,
            None,
        );
        let draft = amount_draft(value);
        draft.input("1".to_string()).ok();
        assert_eq!(draft.text().get_untracked(), "1");

        external.set(Some(3.0));
        assert_eq!(draft.text().get_untracked(), "$3.00");

        draft.input("3x".to_string()).ok();
        external.set(None);
        assert_eq!(draft.text().get_untracked(), "");
        assert!(!draft.invalid().get_untracked());
    }

    #[test]
    fn date_text_is_not_padded_while_typing() {
        let _ = create_runtime();
        let value = Controlled::from_prop("date", MaybeProp::default(), None, None);
        let draft = TextDraft::new(
            "date",
            value,
            |text| parse_date(text, "%Y-%m-%d"),
            |date| format_date(*date, "%Y-%m-%d"),
        );

        draft.input("2024-01-1".to_string()).ok();
        assert_eq!(draft.text().get_untracked(), "2024-01-1");
        assert_eq!(value.get_untracked(), NaiveDate::from_ymd_opt(2024, 1, 1));

        draft.blur();
        assert_eq!(draft.text().get_untracked(), "2024-01-01");
    }
}
