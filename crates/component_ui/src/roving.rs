//! Arrow-key focus movement across a group of buttons.

use leptos::*;

/// Value the focus moves to from `current` for `key`, wrapping at both ends.
///
/// Horizontal and vertical arrows both move; `Home` and `End` jump to the ends. Other keys,
/// or an empty group, yield `None`.
pub(crate) fn roving_target<'a>(values: &'a [String], current: &str, key: &str) -> Option<&'a str> {
    let last = values.len().checked_sub(1)?;
    let position = values.iter().position(|value| value == current).unwrap_or(0);
    let next = match key {
        "ArrowRight" | "ArrowDown" => {
            if position == last {
                0
            } else {
                position + 1
            }
        }
        "ArrowLeft" | "ArrowUp" => {
            if position == 0 {
                last
            } else {
                position - 1
            }
        }
        "Home" => 0,
        "End" => last,
        _ => return None,
    };
    values.get(next).map(String::as_str)
}

#[derive(Clone, Copy)]
/// Registered buttons of one roving group, in render order.
pub(crate) struct RovingGroup {
    items: StoredValue<Vec<(String, NodeRef<html::Button>)>>,
}

impl RovingGroup {
    pub(crate) fn new() -> Self {
        Self {
            items: store_value(Vec::new()),
        }
    }

    /// Adds a button; the registration is dropped when the current owner is cleaned up.
    pub(crate) fn register(&self, value: String, node_ref: NodeRef<html::Button>) {
        let items = self.items;
        let removed = value.clone();
        items.update_value(|items| items.push((value, node_ref)));
        on_cleanup(move || {
            items.update_value(|items| items.retain(|(value, _)| *value != removed));
        });
    }

    /// Target for a key press on the button holding `current`.
    pub(crate) fn target(&self, current: &str, key: &str) -> Option<String> {
        self.items.with_value(|items| {
            let values: Vec<String> = items.iter().map(|(value, _)| value.clone()).collect();
            roving_target(&values, current, key).map(str::to_string)
        })
    }

    /// Moves keyboard focus to the button holding `value`.
    pub(crate) fn focus(&self, value: &str) {
        let node = self.items.with_value(|items| {
            items
                .iter()
                .find(|(candidate, _)| candidate == value)
                .map(|(_, node_ref)| *node_ref)
        });
        if let Some(button) = node.and_then(|node_ref| node_ref.get_untracked()) {
            let _ = button.focus();
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn values() -> Vec<String> {
        ["account", "password", "billing"]
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn arrows_wrap_around_the_group() {
        let values = values();
        assert_eq!(roving_target(&values, "billing", "ArrowRight"), Some("account"));
        assert_eq!(roving_target(&values, "account", "ArrowLeft"), Some("billing"));
        assert_eq!(roving_target(&values, "account", "ArrowDown"), Some("password"));
    }

    #[test]
    fn home_end_and_other_keys() {
        let values = values();
        assert_eq!(roving_target(&values, "password", "Home"), Some("account"));
        assert_eq!(roving_target(&values, "password", "End"), Some("billing"));
        assert_eq!(roving_target(&values, "password", "Enter"), None);
        assert_eq!(roving_target(&[], "x", "ArrowRight"), None);
    }
}
