//! Component defaults provided through Leptos context.

use component_state::ComponentDefaults;
use leptos::logging::warn;
use leptos::*;

/// Provides `defaults` to every component rendered below the current owner.
pub fn provide_component_defaults(defaults: ComponentDefaults) {
    provide_context(defaults);
}

/// Parses defaults from JSON and provides them.
pub fn provide_component_defaults_json(raw: &str) {
    provide_component_defaults(defaults_from_json(raw));
}

/// Parses defaults from JSON. Invalid payloads are logged and replaced by
/// [`ComponentDefaults::default`].
pub fn defaults_from_json(raw: &str) -> ComponentDefaults {
    match ComponentDefaults::from_json(raw) {
        Ok(defaults) => defaults,
        Err(err) => {
            warn!("component defaults ignored: {err}");
            ComponentDefaults::default()
        }
    }
}

/// Defaults provided by an ancestor, or the built-in defaults.
pub fn use_component_defaults() -> ComponentDefaults {
    use_context::<ComponentDefaults>().unwrap_or_default()
}

#[component]
/// Scopes component defaults to its children.
pub fn ComponentDefaultsProvider(
    /// Defaults for the subtree.
    defaults: ComponentDefaults,
    children: Children,
) -> impl IntoView {
    provide_component_defaults(defaults);
    children()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_context_falls_back_to_builtin_defaults() {
        let _ = create_runtime();
        assert_eq!(use_component_defaults(), ComponentDefaults::default());
    }

    #[test]
    fn invalid_json_falls_back_to_builtin_defaults() {
        assert_eq!(defaults_from_json(r#"{ "toast_limit": 0 }"#).toast_limit, 3);
        assert_eq!(defaults_from_json(r#"{ "toast_limit": 5 }"#).toast_limit, 5);
    }
}
