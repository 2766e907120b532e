//! Design-token stylesheet.

use design_tokens::css_custom_properties;
use leptos::*;

/// `:root` rule declaring every design token as a CSS custom property.
pub fn token_stylesheet() -> String {
    format!(":root {{\n{}}}\n", css_custom_properties())
}

#[component]
/// Emits the design tokens as a `<style>` element. Render once near the app root.
pub fn TokenStylesheet() -> impl IntoView {
    view! { <style data-ui-kind="design-tokens">{token_stylesheet()}</style> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_wraps_declarations_in_root_rule() {
        let css = token_stylesheet();
        assert!(css.starts_with(":root {\n--"));
        assert!(css.trim_end().ends_with('}'));
    }
}
