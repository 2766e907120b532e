//! Design tokens shared by the component library and consuming applications.
//!
//! Tokens are authored in `tokens.toml`, validated by the build script, and embedded as JSON.
//! Values are opaque CSS strings; this crate does not interpret colors or lengths beyond the
//! build-time shape checks.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::fmt::Write as _;
use std::sync::OnceLock;

use serde::Deserialize;
use thiserror::Error;

include!(concat!(env!("OUT_DIR"), "/tokens_generated.rs"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Token families exposed by the catalog.
pub enum TokenGroup {
    /// Palette colors.
    Color,
    /// Spacing scale.
    Spacing,
    /// Corner radii.
    Radius,
    /// Typography scale.
    Typography,
}

impl TokenGroup {
    /// CSS custom-property segment for the group.
    pub fn token(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Spacing => "space",
            Self::Radius => "radius",
            Self::Typography => "text",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Token lookup errors.
pub enum TokenError {
    /// No token with the requested name exists in the group.
    #[error("unknown {group:?} token `{name}`")]
    Unknown {
        /// Group that was searched.
        group: TokenGroup,
        /// Requested token name.
        name: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// A named CSS value.
pub struct NamedToken {
    /// Token name, unique within its group.
    pub name: String,
    /// Opaque CSS value.
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// One step of the typography scale.
pub struct TypeScale {
    /// Scale step name.
    pub name: String,
    /// CSS `font-size`.
    pub font_size: String,
    /// CSS `line-height`.
    pub line_height: String,
    /// CSS `font-weight`.
    pub font_weight: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Parsed token catalog.
pub struct TokenCatalog {
    /// Catalog schema version.
    pub schema_version: u32,
    /// Custom-property prefix.
    pub prefix: String,
    /// Palette colors.
    pub colors: Vec<NamedToken>,
    /// Spacing scale.
    pub spacing: Vec<NamedToken>,
    /// Corner radii.
    pub radii: Vec<NamedToken>,
    /// Typography scale.
    pub typography: Vec<TypeScale>,
}

/// Returns the generated token catalog JSON payload.
pub fn tokens_json() -> &'static str {
    TOKENS_JSON
}

/// Returns the token catalog, parsed once.
pub fn catalog() -> &'static TokenCatalog {
    static CATALOG: OnceLock<TokenCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        serde_json::from_str(TOKENS_JSON).expect("generated design token catalog should parse")
    })
}

fn find<'a>(
    tokens: &'a [NamedToken],
    group: TokenGroup,
    name: &str,
) -> Result<&'a str, TokenError> {
    tokens
        .iter()
        .find(|token| token.name == name)
        .map(|token| token.value.as_str())
        .ok_or_else(|| TokenError::Unknown {
            group,
            name: name.to_string(),
        })
}

/// Looks up a palette color.
///
/// # Errors
///
/// Returns [`TokenError::Unknown`] when the palette has no such color.
pub fn color(name: &str) -> Result<&'static str, TokenError> {
    find(&catalog().colors, TokenGroup::Color, name)
}

/// Looks up a spacing step.
///
/// # Errors
///
/// Returns [`TokenError::Unknown`] when the scale has no such step.
pub fn spacing(name: &str) -> Result<&'static str, TokenError> {
    find(&catalog().spacing, TokenGroup::Spacing, name)
}

/// Looks up a corner radius.
///
/// # Errors
///
/// Returns [`TokenError::Unknown`] when no radius has that name.
pub fn radius(name: &str) -> Result<&'static str, TokenError> {
    find(&catalog().radii, TokenGroup::Radius, name)
}

/// Looks up a typography scale step.
///
/// # Errors
///
/// Returns [`TokenError::Unknown`] when the scale has no such step.
pub fn typography(name: &str) -> Result<&'static TypeScale, TokenError> {
    catalog()
        .typography
        .iter()
        .find(|scale| scale.name == name)
        .ok_or_else(|| TokenError::Unknown {
            group: TokenGroup::Typography,
            name: name.to_string(),
        })
}

/// Returns the custom-property name for a token, e.g. `--ds-color-accent`.
pub fn custom_property(group: TokenGroup, name: &str) -> String {
    format!("--{}-{}-{}", catalog().prefix, group.token(), name)
}

/// Renders every token as CSS custom-property declarations, one per line.
///
/// Typography steps expand into `-size`, `-leading` and `-weight` properties.
pub fn css_custom_properties() -> String {
    let catalog = catalog();
    let mut css = String::new();
    let groups = [
        (TokenGroup::Color, &catalog.colors),
        (TokenGroup::Spacing, &catalog.spacing),
        (TokenGroup::Radius, &catalog.radii),
    ];
    for (group, tokens) in groups {
        for token in tokens {
            let _ = writeln!(
                css,
                "{}: {};",
                custom_property(group, &token.name),
                token.value
            );
        }
    }
    for scale in &catalog.typography {
        let base = custom_property(TokenGroup::Typography, &scale.name);
        let _ = writeln!(css, "{base}-size: {};", scale.font_size);
        let _ = writeln!(css, "{base}-leading: {};", scale.line_height);
        let _ = writeln!(css, "{base}-weight: {};", scale.font_weight);
    }
    css
}
