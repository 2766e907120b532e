use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct NamedValue {
    name: String,
    value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TypeScale {
    name: String,
    font_size: String,
    line_height: String,
    font_weight: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TokenFile {
    schema_version: u32,
    prefix: String,
    colors: Vec<NamedValue>,
    spacing: Vec<NamedValue>,
    radii: Vec<NamedValue>,
    typography: Vec<TypeScale>,
}

fn ensure_unique<'a>(group: &str, names: impl Iterator<Item = &'a str>) {
    let mut seen = BTreeSet::new();
    for name in names {
        if name.is_empty() {
            panic!("empty token name in `{group}`");
        }
        if !seen.insert(name) {
            panic!("duplicate token `{name}` in `{group}`");
        }
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("tokens.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let tokens: TokenFile = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if tokens.schema_version != 1 {
        panic!(
            "token schema mismatch in {}: expected 1 found {}",
            path.display(),
            tokens.schema_version
        );
    }
    ensure_unique("colors", tokens.colors.iter().map(|t| t.name.as_str()));
    ensure_unique("spacing", tokens.spacing.iter().map(|t| t.name.as_str()));
    ensure_unique("radii", tokens.radii.iter().map(|t| t.name.as_str()));
    ensure_unique("typography", tokens.typography.iter().map(|t| t.name.as_str()));
    for color in &tokens.colors {
        let hex = color.value.trim_start_matches('#');
        if !color.value.starts_with('#')
            || !matches!(hex.len(), 3 | 6 | 8)
            || !hex.chars().all(|c| c.is_ascii_hexdigit())
        {
            panic!("color `{}` is not a hex value: {}", color.name, color.value);
        }
    }

    let json = serde_json::to_string_pretty(&tokens).expect("serialize design token catalog");
    let generated = format!(
        "/// Build-time generated design token catalog JSON.\n\
pub const TOKENS_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("tokens_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
