//! ARIA property type table generator
//!
//! Turns the authored attribute list in `data/aria_props.json` into the Rust
//! source of `oxbind-rules/src/aria/generated.rs`.

use std::collections::HashSet;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use oxbind_rules::AriaPropType;
use serde::Deserialize;
use thiserror::Error;

/// The checked-in authored table
const AUTHORED: &str = include_str!("../data/aria_props.json");

/// Where the generated table lives, relative to the workspace root
pub const DEFAULT_OUTPUT: &str = "crates/oxbind-rules/src/aria/generated.rs";

const SOURCE_NOTE: &str = "crates/oxbind-devtools/data/aria_props.json";

/// Errors in the authored table
#[derive(Debug, Error)]
pub enum TableError {
    #[error("Malformed attribute table: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Attribute '{name}' has unknown type '{tag}'")]
    UnknownType { name: String, tag: String },

    #[error("Attribute '{name}' is defined more than once")]
    DuplicateAttribute { name: String },
}

/// Type descriptor of one authored attribute
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AttributeDescriptor {
    #[serde(rename = "type")]
    pub type_tag: String,
    #[serde(default)]
    pub values: Option<Vec<AuthoredValue>>,
    #[serde(default, rename = "allowundefined")]
    pub allow_undefined: bool,
}

/// An entry of a descriptor's `values`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AuthoredValue {
    Boolean(bool),
    Token(String),
}

/// Generator over an ordered attribute list
pub struct AriaTableGenerator {
    attributes: Vec<(String, AttributeDescriptor)>,
}

impl AriaTableGenerator {
    /// Generator over the checked-in authored table
    pub fn from_authored() -> Result<Self, TableError> {
        Self::from_json(AUTHORED)
    }

    /// Parse a JSON array of `[name, descriptor]` pairs
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let attributes = serde_json::from_str(json)?;
        Ok(Self { attributes })
    }

    /// Render the table as Rust source, one entry per attribute in input order
    pub fn generate(&self) -> Result<String, TableError> {
        let mut seen = HashSet::new();
        let mut out = String::new();
        out.push_str("// @generated by `oxbind-devtools aria-table`. Do not edit by hand.\n");
        let _ = writeln!(out, "// Source: {SOURCE_NOTE}");
        out.push('\n');
        out.push_str("use super::{AriaPropType, AriaPropTypeRule};\n");
        out.push('\n');
        out.push_str("#[rustfmt::skip]\n");
        out.push_str("pub(crate) const ARIA_PROP_TYPES: &[(&str, AriaPropTypeRule)] = &[\n");

        for (name, descriptor) in &self.attributes {
            if !seen.insert(name.as_str()) {
                return Err(TableError::DuplicateAttribute { name: name.clone() });
            }
            let prop_type = AriaPropType::from_tag(&descriptor.type_tag).ok_or_else(|| {
                TableError::UnknownType {
                    name: name.clone(),
                    tag: descriptor.type_tag.clone(),
                }
            })?;

            let (allowed_values, allow_boolean_values) = match &descriptor.values {
                Some(values) => {
                    let tokens: Vec<String> = values
                        .iter()
                        .filter_map(|value| match value {
                            AuthoredValue::Token(token) => Some(format!("{token:?}")),
                            AuthoredValue::Boolean(_) => None,
                        })
                        .collect();
                    let has_booleans = values
                        .iter()
                        .any(|value| matches!(value, AuthoredValue::Boolean(_)));
                    (format!("Some(&[{}])", tokens.join(", ")), has_booleans)
                }
                None => ("None".to_string(), false),
            };

            let _ = writeln!(
                out,
                "    ({name:?}, AriaPropTypeRule {{ prop_type: AriaPropType::{}, allowed_values: {allowed_values}, allow_undefined: {}, allow_boolean_values: {allow_boolean_values} }}),",
                prop_type.variant_name(),
                descriptor.allow_undefined,
            );
        }

        out.push_str("];\n");
        Ok(out)
    }

    /// Generate and write to `output_path`
    pub fn write(&self, output_path: &Path) -> anyhow::Result<()> {
        tracing::info!("Generating ARIA property type table...");
        let source = self.generate()?;

        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(output_path, source)?;

        println!("✓ Generated ARIA table: {}", output_path.display());
        tracing::info!(attributes = self.attributes.len(), "ARIA table generation completed");
        Ok(())
    }

    /// Whether the file at `path` matches what would be generated
    pub fn is_up_to_date(&self, path: &Path) -> anyhow::Result<bool> {
        let expected = self.generate()?;
        let actual = fs::read_to_string(path)?;
        Ok(actual == expected)
    }
}
