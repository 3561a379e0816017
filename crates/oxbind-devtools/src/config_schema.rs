//! JSON Schema for `.oxbindrc.json`, `.oxbindrc.toml` and `oxbind.json`

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use oxbind_core::config::OxbindConfiguration;
use schemars::schema_for;
use serde_json::Value;

const SCHEMA_ID: &str = "https://octofhir.github.io/oxbind/schema/v1.json";

/// The schema document for [`OxbindConfiguration`]
pub fn config_schema() -> Result<Value> {
    let mut schema = serde_json::to_value(schema_for!(OxbindConfiguration))?;
    let document = schema
        .as_object_mut()
        .context("configuration schema is not a JSON object")?;
    document.insert("$id".to_string(), SCHEMA_ID.into());
    document.insert("title".to_string(), "oxbind Configuration".into());
    Ok(schema)
}

/// Write the schema to `output`; without a path it is only built
pub fn run(output: Option<&Path>) -> Result<()> {
    let schema = config_schema()?;
    let Some(path) = output else {
        tracing::debug!("schema built, nothing written");
        println!("✓ Schema validation passed");
        return Ok(());
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut text = serde_json::to_string_pretty(&schema)?;
    text.push('\n');
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;

    println!("✓ Generated JSON Schema: {}", path.display());
    Ok(())
}
