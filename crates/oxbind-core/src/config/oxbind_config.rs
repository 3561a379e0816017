//! Configuration types for oxbind

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::engine::{AstType, Lang, SourceType};

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OxbindConfiguration {
    /// JSON schema reference, ignored by the loader
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Defaults applied to every parse invocation
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Defaults for parse options left unset by the caller")]
    pub parser: Option<ParserDefaults>,

    /// Defaults for source map rendering
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Defaults for source map rendering")]
    pub source_map: Option<SourceMapDefaults>,
}

/// Parse option defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParserDefaults {
    #[schemars(description = "Script, module or unambiguous goal")]
    pub source_type: Option<SourceType>,

    #[schemars(description = "Dialect used when it cannot be inferred from the file name")]
    pub lang: Option<Lang>,

    #[schemars(description = "Shape of the emitted tree")]
    pub ast_type: Option<AstType>,

    #[schemars(description = "Emit a [start, end] range on every node")]
    pub range: Option<bool>,

    #[schemars(description = "Keep ParenthesizedExpression nodes")]
    pub preserve_parens: Option<bool>,

    #[schemars(description = "Report semantic errors as well as syntax errors")]
    pub show_semantic_errors: Option<bool>,
}

/// Source map rendering defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SourceMapDefaults {
    #[schemars(description = "Embed the original text in sourcesContent")]
    pub include_content: Option<bool>,

    #[schemars(description = "Emit a segment per character of unedited text")]
    pub hires: Option<bool>,
}

impl OxbindConfiguration {
    /// Parser defaults, or empty defaults if not specified
    pub fn parser_defaults(&self) -> ParserDefaults {
        self.parser.clone().unwrap_or_default()
    }

    /// Source map defaults, or empty defaults if not specified
    pub fn source_map_defaults(&self) -> SourceMapDefaults {
        self.source_map.clone().unwrap_or_default()
    }

    /// Merge another config into this one (current takes precedence)
    pub fn merge_with(&mut self, other: OxbindConfiguration) {
        if let Some(other_parser) = other.parser {
            if let Some(ref mut parser) = self.parser {
                parser.merge_with(other_parser);
            } else {
                self.parser = Some(other_parser);
            }
        }

        if let Some(other_map) = other.source_map {
            if let Some(ref mut source_map) = self.source_map {
                source_map.merge_with(other_map);
            } else {
                self.source_map = Some(other_map);
            }
        }
    }
}

impl ParserDefaults {
    pub fn merge_with(&mut self, other: ParserDefaults) {
        self.source_type = self.source_type.or(other.source_type);
        self.lang = self.lang.or(other.lang);
        self.ast_type = self.ast_type.or(other.ast_type);
        self.range = self.range.or(other.range);
        self.preserve_parens = self.preserve_parens.or(other.preserve_parens);
        self.show_semantic_errors = self.show_semantic_errors.or(other.show_semantic_errors);
    }
}

impl SourceMapDefaults {
    pub fn merge_with(&mut self, other: SourceMapDefaults) {
        self.include_content = self.include_content.or(other.include_content);
        self.hires = self.hires.or(other.hires);
    }
}
