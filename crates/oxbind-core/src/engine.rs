//! Parse invocation boundary
//!
//! The parsing engine is external. It is plugged in through [`ParseEngine`]
//! and its failures reach the caller as its own error type: a failed call
//! means the engine could not act on the request, while syntax errors in the
//! source come back as diagnostics inside a successful result.

use std::path::Path;

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::ParserDefaults;
use crate::facade::ParseResult;
use crate::raw::RawParseResult;
use crate::{OxbindError, Result};

/// Script or module goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Script,
    Module,
    /// Module when the source has module syntax, script otherwise
    Unambiguous,
}

/// Source dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Js,
    Jsx,
    Ts,
    Tsx,
    Dts,
}

impl Lang {
    /// Dialect implied by a file name
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        for suffix in [".d.ts", ".d.mts", ".d.cts"] {
            if name.ends_with(suffix) {
                return Some(Lang::Dts);
            }
        }
        match path.extension()?.to_str()? {
            "js" | "mjs" | "cjs" => Some(Lang::Js),
            "jsx" => Some(Lang::Jsx),
            "ts" | "mts" | "cts" => Some(Lang::Ts),
            "tsx" => Some(Lang::Tsx),
            _ => None,
        }
    }

    pub fn is_typescript(self) -> bool {
        matches!(self, Lang::Ts | Lang::Tsx | Lang::Dts)
    }

    pub fn is_jsx(self) -> bool {
        matches!(self, Lang::Jsx | Lang::Tsx)
    }
}

/// Shape of the emitted tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum AstType {
    Js,
    Ts,
}

/// Everything an engine needs for one invocation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseOptions {
    pub filename: String,
    pub source_text: String,
    pub source_type: Option<SourceType>,
    /// Explicit dialect; inferred from `filename` when unset
    pub lang: Option<Lang>,
    pub ast_type: Option<AstType>,
    /// Emit `range: [start, end]` on every node
    pub range: Option<bool>,
    /// Keep `ParenthesizedExpression` nodes
    pub preserve_parens: Option<bool>,
    /// Report semantic errors (redeclarations etc.) as well as syntax errors
    pub show_semantic_errors: Option<bool>,
}

impl ParseOptions {
    pub fn new(filename: impl Into<String>, source_text: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            source_text: source_text.into(),
            ..Self::default()
        }
    }

    pub fn with_lang(mut self, lang: Lang) -> Self {
        self.lang = Some(lang);
        self
    }

    pub fn with_source_type(mut self, source_type: SourceType) -> Self {
        self.source_type = Some(source_type);
        self
    }

    /// Fill unset fields from configured defaults
    pub fn with_defaults(mut self, defaults: &ParserDefaults) -> Self {
        self.source_type = self.source_type.or(defaults.source_type);
        self.lang = self.lang.or(defaults.lang);
        self.ast_type = self.ast_type.or(defaults.ast_type);
        self.range = self.range.or(defaults.range);
        self.preserve_parens = self.preserve_parens.or(defaults.preserve_parens);
        self.show_semantic_errors = self.show_semantic_errors.or(defaults.show_semantic_errors);
        self
    }

    /// The dialect to parse as
    pub fn resolved_lang(&self) -> Result<Lang> {
        if let Some(lang) = self.lang {
            return Ok(lang);
        }
        Lang::from_path(Path::new(&self.filename)).ok_or_else(|| {
            OxbindError::invalid_options(format!(
                "Cannot infer a language from '{}'; set `lang` explicitly",
                self.filename
            ))
        })
    }

    /// The tree shape to emit; TypeScript dialects default to the TS shape
    pub fn resolved_ast_type(&self) -> Result<AstType> {
        if let Some(ast_type) = self.ast_type {
            return Ok(ast_type);
        }
        Ok(if self.resolved_lang()?.is_typescript() {
            AstType::Ts
        } else {
            AstType::Js
        })
    }
}

/// An external parsing engine
#[async_trait]
pub trait ParseEngine: Send + Sync {
    /// Invocation failure, e.g. options the engine rejects
    type Error: std::error::Error + Send + Sync + 'static;

    fn parse(&self, options: &ParseOptions) -> std::result::Result<RawParseResult, Self::Error>;

    /// Non-blocking variant; engines with their own worker pool override it
    async fn parse_async(
        &self,
        options: &ParseOptions,
    ) -> std::result::Result<RawParseResult, Self::Error> {
        self.parse(options)
    }
}

/// Parse on the calling thread
pub fn parse_sync<E>(engine: &E, options: &ParseOptions) -> std::result::Result<ParseResult, E::Error>
where
    E: ParseEngine + ?Sized,
{
    tracing::debug!(filename = %options.filename, "parse_sync");
    engine.parse(options).map(ParseResult::wrap)
}

/// Parse without blocking the caller's task
pub async fn parse_async<E>(
    engine: &E,
    options: &ParseOptions,
) -> std::result::Result<ParseResult, E::Error>
where
    E: ParseEngine + ?Sized,
{
    tracing::debug!(filename = %options.filename, "parse_async");
    engine.parse_async(options).await.map(ParseResult::wrap)
}

/// Run the engine and discard its output
pub fn parse_without_return<E>(engine: &E, options: &ParseOptions) -> std::result::Result<(), E::Error>
where
    E: ParseEngine + ?Sized,
{
    engine.parse(options).map(drop)
}
