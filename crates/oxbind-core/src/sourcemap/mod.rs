//! Source Map v3 output
//!
//! [`MappingsBuilder`] collects decoded segments while the edit buffer walks
//! its chunks; [`SourceMap`] is the serializable result.

mod vlq;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::config::SourceMapDefaults;
use crate::{OxbindError, Result};

const DATA_URL_PREFIX: &str = "data:application/json;charset=utf-8;base64,";

/// Options for rendering a source map, supplied at call time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceMapOptions {
    /// Name recorded in `sources`
    pub source: Option<String>,
    /// Name of the generated file
    pub file: Option<String>,
    /// Embed the original text as `sourcesContent`
    pub include_content: bool,
    /// Map every character instead of chunk and line starts only
    pub hires: bool,
}

impl SourceMapOptions {
    pub fn from_defaults(defaults: &SourceMapDefaults) -> Self {
        Self {
            include_content: defaults.include_content.unwrap_or(false),
            hires: defaults.hires.unwrap_or(false),
            ..Self::default()
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn include_content(mut self, include: bool) -> Self {
        self.include_content = include;
        self
    }

    pub fn hires(mut self, hires: bool) -> Self {
        self.hires = hires;
        self
    }
}

/// A Source Map v3 document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMap {
    pub version: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub sources: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources_content: Option<Vec<String>>,
    pub names: Vec<String>,
    pub mappings: String,
}

impl SourceMap {
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|err| OxbindError::source_map_error(err.to_string()))
    }

    /// Data URI suitable for a `//# sourceMappingURL=` comment
    pub fn to_data_url(&self) -> Result<String> {
        let json = self.to_json_string()?;
        Ok(format!("{DATA_URL_PREFIX}{}", STANDARD.encode(json)))
    }
}

/// One mapping: generated column plus original line/column in source 0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Segment {
    generated_column: u32,
    original_line: u32,
    original_column: u32,
}

/// Tracks the generated position and records segments line by line
#[derive(Debug)]
pub(crate) struct MappingsBuilder {
    lines: Vec<Vec<Segment>>,
    generated_column: u32,
}

impl MappingsBuilder {
    pub(crate) fn new() -> Self {
        Self {
            lines: vec![Vec::new()],
            generated_column: 0,
        }
    }

    /// Record that the current generated position maps to `original`
    pub(crate) fn add_segment(&mut self, original: (u32, u32)) {
        let segment = Segment {
            generated_column: self.generated_column,
            original_line: original.0,
            original_column: original.1,
        };
        if let Some(line) = self.lines.last_mut() {
            line.push(segment);
        }
    }

    /// Move past unmapped generated text
    pub(crate) fn advance(&mut self, text: &str) {
        for ch in text.chars() {
            self.advance_char(ch);
        }
    }

    pub(crate) fn advance_char(&mut self, ch: char) {
        if ch == '\n' {
            self.lines.push(Vec::new());
            self.generated_column = 0;
        } else {
            self.generated_column += ch.len_utf16() as u32;
        }
    }

    /// Walk unedited original text starting at `original`, adding a segment
    /// at the first character and at each line start (or every character
    /// when `hires`)
    pub(crate) fn add_original(&mut self, text: &str, original: (u32, u32), hires: bool) {
        let (mut line, mut column) = original;
        let mut first = true;
        for ch in text.chars() {
            if hires || first {
                self.add_segment((line, column));
            }
            if ch == '\n' {
                line += 1;
                column = 0;
                first = true;
            } else {
                column += ch.len_utf16() as u32;
                first = false;
            }
            self.advance_char(ch);
        }
    }

    /// Encode the collected segments as a `mappings` string
    pub(crate) fn encode(&self) -> String {
        let mut out = String::new();
        let mut previous_line = 0i64;
        let mut previous_column = 0i64;
        for (idx, line) in self.lines.iter().enumerate() {
            if idx > 0 {
                out.push(';');
            }
            let mut previous_generated = 0i64;
            for (seg_idx, segment) in line.iter().enumerate() {
                if seg_idx > 0 {
                    out.push(',');
                }
                vlq::encode(i64::from(segment.generated_column) - previous_generated, &mut out);
                // Single source, always index 0
                vlq::encode(0, &mut out);
                vlq::encode(i64::from(segment.original_line) - previous_line, &mut out);
                vlq::encode(i64::from(segment.original_column) - previous_column, &mut out);
                previous_generated = i64::from(segment.generated_column);
                previous_line = i64::from(segment.original_line);
                previous_column = i64::from(segment.original_column);
            }
        }
        out
    }
}
