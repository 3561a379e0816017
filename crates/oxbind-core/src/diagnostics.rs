//! Comments and diagnostics reported by the engine
//!
//! Syntax errors in the parsed source are data, not failures of this crate:
//! they travel as [`ParseDiagnostic`] values.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommentKind {
    Line,
    Block,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "type")]
    pub kind: CommentKind,
    /// Text without the delimiters
    pub value: String,
    pub start: u32,
    pub end: u32,
}

impl Comment {
    pub fn line(value: impl Into<String>, start: u32, end: u32) -> Self {
        Self {
            kind: CommentKind::Line,
            value: value.into(),
            start,
            end,
        }
    }

    pub fn block(value: impl Into<String>, start: u32, end: u32) -> Self {
        Self {
            kind: CommentKind::Block,
            value: value.into(),
            start,
            end,
        }
    }

    /// Block comments starting with `*`, e.g. `/** ... */`
    pub fn is_jsdoc(&self) -> bool {
        self.kind == CommentKind::Block && self.value.starts_with('*')
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
    Advice,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Advice => write!(f, "advice"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorLabel {
    pub message: Option<String>,
    pub start: u32,
    pub end: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseDiagnostic {
    pub severity: Severity,
    pub message: String,
    #[serde(default)]
    pub labels: Vec<ErrorLabel>,
    pub help_message: Option<String>,
    /// Rule or error code, when the producer has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ParseDiagnostic {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            labels: Vec::new(),
            help_message: None,
            code: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn with_label(mut self, start: u32, end: u32, message: Option<String>) -> Self {
        self.labels.push(ErrorLabel {
            message,
            start,
            end,
        });
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help_message = Some(help.into());
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{}({code}): {}", self.severity, self.message),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}
