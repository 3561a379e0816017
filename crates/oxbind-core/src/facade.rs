//! Lazily realized views over a raw parse result
//!
//! Each view has its own write-once slot. The first read fills it, every
//! later read returns the same value by reference, so callers can hold on to
//! parts of a large tree without it being rebuilt.

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::Result;
use crate::ast::{self, Node};
use crate::diagnostics::{Comment, ParseDiagnostic};
use crate::editor::SourceEditor;
use crate::module_record::EcmaScriptModule;
use crate::raw::RawParseResult;

/// Outcome of one parse invocation
///
/// Safe to share across threads: concurrent first reads race to fill a slot
/// and all of them observe the single value that wins.
#[derive(Debug)]
pub struct ParseResult {
    raw: RawParseResult,
    program: OnceCell<Node>,
    module: OnceCell<Arc<EcmaScriptModule>>,
    comments: OnceCell<Arc<[Comment]>>,
    errors: OnceCell<Arc<[ParseDiagnostic]>>,
    edit_buffer: OnceCell<SourceEditor>,
}

impl ParseResult {
    /// Capture `raw` without doing any work
    pub fn wrap(raw: RawParseResult) -> Self {
        Self {
            raw,
            program: OnceCell::new(),
            module: OnceCell::new(),
            comments: OnceCell::new(),
            errors: OnceCell::new(),
            edit_buffer: OnceCell::new(),
        }
    }

    /// The realized syntax tree
    ///
    /// Decoded with literal repair on first access. A malformed encoding is
    /// returned as an error and nothing is cached.
    pub fn program(&self) -> Result<&Node> {
        self.program.get_or_try_init(|| {
            tracing::debug!(bytes = self.raw.program.len(), "realizing program");
            ast::decode_program(&self.raw.program)
        })
    }

    pub fn module(&self) -> &EcmaScriptModule {
        self.module.get_or_init(|| Arc::clone(&self.raw.module))
    }

    pub fn comments(&self) -> &[Comment] {
        self.comments.get_or_init(|| Arc::clone(&self.raw.comments))
    }

    pub fn errors(&self) -> &[ParseDiagnostic] {
        self.errors.get_or_init(|| Arc::clone(&self.raw.errors))
    }

    /// The engine's edit buffer with map export attached
    pub fn edit_buffer(&self) -> &SourceEditor {
        self.edit_buffer
            .get_or_init(|| SourceEditor::new(Arc::clone(&self.raw.edit_buffer)))
    }

    /// True when the engine reported no error-severity diagnostics
    pub fn is_valid(&self) -> bool {
        !self.errors().iter().any(ParseDiagnostic::is_error)
    }

    /// Whether the tree has been realized yet
    pub fn is_program_realized(&self) -> bool {
        self.program.get().is_some()
    }

    pub fn into_raw(self) -> RawParseResult {
        self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROGRAM: &str = r#"{"type":"Program","start":0,"end":0,"body":[]}"#;

    #[test]
    fn wrap_does_not_decode() {
        let result = ParseResult::wrap(RawParseResult::new("not json", ""));
        assert!(!result.is_program_realized());
        // Other views are independent of the tree
        assert!(result.comments().is_empty());
        assert!(result.program().is_err());
        assert!(!result.is_program_realized());
    }

    #[test]
    fn program_is_decoded_once() {
        let result = ParseResult::wrap(RawParseResult::new(PROGRAM, ""));
        let first = result.program().unwrap();
        assert!(result.is_program_realized());
        let second = result.program().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn shared_views_are_the_same_object_on_every_read() {
        use crate::module_record::{Span, StaticImport, ValueSpan};

        let module = EcmaScriptModule {
            has_module_syntax: true,
            static_imports: vec![StaticImport {
                start: 0,
                end: 17,
                module_request: ValueSpan {
                    value: "./dep.js".to_string(),
                    start: 7,
                    end: 17,
                },
                entries: Vec::new(),
            }],
            import_metas: vec![Span::new(18, 29)],
            ..EcmaScriptModule::default()
        };
        let raw = RawParseResult::new(PROGRAM, "")
            .with_module(module)
            .with_comments(vec![Comment::line(" note", 30, 37), Comment::block("* doc ", 38, 48)])
            .with_errors(vec![ParseDiagnostic::error("Unexpected token").with_label(49, 50, None)]);
        let result = ParseResult::wrap(raw);

        let module = result.module();
        assert!(module.has_module_syntax);
        assert!(std::ptr::eq(module, result.module()));

        let comments = result.comments();
        assert_eq!(comments.len(), 2);
        assert!(std::ptr::eq(comments, result.comments()));

        let errors = result.errors();
        assert_eq!(errors.len(), 1);
        assert!(std::ptr::eq(errors, result.errors()));
    }

    #[test]
    fn validity_follows_error_severity() {
        use crate::diagnostics::Severity;

        let warning = ParseDiagnostic::new(Severity::Warning, "unused label");
        let result = ParseResult::wrap(RawParseResult::new(PROGRAM, "").with_errors(vec![warning]));
        assert!(result.is_valid());

        let error = ParseDiagnostic::error("Unexpected token");
        let result = ParseResult::wrap(RawParseResult::new(PROGRAM, "").with_errors(vec![error]));
        assert!(!result.is_valid());
    }
}
