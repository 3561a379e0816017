use std::sync::{Arc, Mutex};

use crate::diagnostics::{Comment, ParseDiagnostic};
use crate::edit::EditBuffer;
use crate::module_record::EcmaScriptModule;

/// What a parse engine hands back for one invocation
///
/// Everything except `program` is already in its final form and shared, so
/// the facade can expose it without copying.
#[derive(Debug, Clone)]
pub struct RawParseResult {
    /// JSON-encoded program
    pub program: String,
    pub module: Arc<EcmaScriptModule>,
    pub comments: Arc<[Comment]>,
    pub errors: Arc<[ParseDiagnostic]>,
    pub edit_buffer: Arc<Mutex<EditBuffer>>,
}

impl RawParseResult {
    /// A result with an empty module record, no comments and no errors
    pub fn new(program: impl Into<String>, source_text: &str) -> Self {
        Self {
            program: program.into(),
            module: Arc::new(EcmaScriptModule::default()),
            comments: Arc::from(Vec::new()),
            errors: Arc::from(Vec::new()),
            edit_buffer: Arc::new(Mutex::new(EditBuffer::new(source_text))),
        }
    }

    pub fn with_module(mut self, module: EcmaScriptModule) -> Self {
        self.module = Arc::new(module);
        self
    }

    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = Arc::from(comments);
        self
    }

    pub fn with_errors(mut self, errors: Vec<ParseDiagnostic>) -> Self {
        self.errors = Arc::from(errors);
        self
    }
}
