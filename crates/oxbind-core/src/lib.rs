//! oxbind core
//!
//! Host-side binding layer over an external JavaScript/TypeScript parsing
//! engine. An engine hands back a [`RawParseResult`]; [`ParseResult`] wraps it
//! and realizes each view (tree, module record, comments, diagnostics, edit
//! buffer) on first access, caching it for every later read.

pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod edit;
pub mod editor;
pub mod engine;
pub mod error;
pub mod facade;
pub mod module_record;
pub mod raw;
pub mod result;
pub mod sourcemap;

// Re-export commonly used types
pub use ast::{AstValue, Element, Literal, LiteralValue, Node, RegExpFlags, RegExpValue};
pub use config::{ConfigLoader, OxbindConfiguration, ParserDefaults, SourceMapDefaults};
pub use diagnostics::{Comment, CommentKind, ErrorLabel, ParseDiagnostic, Severity};
pub use edit::EditBuffer;
pub use editor::{MapExport, SourceEditor};
pub use engine::{
    AstType, Lang, ParseEngine, ParseOptions, SourceType, parse_async, parse_sync,
    parse_without_return,
};
pub use error::{ErrorKind, OxbindError};
pub use facade::ParseResult;
pub use module_record::EcmaScriptModule;
pub use raw::RawParseResult;
pub use result::{Result, ResultExt};
pub use sourcemap::{SourceMap, SourceMapOptions};

/// Initialize the tracing subscriber for logging
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("oxbind=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
