//! Parse invocation through a fixture engine

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use oxbind_core::diagnostics::Severity;
use oxbind_core::module_record::{ImportEntry, ImportName, ImportNameKind, StaticImport, ValueSpan};
use oxbind_core::{
    Comment, EcmaScriptModule, Lang, ParseDiagnostic, ParseEngine, ParseOptions, ParserDefaults,
    RawParseResult, parse_async, parse_sync, parse_without_return,
};

#[derive(Debug, thiserror::Error)]
#[error("engine rejected the request: {0}")]
struct Rejected(String);

/// Answers every request with a canned program and counts invocations
#[derive(Default)]
struct FixtureEngine {
    calls: AtomicUsize,
}

#[async_trait]
impl ParseEngine for FixtureEngine {
    type Error = Rejected;

    fn parse(&self, options: &ParseOptions) -> Result<RawParseResult, Rejected> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let lang = options
            .resolved_lang()
            .map_err(|err| Rejected(err.to_string()))?;

        let end = options.source_text.len();
        let program = format!(
            r#"{{"type":"Program","start":0,"end":{end},"sourceType":"module","hashbang":null,"body":[]}}"#
        );
        let mut errors = Vec::new();
        if options.source_text.contains("let let") {
            errors.push(
                ParseDiagnostic::error("Identifier expected")
                    .with_label(4, 7, None)
                    .with_code("oxbind"),
            );
        }
        if lang.is_typescript() && options.show_semantic_errors == Some(true) {
            errors.push(ParseDiagnostic::new(Severity::Warning, "semantic checks ran"));
        }

        Ok(RawParseResult::new(program, &options.source_text)
            .with_module(module_importing("react"))
            .with_comments(vec![Comment::line(" leading", 0, 10)])
            .with_errors(errors))
    }
}

fn module_importing(specifier: &str) -> EcmaScriptModule {
    let len = specifier.len() as u32;
    EcmaScriptModule {
        has_module_syntax: true,
        static_imports: vec![StaticImport {
            start: 0,
            end: 26 + len,
            module_request: ValueSpan {
                value: specifier.to_string(),
                start: 18,
                end: 20 + len,
            },
            entries: vec![ImportEntry {
                import_name: ImportName {
                    kind: ImportNameKind::Default,
                    name: None,
                    start: None,
                    end: None,
                },
                local_name: ValueSpan {
                    value: "React".to_string(),
                    start: 7,
                    end: 12,
                },
                is_type: false,
            }],
        }],
        ..EcmaScriptModule::default()
    }
}

#[test]
fn test_parse_sync_wraps_engine_output() {
    let engine = FixtureEngine::default();
    let options = ParseOptions::new("app.jsx", "import React from 'react';");

    let result = parse_sync(&engine, &options).unwrap();
    assert!(!result.is_program_realized());
    assert!(result.is_valid());
    assert_eq!(result.program().unwrap().kind(), "Program");
    assert_eq!(result.module().requested_modules().collect::<Vec<_>>(), vec!["react"]);
    assert_eq!(result.comments()[0].value, " leading");
}

#[test]
fn test_engine_failure_is_returned_unchanged() {
    let engine = FixtureEngine::default();
    let options = ParseOptions::new("styles.css", "a {}");

    let err = parse_sync(&engine, &options).unwrap_err();
    assert!(err.0.contains("styles.css"));
    assert_eq!(engine.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_syntax_errors_are_diagnostics_not_failures() {
    let engine = FixtureEngine::default();
    let result = parse_sync(&engine, &ParseOptions::new("a.js", "let let = 1;")).unwrap();

    assert!(!result.is_valid());
    let diagnostic = &result.errors()[0];
    assert_eq!(diagnostic.labels[0].start, 4);
    assert_eq!(diagnostic.to_string(), "error(oxbind): Identifier expected");
    // The tree is still available
    assert!(result.program().is_ok());
}

#[test]
fn test_parse_without_return() {
    let engine = FixtureEngine::default();
    parse_without_return(&engine, &ParseOptions::new("a.ts", "let a: number;")).unwrap();
    assert!(parse_without_return(&engine, &ParseOptions::new("a", "")).is_err());
    assert_eq!(engine.calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_configured_defaults_reach_the_engine() {
    let engine = FixtureEngine::default();
    let defaults = ParserDefaults {
        lang: Some(Lang::Ts),
        show_semantic_errors: Some(true),
        ..ParserDefaults::default()
    };
    let options = ParseOptions::new("component.vue", "let a = 1;").with_defaults(&defaults);

    let result = parse_sync(&engine, &options).unwrap();
    assert_eq!(result.errors().len(), 1);
    assert!(result.is_valid());
}

#[tokio::test]
async fn test_parse_async_matches_sync() {
    let engine = FixtureEngine::default();
    let options = ParseOptions::new("index.mjs", "export {}");

    let sync_result = parse_sync(&engine, &options).unwrap();
    let async_result = parse_async(&engine, &options).await.unwrap();
    assert_eq!(
        sync_result.program().unwrap(),
        async_result.program().unwrap()
    );
    assert_eq!(sync_result.module(), async_result.module());
}

#[tokio::test]
async fn test_parse_async_propagates_failure() {
    let engine = FixtureEngine::default();
    let err = parse_async(&engine, &ParseOptions::new("README", ""))
        .await
        .unwrap_err();
    assert!(err.to_string().starts_with("engine rejected the request"));
}

#[tokio::test]
async fn test_results_are_shared_across_tasks() {
    let engine = FixtureEngine::default();
    let result = std::sync::Arc::new(
        parse_async(&engine, &ParseOptions::new("a.js", "x"))
            .await
            .unwrap(),
    );

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let result = std::sync::Arc::clone(&result);
            tokio::spawn(async move { result.program().map(|node| node as *const _ as usize).unwrap() })
        })
        .collect();

    let mut addresses = Vec::new();
    for handle in handles {
        addresses.push(handle.await.unwrap());
    }
    addresses.dedup();
    assert_eq!(addresses.len(), 1);
}
