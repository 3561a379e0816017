//! Edit buffer and source map rendering through the facade

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use oxbind_core::{
    ParseResult, RawParseResult, SourceMap, SourceMapDefaults, SourceMapOptions,
};

const SOURCE: &str = "let a = 1;\nlog(a);\n";
const PROGRAM: &str = r#"{"type":"Program","start":0,"end":19,"body":[]}"#;

fn parsed() -> ParseResult {
    ParseResult::wrap(RawParseResult::new(PROGRAM, SOURCE))
}

fn rename_a(result: &ParseResult) {
    result
        .edit_buffer()
        .edit(|buffer| -> oxbind_core::Result<()> {
            buffer.overwrite(4, 5, "answer")?;
            buffer.overwrite(15, 16, "answer")?;
            Ok(())
        })
        .unwrap();
}

fn options() -> SourceMapOptions {
    SourceMapOptions::default()
        .with_source("input.js")
        .with_file("output.js")
        .include_content(true)
}

#[test]
fn test_rename_renders_json_map() {
    let result = parsed();
    rename_a(&result);
    assert_eq!(result.edit_buffer().text(), "let answer = 1;\nlog(answer);\n");

    let json = result.edit_buffer().generate_map(options()).to_json().unwrap();
    insta::assert_snapshot!(json, @r#"{"version":3,"file":"output.js","sources":["input.js"],"sourcesContent":["let a = 1;\nlog(a);\n"],"names":[],"mappings":"AAAA,IAAI,MAAC;AACL,IAAI,MAAC;"}"#);
}

#[test]
fn test_renderings_agree() {
    let result = parsed();
    rename_a(&result);

    let export = result.edit_buffer().generate_map(options());
    let map = export.to_map();
    let from_json: SourceMap = serde_json::from_str(&export.to_json().unwrap()).unwrap();
    assert_eq!(map, from_json);

    let url = export.to_url().unwrap();
    let payload = url
        .strip_prefix("data:application/json;charset=utf-8;base64,")
        .unwrap();
    let decoded = STANDARD.decode(payload).unwrap();
    let from_url: SourceMap = serde_json::from_slice(&decoded).unwrap();
    assert_eq!(map, from_url);
}

#[test]
fn test_edits_are_shared_between_reads() {
    let result = parsed();
    let first = result.edit_buffer();
    let second = result.edit_buffer();
    assert!(std::ptr::eq(first, second));

    first.edit(|buffer| {
        buffer.prepend("'use strict';\n");
    });
    assert!(second.text().starts_with("'use strict';\n"));
    assert!(second.read(|buffer| buffer.has_changed()));
}

#[test]
fn test_map_reflects_later_edits() {
    let result = parsed();
    let export = result.edit_buffer().generate_map(SourceMapOptions::default());
    assert_eq!(export.to_map().mappings, "AAAA;AACA;");

    result
        .edit_buffer()
        .edit(|buffer| buffer.remove(0, 4).map(|_| ()))
        .unwrap();
    // The removed prefix maps nothing; the rest of line 0 starts at column 0
    assert_eq!(export.to_map().mappings, "AAAI;AACJ;");
}

#[test]
fn test_defaults_from_configuration() {
    let defaults = SourceMapDefaults {
        include_content: Some(true),
        hires: None,
    };
    let options = SourceMapOptions::from_defaults(&defaults);
    assert!(options.include_content);
    assert!(!options.hires);

    let result = parsed();
    let map = result.edit_buffer().generate_map(options).to_map();
    assert_eq!(map.sources_content, Some(vec![SOURCE.to_string()]));
}

#[test]
fn test_out_of_range_edit_is_rejected() {
    let result = parsed();
    let err = result
        .edit_buffer()
        .edit(|buffer| buffer.overwrite(10, 100, "x").map(|_| ()))
        .unwrap_err();
    assert_eq!(err.kind(), oxbind_core::ErrorKind::Edit);
    assert_eq!(result.edit_buffer().text(), SOURCE);
}
