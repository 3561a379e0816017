//! Literal reconstruction through the facade

use num_bigint::BigInt;
use oxbind_core::{LiteralValue, Node, ParseResult, RawParseResult};

fn program_with(literal: &str) -> String {
    format!(
        r#"{{"type":"Program","start":0,"end":40,"sourceType":"module","body":[
            {{"type":"ExpressionStatement","start":0,"end":40,"expression":{literal}}}
        ]}}"#
    )
}

fn first_literal(result: &ParseResult) -> &oxbind_core::Literal {
    let program = result.program().unwrap();
    let literals = program.descendants_of_kind("Literal");
    literals[0].as_literal().unwrap()
}

#[test]
fn test_bigint_literal_is_repaired() {
    let raw = RawParseResult::new(
        program_with(
            r#"{"type":"Literal","start":0,"end":31,"value":null,
                "raw":"123456789012345678901234567890n",
                "bigint":"123456789012345678901234567890"}"#,
        ),
        "123456789012345678901234567890n",
    );
    let result = ParseResult::wrap(raw);
    let literal = first_literal(&result);

    let expected: BigInt = "123456789012345678901234567890".parse().unwrap();
    assert_eq!(literal.value.as_bigint(), Some(&expected));
    assert_eq!(literal.raw.as_deref(), Some("123456789012345678901234567890n"));
    assert!(literal.is_bigint());
}

#[test]
fn test_hex_bigint_literal() {
    let raw = RawParseResult::new(
        program_with(r#"{"type":"Literal","start":0,"end":5,"value":null,"raw":"0xffn","bigint":"0xff"}"#),
        "0xffn",
    );
    let result = ParseResult::wrap(raw);
    assert_eq!(first_literal(&result).value.as_bigint(), Some(&BigInt::from(255)));
}

#[test]
fn test_regex_literal_is_compiled() {
    let raw = RawParseResult::new(
        program_with(
            r#"{"type":"Literal","start":0,"end":5,"value":null,"raw":"/a+/g",
                "regex":{"pattern":"a+","flags":"g"}}"#,
        ),
        "/a+/g",
    );
    let result = ParseResult::wrap(raw);
    let literal = first_literal(&result);

    let regex = literal.value.as_regexp().unwrap();
    assert!(regex.is_match("aaa"));
    assert!(!regex.is_match("bbb"));
    assert!(regex.flags.global);
    assert_eq!(regex.to_string(), "/a+/g");
}

#[test]
fn test_unsupported_regex_becomes_null() {
    let raw = RawParseResult::new(
        program_with(
            r#"{"type":"Literal","start":0,"end":9,"value":null,"raw":"/(?<=a)b/",
                "regex":{"pattern":"(?<=a)b","flags":""}}"#,
        ),
        "/(?<=a)b/",
    );
    let result = ParseResult::wrap(raw);
    let literal = first_literal(&result);

    assert!(literal.value.is_null());
    // Source is still available for callers that want to report it
    let source = literal.regex.as_ref().unwrap();
    assert_eq!(source.pattern, "(?<=a)b");
}

#[test]
fn test_null_literal_stays_null() {
    let raw = RawParseResult::new(
        program_with(r#"{"type":"Literal","start":0,"end":4,"value":null,"raw":"null"}"#),
        "null",
    );
    let result = ParseResult::wrap(raw);
    let literal = first_literal(&result);
    assert_eq!(literal.value, LiteralValue::Null);
    assert!(!literal.is_bigint());
    assert!(!literal.is_regex());
}

#[test]
fn test_plain_literals_are_untouched() {
    let raw = RawParseResult::new(
        r#"{"type":"ArrayExpression","start":0,"end":16,"elements":[
            {"type":"Literal","start":1,"end":3,"value":42,"raw":"42"},
            {"type":"Literal","start":4,"end":9,"value":"str","raw":"\"str\""},
            {"type":"Literal","start":10,"end":15,"value":false,"raw":"false"}
        ]}"#,
        r#"[42,"str",false]"#,
    );
    let result = ParseResult::wrap(raw);
    let program = result.program().unwrap();
    let values: Vec<&LiteralValue> = program
        .descendants_of_kind("Literal")
        .into_iter()
        .filter_map(Node::as_literal)
        .map(|literal| &literal.value)
        .collect();

    assert_eq!(
        values,
        vec![
            &LiteralValue::Number(42.0),
            &LiteralValue::String("str".to_string()),
            &LiteralValue::Boolean(false),
        ]
    );
}

#[test]
fn test_nested_literals_are_repaired() {
    // A regex inside a call inside a bigint-bearing array: repair reaches every depth
    let raw = RawParseResult::new(
        r#"{"type":"CallExpression","start":0,"end":20,
            "callee":{"type":"Identifier","start":0,"end":1,"name":"f"},
            "arguments":[{"type":"ArrayExpression","start":2,"end":19,"elements":[
                {"type":"Literal","start":3,"end":5,"value":null,"raw":"1n","bigint":"1"},
                {"type":"Literal","start":6,"end":10,"value":null,"raw":"/x/i",
                 "regex":{"pattern":"x","flags":"i"}}
            ]}]}"#,
        "f([1n, /x/i])",
    );
    let result = ParseResult::wrap(raw);
    let program = result.program().unwrap();
    let literals = program.descendants_of_kind("Literal");
    assert_eq!(literals.len(), 2);

    let bigint = literals[0].as_literal().unwrap();
    assert_eq!(bigint.value.as_bigint(), Some(&BigInt::from(1)));

    let regex = literals[1].as_literal().unwrap().value.as_regexp().unwrap();
    assert!(regex.is_match("X"));
}

#[test]
fn test_malformed_program_is_a_decode_error() {
    let result = ParseResult::wrap(RawParseResult::new(r#"{"type":"Program","body":["#, ""));
    let err = result.program().unwrap_err();
    assert_eq!(err.kind(), oxbind_core::ErrorKind::Decode);
    assert!(err.is_recoverable());

    // A malformed bigint numeral is not silently dropped
    let result = ParseResult::wrap(RawParseResult::new(
        program_with(r#"{"type":"Literal","start":0,"end":4,"value":null,"raw":"0xzn","bigint":"0xz"}"#),
        "0xzn",
    ));
    assert!(result.program().is_err());
}

#[test]
fn test_deeply_nested_program_decodes() {
    // `"a" + "a" + ... + 1n` nests each BinaryExpression in the next one's `left`
    const DEPTH: usize = 600;
    let mut expression =
        r#"{"type":"Literal","start":0,"end":2,"value":null,"raw":"1n","bigint":"1"}"#.to_string();
    for _ in 0..DEPTH {
        expression = format!(
            r#"{{"type":"BinaryExpression","start":0,"end":2,"operator":"+","left":{expression},
                "right":{{"type":"Literal","start":0,"end":3,"value":"a","raw":"\"a\""}}}}"#
        );
    }

    let result = ParseResult::wrap(RawParseResult::new(program_with(&expression), "1n"));
    let program = result.program().unwrap();

    assert_eq!(program.descendants_of_kind("BinaryExpression").len(), DEPTH);
    let bigints: Vec<&BigInt> = program
        .descendants_of_kind("Literal")
        .into_iter()
        .filter_map(Node::as_literal)
        .filter_map(|literal| literal.value.as_bigint())
        .collect();
    assert_eq!(bigints, vec![&BigInt::from(1)]);
}

#[test]
fn test_trailing_data_is_a_decode_error() {
    let result = ParseResult::wrap(RawParseResult::new(
        r#"{"type":"Literal","start":0,"end":4,"value":null,"raw":"null"} {}"#,
        "null",
    ));
    assert_eq!(result.program().unwrap_err().kind(), oxbind_core::ErrorKind::Decode);
}
