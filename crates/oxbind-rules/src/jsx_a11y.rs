//! jsx-a11y checks over a realized tree

use oxbind_core::ast::{AstValue, LiteralValue, Node};
use oxbind_core::{ParseDiagnostic, ParseResult, ResultExt, Severity};

use crate::aria::{AriaValue, aria_prop_type};

/// Rule ID for ARIA property value validation
pub const ARIA_PROPTYPES: &str = "jsx-a11y/aria-proptypes";

/// Report `aria-*` attributes whose statically known value does not fit the
/// property's type
pub fn check_aria_proptypes(program: &Node) -> Vec<ParseDiagnostic> {
    let mut diagnostics = Vec::new();

    program.walk(&mut |node| {
        if node.kind() != "JSXAttribute" {
            return;
        }
        let Some(name) = attribute_name(node) else {
            return;
        };
        let name = name.to_lowercase();
        if !name.starts_with("aria-") {
            return;
        }
        let Some(rule) = aria_prop_type(&name) else {
            return;
        };

        let value = match node.child("value") {
            // `<div aria-hidden />`
            None => AriaValue::Boolean(true),
            Some(value) => match static_value(value) {
                Some(value) => value,
                None => return,
            },
        };
        // null and undefined mean "not set" and are never reported
        if value == AriaValue::Undefined {
            return;
        }

        if !rule.accepts(&value) {
            tracing::trace!(attribute = %name, value = %value, "invalid ARIA value");
            diagnostics.push(
                ParseDiagnostic::new(Severity::Warning, rule.expectation(&name))
                    .with_label(
                        node.start().unwrap_or_default(),
                        node.end().unwrap_or_default(),
                        None,
                    )
                    .with_code(ARIA_PROPTYPES),
            );
        }
    });

    diagnostics
}

/// Realize the tree and run [`check_aria_proptypes`]; a tree that fails to
/// decode yields no diagnostics
pub fn check_program(result: &ParseResult) -> Vec<ParseDiagnostic> {
    result
        .program()
        .log_and_continue()
        .map(check_aria_proptypes)
        .unwrap_or_default()
}

fn attribute_name(attribute: &Node) -> Option<&str> {
    let name = attribute.child("name")?;
    // Namespaced names (`xlink:href`) are never ARIA properties
    if name.kind() != "JSXIdentifier" {
        return None;
    }
    name.get("name")?.as_str()
}

/// The attribute value as a constant, or `None` when it depends on runtime
/// state or is `null`
fn static_value(value: &Node) -> Option<AriaValue> {
    match value.kind() {
        "Literal" => literal_value(value),
        "JSXExpressionContainer" => expression_value(value.child("expression")?),
        _ => None,
    }
}

fn expression_value(expression: &Node) -> Option<AriaValue> {
    match expression.kind() {
        "Literal" => literal_value(expression),
        "Identifier" => {
            (expression.get("name")?.as_str()? == "undefined").then_some(AriaValue::Undefined)
        }
        "TemplateLiteral" => template_value(expression).map(from_string),
        "UnaryExpression" => unary_value(expression),
        _ => None,
    }
}

fn literal_value(node: &Node) -> Option<AriaValue> {
    match &node.as_literal()?.value {
        LiteralValue::Boolean(value) => Some(AriaValue::Boolean(*value)),
        LiteralValue::Number(value) => Some(AriaValue::Number(*value)),
        LiteralValue::String(value) => Some(from_string(value.clone())),
        LiteralValue::Null | LiteralValue::BigInt(_) | LiteralValue::RegExp(_) => None,
    }
}

/// `"true"` and `"false"` are read as booleans
fn from_string(value: String) -> AriaValue {
    match value.as_str() {
        "true" => AriaValue::Boolean(true),
        "false" => AriaValue::Boolean(false),
        _ => AriaValue::String(value),
    }
}

/// Text of a template literal, with identifier interpolations kept as
/// `${name}`
fn template_value(template: &Node) -> Option<String> {
    let quasis = template.get("quasis")?.as_array()?;
    let expressions = template
        .get("expressions")
        .and_then(AstValue::as_array)
        .unwrap_or_default();

    let mut text = String::new();
    for (idx, quasi) in quasis.iter().enumerate() {
        let cooked = quasi
            .as_node()?
            .get("value")?
            .as_object()?
            .get("cooked")?
            .as_str()?;
        text.push_str(cooked);
        if let Some(expression) = expressions.get(idx) {
            let expression = expression.as_node()?;
            if expression.kind() != "Identifier" {
                return None;
            }
            text.push_str(&format!("${{{}}}", expression.get("name")?.as_str()?));
        }
    }
    Some(text)
}

fn unary_value(unary: &Node) -> Option<AriaValue> {
    let operator = unary.get("operator")?.as_str()?;
    let argument = expression_value(unary.child("argument")?)?;
    match (operator, argument) {
        ("!", argument) => Some(AriaValue::Boolean(!is_truthy(&argument))),
        ("-", AriaValue::Number(n)) => Some(AriaValue::Number(-n)),
        ("+", AriaValue::Number(n)) => Some(AriaValue::Number(n)),
        ("~", AriaValue::Number(n)) if n.is_finite() => {
            Some(AriaValue::Number(f64::from(!(n.trunc() as i64 as i32))))
        }
        _ => None,
    }
}

fn is_truthy(value: &AriaValue) -> bool {
    match value {
        AriaValue::Undefined => false,
        AriaValue::Boolean(value) => *value,
        AriaValue::String(value) => !value.is_empty(),
        AriaValue::Number(value) => *value != 0.0 && !value.is_nan(),
    }
}
