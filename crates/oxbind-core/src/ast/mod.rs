//! Realized syntax tree
//!
//! The engine hands the program over as JSON. That encoding has no room for
//! arbitrary-precision integers or regular expressions, so `Literal` nodes
//! carry their source form in side-channel fields (`bigint`, `regex`) next to
//! a `null` placeholder `value`. Decoding into [`AstValue`] rebuilds the native
//! values while the document is being read (see [`de`]).
//!
//! Only `Literal` gets a dedicated variant. Every other node keeps its fields
//! as decoded, in source key order.

mod de;
mod regexp;
mod ser;

use indexmap::IndexMap;
use num_bigint::BigInt;
use serde::Deserialize;

pub use regexp::{RegExpFlags, RegExpValue, RegexSource};

/// Key order is preserved so re-serialized nodes read like the engine's output
pub type Fields = IndexMap<String, AstValue>;

/// Any value found in the decoded program
#[derive(Debug, Clone, PartialEq)]
pub enum AstValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Array(Vec<AstValue>),
    /// An object without a `type` discriminator
    Object(Fields),
    Node(Box<Node>),
}

impl AstValue {
    pub fn is_null(&self) -> bool {
        matches!(self, AstValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AstValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AstValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            AstValue::Number(n) => n.as_u64(),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[AstValue]> {
        match self {
            AstValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Fields> {
        match self {
            AstValue::Object(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            AstValue::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Short description used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            AstValue::Null => "null",
            AstValue::Bool(_) => "a boolean",
            AstValue::Number(_) => "a number",
            AstValue::String(_) => "a string",
            AstValue::Array(_) => "an array",
            AstValue::Object(_) => "an object",
            AstValue::Node(_) => "a node",
        }
    }

    fn for_each_node<'a>(&'a self, f: &mut dyn FnMut(&'a Node)) {
        match self {
            AstValue::Node(node) => node.walk(f),
            AstValue::Array(items) => items.iter().for_each(|item| item.for_each_node(f)),
            AstValue::Object(fields) => fields.values().for_each(|value| value.for_each_node(f)),
            _ => {}
        }
    }
}

/// A syntax tree node
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Literal(Literal),
    Element(Element),
}

impl Node {
    /// The node's `type` discriminator
    pub fn kind(&self) -> &str {
        match self {
            Node::Literal(_) => Literal::KIND,
            Node::Element(element) => &element.kind,
        }
    }

    /// Field lookup. A literal's `value`, `raw`, `bigint` and `regex` are
    /// exposed through [`Literal`] instead.
    pub fn get(&self, field: &str) -> Option<&AstValue> {
        match self {
            Node::Literal(literal) => literal.fields.get(field),
            Node::Element(element) => element.fields.get(field),
        }
    }

    /// Child node stored directly under `field`
    pub fn child(&self, field: &str) -> Option<&Node> {
        self.get(field).and_then(AstValue::as_node)
    }

    pub fn start(&self) -> Option<u32> {
        self.offset("start")
    }

    pub fn end(&self) -> Option<u32> {
        self.offset("end")
    }

    fn offset(&self, field: &str) -> Option<u32> {
        self.get(field)
            .and_then(AstValue::as_u64)
            .and_then(|n| u32::try_from(n).ok())
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Node::Literal(literal) => Some(literal),
            Node::Element(_) => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Literal(_) => None,
        }
    }

    /// Pre-order traversal over this node and every node below it
    pub fn walk<'a>(&'a self, f: &mut dyn FnMut(&'a Node)) {
        f(self);
        let fields = match self {
            Node::Literal(literal) => &literal.fields,
            Node::Element(element) => &element.fields,
        };
        for value in fields.values() {
            value.for_each_node(f);
        }
    }

    /// All nodes below and including this one whose kind equals `kind`
    pub fn descendants_of_kind<'a>(&'a self, kind: &str) -> Vec<&'a Node> {
        let mut found = Vec::new();
        self.walk(&mut |node| {
            if node.kind() == kind {
                found.push(node);
            }
        });
        found
    }
}

/// Any non-literal node
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub kind: String,
    /// All decoded fields, including `type`
    pub fields: Fields,
}

/// A literal constant
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub value: LiteralValue,
    pub raw: Option<String>,
    /// Numeral source of a big-integer literal, without the `n` suffix
    pub bigint: Option<String>,
    pub regex: Option<RegexSource>,
    /// Remaining fields (`type`, `start`, `end`, ...)
    pub fields: Fields,
}

impl Literal {
    pub const KIND: &'static str = "Literal";

    pub fn is_bigint(&self) -> bool {
        self.bigint.is_some()
    }

    pub fn is_regex(&self) -> bool {
        self.regex.is_some()
    }
}

/// Native value of a literal
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// The `null` literal, or a regex the runtime could not compile
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    BigInt(BigInt),
    RegExp(RegExpValue),
}

impl LiteralValue {
    pub fn is_null(&self) -> bool {
        matches!(self, LiteralValue::Null)
    }

    pub fn as_bigint(&self) -> Option<&BigInt> {
        match self {
            LiteralValue::BigInt(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_regexp(&self) -> Option<&RegExpValue> {
        match self {
            LiteralValue::RegExp(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            LiteralValue::String(value) => Some(value),
            _ => None,
        }
    }
}

/// Decode a program and repair its literals in one pass.
///
/// Nesting depth is unbounded; the stack grows on the heap as needed.
pub fn decode_program(json: &str) -> crate::Result<Node> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    deserializer.disable_recursion_limit();
    let value = AstValue::deserialize(serde_stacker::Deserializer::new(&mut deserializer))
        .map_err(crate::OxbindError::decode_error)?;
    deserializer.end().map_err(crate::OxbindError::decode_error)?;
    match value {
        AstValue::Node(node) => Ok(*node),
        other => Err(crate::OxbindError::InvalidRoot {
            found: other.type_name(),
        }),
    }
}
