//! Re-encoding to the interchange form
//!
//! Big integers and regular expressions go back to a `null` value next to
//! their `bigint` / `regex` source, which is what the engine emitted.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::{AstValue, Element, Literal, LiteralValue, Node};

impl Serialize for AstValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AstValue::Null => serializer.serialize_unit(),
            AstValue::Bool(value) => serializer.serialize_bool(*value),
            AstValue::Number(number) => number.serialize(serializer),
            AstValue::String(value) => serializer.serialize_str(value),
            AstValue::Array(items) => items.serialize(serializer),
            AstValue::Object(fields) => fields.serialize(serializer),
            AstValue::Node(node) => node.serialize(serializer),
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Literal(literal) => literal.serialize(serializer),
            Node::Element(element) => element.serialize(serializer),
        }
    }
}

impl Serialize for Element {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

impl Serialize for Literal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        match &self.value {
            LiteralValue::Null | LiteralValue::BigInt(_) | LiteralValue::RegExp(_) => {
                map.serialize_entry("value", &())?
            }
            LiteralValue::Boolean(value) => map.serialize_entry("value", value)?,
            LiteralValue::Number(value) => map.serialize_entry("value", value)?,
            LiteralValue::String(value) => map.serialize_entry("value", value)?,
        }
        if let Some(raw) = &self.raw {
            map.serialize_entry("raw", raw)?;
        }
        if let Some(bigint) = &self.bigint {
            map.serialize_entry("bigint", bigint)?;
        }
        if let Some(regex) = &self.regex {
            map.serialize_entry("regex", regex)?;
        }
        map.end()
    }
}
