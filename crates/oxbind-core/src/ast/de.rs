//! Decoding with literal repair
//!
//! `serde_json` drives [`AstValueVisitor`] bottom-up: a map's entries are fully
//! decoded before the map itself is assembled, so a `Literal` is repaired the
//! moment its object closes and the tree is never walked a second time.

use std::fmt;

use num_bigint::BigInt;
use num_traits::Num;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

use super::{AstValue, Element, Fields, Literal, LiteralValue, Node, RegExpValue, RegexSource};

impl<'de> Deserialize<'de> for AstValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(AstValueVisitor)
    }
}

struct AstValueVisitor;

impl<'de> Visitor<'de> for AstValueVisitor {
    type Value = AstValue;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an ESTree-style JSON value")
    }

    fn visit_bool<E>(self, value: bool) -> Result<AstValue, E> {
        Ok(AstValue::Bool(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<AstValue, E> {
        Ok(AstValue::Number(value.into()))
    }

    fn visit_u64<E>(self, value: u64) -> Result<AstValue, E> {
        Ok(AstValue::Number(value.into()))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<AstValue, E> {
        serde_json::Number::from_f64(value)
            .map(AstValue::Number)
            .ok_or_else(|| E::custom(format!("non-finite number {value}")))
    }

    fn visit_str<E>(self, value: &str) -> Result<AstValue, E> {
        Ok(AstValue::String(value.to_owned()))
    }

    fn visit_string<E>(self, value: String) -> Result<AstValue, E> {
        Ok(AstValue::String(value))
    }

    fn visit_unit<E>(self) -> Result<AstValue, E> {
        Ok(AstValue::Null)
    }

    fn visit_none<E>(self) -> Result<AstValue, E> {
        Ok(AstValue::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<AstValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        Deserialize::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<AstValue, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(AstValue::Array(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<AstValue, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut fields = Fields::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, AstValue>()? {
            fields.insert(key, value);
        }
        assemble(fields).map_err(de::Error::custom)
    }
}

/// Turn a decoded object into a node when it carries a `type` discriminator
fn assemble(fields: Fields) -> Result<AstValue, String> {
    let kind = match fields.get("type") {
        Some(AstValue::String(kind)) => kind.clone(),
        _ => return Ok(AstValue::Object(fields)),
    };
    let node = if kind == Literal::KIND {
        Node::Literal(repair_literal(fields)?)
    } else {
        Node::Element(Element { kind, fields })
    };
    Ok(AstValue::Node(Box::new(node)))
}

fn repair_literal(mut fields: Fields) -> Result<Literal, String> {
    let encoded = fields.shift_remove("value").unwrap_or(AstValue::Null);
    let raw = match fields.shift_remove("raw") {
        None | Some(AstValue::Null) => None,
        Some(AstValue::String(raw)) => Some(raw),
        Some(other) => return Err(format!("Literal `raw` must be a string, found {}", other.type_name())),
    };
    let bigint = match fields.shift_remove("bigint") {
        None | Some(AstValue::Null) => None,
        Some(AstValue::String(numeral)) => Some(numeral),
        Some(other) => {
            return Err(format!("Literal `bigint` must be a string, found {}", other.type_name()));
        }
    };
    let regex = match fields.shift_remove("regex") {
        None | Some(AstValue::Null) => None,
        Some(AstValue::Object(source)) => Some(regex_source(source)?),
        Some(other) => {
            return Err(format!("Literal `regex` must be an object, found {}", other.type_name()));
        }
    };

    let value = match encoded {
        AstValue::Null => {
            if let Some(numeral) = &bigint {
                LiteralValue::BigInt(parse_bigint(numeral)?)
            } else if let Some(source) = &regex {
                match RegExpValue::compile(source) {
                    Some(compiled) => LiteralValue::RegExp(compiled),
                    None => {
                        tracing::trace!(
                            pattern = %source.pattern,
                            flags = %source.flags,
                            "regex literal left unrealized"
                        );
                        LiteralValue::Null
                    }
                }
            } else {
                LiteralValue::Null
            }
        }
        AstValue::Bool(value) => LiteralValue::Boolean(value),
        AstValue::Number(number) => LiteralValue::Number(number.as_f64().unwrap_or(f64::NAN)),
        AstValue::String(value) => LiteralValue::String(value),
        other => {
            return Err(format!("Literal `value` must be a primitive, found {}", other.type_name()));
        }
    };

    Ok(Literal {
        value,
        raw,
        bigint,
        regex,
        fields,
    })
}

fn regex_source(mut source: Fields) -> Result<RegexSource, String> {
    let mut take = |name: &str| match source.shift_remove(name) {
        Some(AstValue::String(text)) => Ok(text),
        _ => Err(format!("Literal `regex.{name}` must be a string")),
    };
    Ok(RegexSource {
        pattern: take("pattern")?,
        flags: take("flags")?,
    })
}

/// Parse a big-integer numeral. Radix prefixes follow the source language.
fn parse_bigint(numeral: &str) -> Result<BigInt, String> {
    let (digits, radix) = match numeral.get(..2) {
        Some("0x" | "0X") => (&numeral[2..], 16),
        Some("0o" | "0O") => (&numeral[2..], 8),
        Some("0b" | "0B") => (&numeral[2..], 2),
        _ => (numeral, 10),
    };
    // `from_str_radix` tolerates a sign and `_` separators; the engine emits neither
    let well_formed = !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
    if !well_formed {
        return Err(format!("Literal `bigint` is not a valid numeral: {numeral:?}"));
    }
    BigInt::from_str_radix(digits, radix)
        .map_err(|err| format!("Literal `bigint` is not a valid numeral: {numeral:?} ({err})"))
}
