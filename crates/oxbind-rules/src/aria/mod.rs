//! ARIA property type rules
//!
//! The table itself lives in [`generated`] and is produced by
//! `oxbind-devtools aria-table` from the authored attribute list. This module
//! gives it a lookup API and the per-type value checks.

mod generated;

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

pub(crate) use generated::ARIA_PROP_TYPES;

/// Value type of an ARIA property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AriaPropType {
    String,
    Id,
    Integer,
    Number,
    Boolean,
    /// `true`, `false` or `"mixed"`
    Tristate,
    Token,
    TokenList,
    IdList,
}

impl AriaPropType {
    /// Type tag as written in the authored table
    pub fn tag(self) -> &'static str {
        match self {
            AriaPropType::String => "string",
            AriaPropType::Id => "id",
            AriaPropType::Integer => "integer",
            AriaPropType::Number => "number",
            AriaPropType::Boolean => "boolean",
            AriaPropType::Tristate => "tristate",
            AriaPropType::Token => "token",
            AriaPropType::TokenList => "tokenlist",
            AriaPropType::IdList => "idlist",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Some(match tag {
            "string" => AriaPropType::String,
            "id" => AriaPropType::Id,
            "integer" => AriaPropType::Integer,
            "number" => AriaPropType::Number,
            "boolean" => AriaPropType::Boolean,
            "tristate" => AriaPropType::Tristate,
            "token" => AriaPropType::Token,
            "tokenlist" => AriaPropType::TokenList,
            "idlist" => AriaPropType::IdList,
            _ => return None,
        })
    }

    /// Name of the enum variant, as emitted into generated source
    pub fn variant_name(self) -> &'static str {
        match self {
            AriaPropType::String => "String",
            AriaPropType::Id => "Id",
            AriaPropType::Integer => "Integer",
            AriaPropType::Number => "Number",
            AriaPropType::Boolean => "Boolean",
            AriaPropType::Tristate => "Tristate",
            AriaPropType::Token => "Token",
            AriaPropType::TokenList => "TokenList",
            AriaPropType::IdList => "IdList",
        }
    }
}

impl fmt::Display for AriaPropType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Type rule for one ARIA property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AriaPropTypeRule {
    pub prop_type: AriaPropType,
    /// Permitted tokens, lowercase; booleans are tracked separately
    pub allowed_values: Option<&'static [&'static str]>,
    /// An explicit `undefined` is valid
    pub allow_undefined: bool,
    /// `true` and `false` are valid alongside `allowed_values`
    pub allow_boolean_values: bool,
}

/// A statically known attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum AriaValue {
    Undefined,
    Boolean(bool),
    String(String),
    Number(f64),
}

impl fmt::Display for AriaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AriaValue::Undefined => f.write_str("undefined"),
            AriaValue::Boolean(value) => write!(f, "{value}"),
            AriaValue::String(value) => write!(f, "{value:?}"),
            AriaValue::Number(value) => write!(f, "{value}"),
        }
    }
}

impl AriaPropTypeRule {
    /// Whether `value` is valid for a property of this type
    pub fn accepts(&self, value: &AriaValue) -> bool {
        let text = match value {
            AriaValue::Undefined => return self.allow_undefined,
            AriaValue::Boolean(_) => {
                return match self.prop_type {
                    AriaPropType::Boolean | AriaPropType::Tristate => true,
                    AriaPropType::Token => self.allow_boolean_values,
                    _ => false,
                };
            }
            AriaValue::Number(number) => {
                return matches!(self.prop_type, AriaPropType::Integer | AriaPropType::Number)
                    && !number.is_nan();
            }
            AriaValue::String(text) => text,
        };

        match self.prop_type {
            AriaPropType::Boolean => false,
            AriaPropType::String | AriaPropType::Id | AriaPropType::IdList => true,
            AriaPropType::Tristate => text == "mixed",
            AriaPropType::Integer | AriaPropType::Number => is_numeric(text),
            AriaPropType::Token => self.allows_token(text),
            AriaPropType::TokenList => text.split(' ').all(|token| self.allows_token(token)),
        }
    }

    fn allows_token(&self, token: &str) -> bool {
        let token = token.to_lowercase();
        self.allowed_values
            .is_some_and(|values| values.contains(&token.as_str()))
    }

    /// What a valid value for `name` looks like
    pub fn expectation(&self, name: &str) -> String {
        match self.prop_type {
            AriaPropType::Tristate => {
                format!("The value for {name} must be a boolean or the string \"mixed\".")
            }
            AriaPropType::Token => format!(
                "The value for {name} must be a single token from the following: {}.",
                self.permitted_list()
            ),
            AriaPropType::TokenList => format!(
                "The value for {name} must be a list of one or more tokens from the following: {}.",
                self.permitted_list()
            ),
            AriaPropType::IdList => format!(
                "The value for {name} must be a list of strings that represent DOM element IDs (idlist)"
            ),
            AriaPropType::Id => {
                format!("The value for {name} must be a string that represents a DOM element ID")
            }
            other => format!("The value for {name} must be a {other}."),
        }
    }

    fn permitted_list(&self) -> String {
        let mut permitted: Vec<&str> = self.allowed_values.unwrap_or_default().to_vec();
        if self.allow_boolean_values {
            permitted.extend(["true", "false"]);
        }
        permitted.join(", ")
    }
}

/// Whether `text` converts to a number other than NaN under ECMAScript
/// `ToNumber` rules
fn is_numeric(text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return true;
    }
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = text.strip_prefix(prefix) {
            return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
        }
    }
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned == "Infinity" {
        return true;
    }
    // `f64::from_str` also takes `inf` and `nan`, which ECMAScript does not
    unsigned
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
        && text.parse::<f64>().is_ok()
}

static INDEX: Lazy<HashMap<&'static str, &'static AriaPropTypeRule>> = Lazy::new(|| {
    ARIA_PROP_TYPES
        .iter()
        .map(|(name, rule)| (*name, rule))
        .collect()
});

/// Type rule for the ARIA property `name` (lowercase)
pub fn aria_prop_type(name: &str) -> Option<&'static AriaPropTypeRule> {
    INDEX.get(name).copied()
}

/// Every known ARIA property, in definition order
pub fn aria_prop_names() -> impl Iterator<Item = &'static str> {
    ARIA_PROP_TYPES.iter().map(|(name, _)| *name)
}
