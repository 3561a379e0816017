// @generated by `oxbind-devtools aria-table`. Do not edit by hand.
// Source: crates/oxbind-devtools/data/aria_props.json

use super::{AriaPropType, AriaPropTypeRule};

#[rustfmt::skip]
pub(crate) const ARIA_PROP_TYPES: &[(&str, AriaPropTypeRule)] = &[
    ("aria-activedescendant", AriaPropTypeRule { prop_type: AriaPropType::Id, allowed_values: None, allow_undefined: false, allow_boolean_values: false }),
    ("aria-atomic", AriaPropTypeRule { prop_type: AriaPropType::Boolean, allowed_values: None, allow_undefined: false, allow_boolean_values: false }),
    ("aria-autocomplete", AriaPropTypeRule { prop_type: AriaPropType::Token, allowed_values: Some(&["inline", "list", "both", "none"]), allow_undefined: false, allow_boolean_values: false }),
    ("aria-braillelabel", AriaPropTypeRule { prop_type: AriaPropType::String, allowed_values: None, allow_undefined: false, allow_boolean_values: false }),
    ("aria-brailleroledescription", AriaPropTypeRule { prop_type: AriaPropType::String, allowed_values: None, allow_undefined: false, allow_boolean_values: false }),
    ("aria-busy", AriaPropTypeRule { prop_type: AriaPropType::Boolean, allowed_values: None, allow_undefined: false, allow_boolean_values: false }),
    ("aria-checked", AriaPropTypeRule { prop_type: AriaPropType::Tristate, allowed_values: None, allow_undefined: false, allow_boolean_values: false }),
    ("aria-colcount", AriaPropTypeRule { prop_type: AriaPropType::Integer, allowed_values: None, allow_undefined: false, allow_boolean_values: false }),
    ("aria-colindex", AriaPropTypeRule { prop_type: AriaPropType::Integer, allowed_values: None, allow_undefined: false, allow_boolean_values: false }),
    ("aria-colspan", AriaPropTypeRule { prop_type: AriaPropType::Integer, allowed_values: None, allow_undefined: false, allow_boolean_values: false }),
    ("aria-controls", AriaPropTypeRule { prop_type: AriaPropType::IdList, allowed_values: None, allow_undefined: false, allow_boolean_values: false }),
    ("aria-current", AriaPropTypeRule { prop_type: AriaPropType::Token, allowed_values: Some(&["page", "step", "location", "date", "time"]), allow_undefined: false, allow_boolean_values: true }),
    ("aria-describedby", AriaPropTypeRule { prop_type: AriaPropType::IdList, allowed_values: None, allow_undefined: false, allow_boolean_values: false }),
    ("aria-description", AriaPropTypeRule { prop_type: AriaPropType::String, allowed_values: None, allow_undefined: false, allow_boolean_values: false }),
    ("aria-details", AriaPropTypeRule { prop_type: AriaPropType::Id, allowed_values: None, allow_undefined: false, allow_boolean_values: false }),
    ("aria-disabled", AriaPropTypeRule { prop_type: AriaPropType::Boolean, allowed_values: None, allow_undefined: false, allow_boolean_values: false }),
    ("aria-dropeffect", AriaPropTypeRule { prop_type: AriaPropType::TokenList, allowed_values: Some(&["copy", "execute", "link", "move", "none", "popup"]), allow_undefined: false, allow_boolean_values: false }),
    ("aria-errormessage", AriaPropTypeRule { prop_type: AriaPropType::Id, allowed_values: None, allow_undefined: false, allow_boolean_values: false }),
    ("aria-expanded", AriaPropTypeRule { prop_type: AriaPropType::Boolean, allowed_values: None, allow_undefined: true, allow_boolean_values: false }),
    ("aria-flowto", AriaPropTypeRule { prop_type: AriaPropType::IdList, allowed_values: None, allow_undefined: false, allow_boolean_values: false }),
    ("aria-grabbed", AriaPropTypeRule { prop_type: AriaPropType::Boolean, allowed_values: None, allow_undefined: true, allow_boolean_values: false }),
    ("aria-haspopup", AriaPropTypeRule { prop_type: AriaPropType::Token, allowed_values: Some(&["menu", "listbox", "tree", "grid", "dialog"]), allow_undefined: false, allow_boolean_values: true }),
    ("aria-hidden", AriaPropTypeRule { prop_type: AriaPropType::Boolean, allowed_values: None, allow_undefined: true, allow_boolean_values: false }),
    ("aria-invalid", AriaPropTypeRule { prop_type: AriaPropType::Token, allowed_values: Some(&["grammar", "spelling"]), allow_undefined: false, allow_boolean_values: true }),
    ("aria-keyshortcuts", AriaPropTypeRule { prop_type: AriaPropType::String, allowed_values: None, allow_undefined: false, allow_boolean_values: false }),
    ("aria-label", AriaPropTypeRule { prop_type: AriaPropType::String, allowed_values: None, allow_undefined: false, allow_boolean_values: false }),
    ("aria-labelledby", AriaPropTypeRule { prop_type: AriaPropType::IdList, allowed_values: None, allow_undefined: false, allow_boolean_values: false }),
    ("aria-level", AriaPropTypeRule { prop_type: AriaPropType::Integer, allowed_values: None, allow_undefined: false, allow_boolean_values: false }),
    ("aria-live", AriaPropTypeRule { prop_type: AriaPropType::Token, allowed_values: Some(&["assertive", "off", "polite"]), allow_undefined: false, allow_boolean_values: false }),
    ("aria-modal", AriaPropTypeRule { prop_type: AriaPropType::Boolean, allowed_values: None, allow_undefined: false, allow_boolean_values: false }),
    ("aria-multiline", AriaPropTypeRule { prop_type: AriaPropType::Boolean, allowed_values: None, allow_undefined: false, allow_boolean_values: false }),
    ("aria-multiselectable", AriaPropTypeRule { prop_type: AriaPropType::Boolean, allowed_values: None, allow_undefined: false, allow_boolean_values: false }),
    ("aria-orientation", AriaPropTypeRule { prop_type: AriaPropType::Token, allowed_values: Some(&["vertical", "undefined", "horizontal"]), allow_undefined: false, allow_boolean_values: false }),
    ("aria-owns", AriaPropTypeRule { prop_type: AriaPropType::IdList, allowed_values: None, allow_undefined: false, allow_boolean_values: false }),
    ("aria-placeholder", AriaPropTypeRule { prop_type: AriaPropType::String, allowed_values: None, allow_undefined: false, allow_boolean_values: false }),
    ("aria-posinset", AriaPropTypeRule { prop_type: AriaPropType::Integer, allowed_values: None, allow_undefined: false, allow_boolean_values: false }),
    ("aria-pressed", AriaPropTypeRule { prop_type: AriaPropType::Tristate, allowed_values: None, allow_undefined: false, allow_boolean_values: false }),
    ("aria-readonly", AriaPropTypeRule { prop_type: AriaPropType::Boolean, allowed_values: None, allow_undefined: false, allow_boolean_values: false }),
    ("aria-relevant", AriaPropTypeRule { prop_type: AriaPropType::TokenList, allowed_values: Some(&["additions", "all", "removals", "text"]), allow_undefined: false, allow_boolean_values: false }),
    ("aria-required", AriaPropTypeRule { prop_type: AriaPropType::Boolean, allowed_values: None, allow_undefined: false, allow_boolean_values: false }),
    ("aria-roledescription", AriaPropTypeRule { prop_type: AriaPropType::String, allowed_values: None, allow_undefined: false, allow_boolean_values: false }),
    ("aria-rowcount", AriaPropTypeRule { prop_type: AriaPropType::Integer, allowed_values: None, allow_undefined: false, allow_boolean_values: false }),
    ("aria-rowindex", AriaPropTypeRule { prop_type: AriaPropType::Integer, allowed_values: None, allow_undefined: false, allow_boolean_values: false }),
    ("aria-rowspan", AriaPropTypeRule { prop_type: AriaPropType::Integer, allowed_values: None, allow_undefined: false, allow_boolean_values: false }),
    ("aria-selected", AriaPropTypeRule { prop_type: AriaPropType::Boolean, allowed_values: None, allow_undefined: true, allow_boolean_values: false }),
    ("aria-setsize", AriaPropTypeRule { prop_type: AriaPropType::Integer, allowed_values: None, allow_undefined: false, allow_boolean_values: false }),
    ("aria-sort", AriaPropTypeRule { prop_type: AriaPropType::Token, allowed_values: Some(&["ascending", "descending", "none", "other"]), allow_undefined: false, allow_boolean_values: false }),
    ("aria-valuemax", AriaPropTypeRule { prop_type: AriaPropType::Number, allowed_values: None, allow_undefined: false, allow_boolean_values: false }),
    ("aria-valuemin", AriaPropTypeRule { prop_type: AriaPropType::Number, allowed_values: None, allow_undefined: false, allow_boolean_values: false }),
    ("aria-valuenow", AriaPropTypeRule { prop_type: AriaPropType::Number, allowed_values: None, allow_undefined: false, allow_boolean_values: false }),
    ("aria-valuetext", AriaPropTypeRule { prop_type: AriaPropType::String, allowed_values: None, allow_undefined: false, allow_boolean_values: false }),
];
