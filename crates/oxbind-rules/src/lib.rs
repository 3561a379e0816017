//! oxbind rules
//!
//! Accessibility checks over realized syntax trees, driven by the generated
//! ARIA property type table.

pub mod aria;
pub mod jsx_a11y;

pub use aria::{AriaPropType, AriaPropTypeRule, AriaValue, aria_prop_names, aria_prop_type};
pub use jsx_a11y::{ARIA_PROPTYPES, check_aria_proptypes, check_program};
