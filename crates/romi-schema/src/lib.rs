//! romi-schema
//!
//! The patient report contract. Each validated field has one rule; the rules
//! live in a static table in declaration order and are composed by
//! [`validate_report`], which collects every failure in a single pass.
//! Invalid input is an ordinary result here, never a panic.

pub mod error;
pub mod range;
pub mod rules;
pub mod validate;

use romi_core::FieldPath;
use romi_core::models::draft::RawValue;

pub use error::{FieldError, SchemaError};
pub use range::{NumberRange, parse_optional_number};
pub use validate::{validate_field, validate_report};

/// Trait implemented by each field rule.
pub trait FieldRule: Send + Sync {
    /// The field this rule judges. For the symptom group this is
    /// [`FieldPath::Symptoms`].
    fn field(&self) -> FieldPath;

    /// Check a raw value. On failure, returns the message of the first
    /// constraint that fails, in the order required/type, min, max, custom
    /// refinement.
    fn check(&self, value: RawValue<'_>) -> Result<(), &'static str>;
}

/// All rules, in declaration order.
pub fn all_rules() -> &'static [Box<dyn FieldRule>] {
    static RULES: std::sync::LazyLock<Vec<Box<dyn FieldRule>>> = std::sync::LazyLock::new(|| {
        vec![
            Box::new(rules::identity::FullName),
            Box::new(rules::measurements::AGE),
            Box::new(rules::identity::SexChoice),
            Box::new(rules::symptoms::SymptomGroup),
            Box::new(rules::measurements::PAIN_LEVEL),
            Box::new(rules::measurements::TEMPERATURE),
            Box::new(rules::contact::FreeText(FieldPath::OnsetDate)),
            Box::new(rules::contact::FreeText(FieldPath::OnsetTime)),
            Box::new(rules::contact::Email),
            Box::new(rules::contact::Consent),
        ]
    });
    &RULES
}

/// Look up the rule for a field. Group members and unconstrained fields
/// have none.
pub fn get_rule(field: FieldPath) -> Option<&'static dyn FieldRule> {
    all_rules()
        .iter()
        .find(|r| r.field() == field)
        .map(|r| r.as_ref())
}
