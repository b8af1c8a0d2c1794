use std::sync::LazyLock;

use regex::Regex;
use romi_core::FieldPath;
use romi_core::models::draft::RawValue;

use crate::FieldRule;

/// Free-form text accepted as entered (onset date and time).
pub struct FreeText(pub FieldPath);

impl FieldRule for FreeText {
    fn field(&self) -> FieldPath {
        self.0
    }

    fn check(&self, _value: RawValue<'_>) -> Result<(), &'static str> {
        Ok(())
    }
}

// Local part may not start with a dot or hold consecutive dots; both are
// checked outside the pattern since `regex` has no lookaround.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .unwrap_or_else(|e| panic!("email pattern must compile: {e}"))
});

pub fn is_valid_email(address: &str) -> bool {
    !address.starts_with('.') && !address.contains("..") && EMAIL_PATTERN.is_match(address)
}

/// Contact email: optional, an empty string means "not provided".
pub struct Email;

impl FieldRule for Email {
    fn field(&self) -> FieldPath {
        FieldPath::Email
    }

    fn check(&self, value: RawValue<'_>) -> Result<(), &'static str> {
        match value {
            RawValue::Text("") => Ok(()),
            RawValue::Text(address) if is_valid_email(address) => Ok(()),
            _ => Err("Email inválido"),
        }
    }
}

/// Consent must be given explicitly.
pub struct Consent;

impl FieldRule for Consent {
    fn field(&self) -> FieldPath {
        FieldPath::Consent
    }

    fn check(&self, value: RawValue<'_>) -> Result<(), &'static str> {
        match value {
            RawValue::Flag(true) => Ok(()),
            _ => Err("Necesitamos tu autorización"),
        }
    }
}
