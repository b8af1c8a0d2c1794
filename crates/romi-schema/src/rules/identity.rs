use romi_core::FieldPath;
use romi_core::models::draft::RawValue;
use romi_core::models::report::Sex;

use crate::FieldRule;

pub const FULL_NAME_MIN_CHARS: usize = 2;
pub const SEX_REQUIRED: &str = "Selecciona una opción";

/// Full name: at least two characters.
pub struct FullName;

impl FieldRule for FullName {
    fn field(&self) -> FieldPath {
        FieldPath::FullName
    }

    fn check(&self, value: RawValue<'_>) -> Result<(), &'static str> {
        match value {
            RawValue::Text(name) if name.chars().count() >= FULL_NAME_MIN_CHARS => Ok(()),
            _ => Err("Ingresa tu nombre completo"),
        }
    }
}

/// Sex: one of the three declared options.
pub struct SexChoice;

impl FieldRule for SexChoice {
    fn field(&self) -> FieldPath {
        FieldPath::Sex
    }

    fn check(&self, value: RawValue<'_>) -> Result<(), &'static str> {
        match value {
            RawValue::Text(raw) if raw.parse::<Sex>().is_ok() => Ok(()),
            _ => Err(SEX_REQUIRED),
        }
    }
}
