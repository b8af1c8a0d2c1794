use romi_core::FieldPath;
use romi_core::models::draft::RawValue;

use crate::range::{NumberRange, parse_optional_number};
use crate::FieldRule;

/// A numeric input checked against a [`NumberRange`].
///
/// Raw text is normalized with [`parse_optional_number`] first. When nothing
/// usable was entered, a required measurement fails with its type message
/// and an optional one passes as absent.
pub struct MeasurementRule {
    pub field: FieldPath,
    pub range: NumberRange,
    pub required: bool,
    pub messages: MeasurementMessages,
}

pub struct MeasurementMessages {
    pub invalid: &'static str,
    pub not_integer: &'static str,
    pub below_min: &'static str,
    pub above_max: &'static str,
}

pub const AGE: MeasurementRule = MeasurementRule {
    field: FieldPath::Age,
    range: NumberRange {
        min: 0.0,
        max: 120.0,
        integer: true,
    },
    required: true,
    messages: MeasurementMessages {
        invalid: "Ingresa una edad válida",
        not_integer: "La edad debe ser un número entero",
        below_min: "Edad mínima 0",
        above_max: "Edad máxima 120",
    },
};

pub const PAIN_LEVEL: MeasurementRule = MeasurementRule {
    field: FieldPath::PainLevel,
    range: NumberRange {
        min: 1.0,
        max: 10.0,
        integer: true,
    },
    required: true,
    messages: MeasurementMessages {
        invalid: "Selecciona un nivel de dolor",
        not_integer: "El nivel de dolor debe ser un número entero",
        below_min: "Mínimo 1",
        above_max: "Máximo 10",
    },
};

/// Body temperature in °C; optional.
pub const TEMPERATURE: MeasurementRule = MeasurementRule {
    field: FieldPath::Temperature,
    range: NumberRange {
        min: 34.0,
        max: 43.0,
        integer: false,
    },
    required: false,
    messages: MeasurementMessages {
        invalid: "Ingresa una temperatura válida",
        not_integer: "Ingresa una temperatura válida",
        below_min: "Mín 34°C",
        above_max: "Máx 43°C",
    },
};

impl FieldRule for MeasurementRule {
    fn field(&self) -> FieldPath {
        self.field
    }

    fn check(&self, value: RawValue<'_>) -> Result<(), &'static str> {
        let RawValue::Text(raw) = value else {
            return Err(self.messages.invalid);
        };
        let Some(n) = parse_optional_number(raw) else {
            return if self.required {
                Err(self.messages.invalid)
            } else {
                Ok(())
            };
        };
        if self.range.contains(n) {
            return Ok(());
        }
        if self.range.integer && n.fract() != 0.0 {
            Err(self.messages.not_integer)
        } else if n < self.range.min {
            Err(self.messages.below_min)
        } else {
            Err(self.messages.above_max)
        }
    }
}
