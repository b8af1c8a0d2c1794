use romi_core::{FieldPath, Symptom};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    #[default]
    Identificacion,
    Sintomas,
    Mediciones,
    Confirmar,
}

const IDENTIFICATION_FIELDS: &[FieldPath] = &[
    FieldPath::FullName,
    FieldPath::Age,
    FieldPath::Sex,
    FieldPath::Email,
];

const SYMPTOM_FIELDS: &[FieldPath] = &[
    FieldPath::Symptom(Symptom::Headache),
    FieldPath::Symptom(Symptom::Fever),
    FieldPath::Symptom(Symptom::Cough),
    FieldPath::Symptom(Symptom::SoreThroat),
    FieldPath::Symptom(Symptom::Nausea),
    FieldPath::Symptom(Symptom::Diarrhea),
    FieldPath::Symptom(Symptom::Fatigue),
    FieldPath::Symptom(Symptom::ShortnessOfBreath),
    FieldPath::SymptomsOther,
    FieldPath::PainLevel,
];

const MEASUREMENT_FIELDS: &[FieldPath] = &[
    FieldPath::Temperature,
    FieldPath::OnsetDate,
    FieldPath::OnsetTime,
    FieldPath::Notes,
];

const CONFIRMATION_FIELDS: &[FieldPath] = &[FieldPath::Consent];

impl Step {
    pub const ALL: [Step; 4] = [
        Step::Identificacion,
        Step::Sintomas,
        Step::Mediciones,
        Step::Confirmar,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Identificacion => "Identificación",
            Step::Sintomas => "Síntomas",
            Step::Mediciones => "Mediciones",
            Step::Confirmar => "Confirmar",
        }
    }

    /// Form controls shown on this step.
    pub fn fields(self) -> &'static [FieldPath] {
        match self {
            Step::Identificacion => IDENTIFICATION_FIELDS,
            Step::Sintomas => SYMPTOM_FIELDS,
            Step::Mediciones => MEASUREMENT_FIELDS,
            Step::Confirmar => CONFIRMATION_FIELDS,
        }
    }

    /// Rule targets checked before leaving this step, in declaration order.
    pub fn validated_fields(self) -> Vec<FieldPath> {
        FieldPath::VALIDATED
            .into_iter()
            .filter(|target| {
                self.fields()
                    .iter()
                    .any(|f| f.validation_target() == *target)
            })
            .collect()
    }

    /// The following step; the last step is its own successor.
    pub fn next(self) -> Step {
        Step::ALL[(self.index() + 1).min(Step::ALL.len() - 1)]
    }

    /// The preceding step; the first step is its own predecessor.
    pub fn prev(self) -> Step {
        Step::ALL[self.index().saturating_sub(1)]
    }

    pub fn is_last(self) -> bool {
        self == Step::Confirmar
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
