//! Field identifiers for the intake form.
//!
//! Paths use the dotted camelCase names of the web form (`symptoms.fever`),
//! so validation errors can be matched to form controls without a lookup
//! table on the client side.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;

/// One of the eight boolean symptom indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symptom {
    Headache,
    Fever,
    Cough,
    SoreThroat,
    Nausea,
    Diarrhea,
    Fatigue,
    ShortnessOfBreath,
}

impl Symptom {
    pub const ALL: [Symptom; 8] = [
        Symptom::Headache,
        Symptom::Fever,
        Symptom::Cough,
        Symptom::SoreThroat,
        Symptom::Nausea,
        Symptom::Diarrhea,
        Symptom::Fatigue,
        Symptom::ShortnessOfBreath,
    ];

    /// Member name inside the `symptoms` group.
    pub fn key(self) -> &'static str {
        match self {
            Symptom::Headache => "headache",
            Symptom::Fever => "fever",
            Symptom::Cough => "cough",
            Symptom::SoreThroat => "soreThroat",
            Symptom::Nausea => "nausea",
            Symptom::Diarrhea => "diarrhea",
            Symptom::Fatigue => "fatigue",
            Symptom::ShortnessOfBreath => "shortnessOfBreath",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Symptom::Headache => "Dolor de cabeza",
            Symptom::Fever => "Fiebre",
            Symptom::Cough => "Tos",
            Symptom::SoreThroat => "Dolor de garganta",
            Symptom::Nausea => "Náusea",
            Symptom::Diarrhea => "Diarrea",
            Symptom::Fatigue => "Fatiga",
            Symptom::ShortnessOfBreath => "Dificultad para respirar",
        }
    }

    fn from_key(key: &str) -> Option<Symptom> {
        Symptom::ALL.into_iter().find(|s| s.key() == key)
    }
}

/// Address of a form input, or of the symptom group as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPath {
    FullName,
    Age,
    Sex,
    /// The symptom group. Group-level errors are reported here.
    Symptoms,
    Symptom(Symptom),
    SymptomsOther,
    PainLevel,
    Temperature,
    OnsetDate,
    OnsetTime,
    Notes,
    Email,
    Consent,
}

impl FieldPath {
    /// Fields that carry validation rules, in declaration order. Aggregate
    /// error lists are always reported in this order.
    pub const VALIDATED: [FieldPath; 10] = [
        FieldPath::FullName,
        FieldPath::Age,
        FieldPath::Sex,
        FieldPath::Symptoms,
        FieldPath::PainLevel,
        FieldPath::Temperature,
        FieldPath::OnsetDate,
        FieldPath::OnsetTime,
        FieldPath::Email,
        FieldPath::Consent,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldPath::FullName => "fullName",
            FieldPath::Age => "age",
            FieldPath::Sex => "sex",
            FieldPath::Symptoms => "symptoms",
            FieldPath::Symptom(s) => match s {
                Symptom::Headache => "symptoms.headache",
                Symptom::Fever => "symptoms.fever",
                Symptom::Cough => "symptoms.cough",
                Symptom::SoreThroat => "symptoms.soreThroat",
                Symptom::Nausea => "symptoms.nausea",
                Symptom::Diarrhea => "symptoms.diarrhea",
                Symptom::Fatigue => "symptoms.fatigue",
                Symptom::ShortnessOfBreath => "symptoms.shortnessOfBreath",
            },
            FieldPath::SymptomsOther => "symptoms.other",
            FieldPath::PainLevel => "painLevel",
            FieldPath::Temperature => "temperature",
            FieldPath::OnsetDate => "onsetDate",
            FieldPath::OnsetTime => "onsetTime",
            FieldPath::Notes => "notes",
            FieldPath::Email => "email",
            FieldPath::Consent => "consent",
        }
    }

    /// The path whose rule judges this field. Members of the symptom group
    /// have no rule of their own; a change to any of them re-runs the group
    /// rule.
    pub fn validation_target(self) -> FieldPath {
        match self {
            FieldPath::Symptom(_) | FieldPath::SymptomsOther => FieldPath::Symptoms,
            other => other,
        }
    }

    /// Short label used as the prefix of an error summary line.
    pub fn label(self) -> &'static str {
        match self {
            FieldPath::FullName => "Nombre",
            FieldPath::Age => "Edad",
            FieldPath::Sex => "Sexo",
            FieldPath::Symptoms | FieldPath::Symptom(_) | FieldPath::SymptomsOther => "Síntomas",
            FieldPath::PainLevel => "Dolor",
            FieldPath::Temperature => "Temperatura",
            FieldPath::OnsetDate => "Inicio (fecha)",
            FieldPath::OnsetTime => "Inicio (hora)",
            FieldPath::Notes => "Notas",
            FieldPath::Email => "Email",
            FieldPath::Consent => "Consentimiento",
        }
    }

    /// Id of the form control that should receive focus when the summary
    /// entry for this field is activated.
    pub fn anchor(self) -> &'static str {
        match self {
            FieldPath::Sex => "sex-masculino",
            FieldPath::Symptoms | FieldPath::Symptom(_) => "symptoms-headache",
            FieldPath::SymptomsOther => "other",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldPath {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = match s {
            "fullName" => FieldPath::FullName,
            "age" => FieldPath::Age,
            "sex" => FieldPath::Sex,
            "symptoms" => FieldPath::Symptoms,
            "symptoms.other" => FieldPath::SymptomsOther,
            "painLevel" => FieldPath::PainLevel,
            "temperature" => FieldPath::Temperature,
            "onsetDate" => FieldPath::OnsetDate,
            "onsetTime" => FieldPath::OnsetTime,
            "notes" => FieldPath::Notes,
            "email" => FieldPath::Email,
            "consent" => FieldPath::Consent,
            other => other
                .strip_prefix("symptoms.")
                .and_then(Symptom::from_key)
                .map(FieldPath::Symptom)
                .ok_or_else(|| CoreError::UnknownField(other.to_string()))?,
        };
        Ok(path)
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
