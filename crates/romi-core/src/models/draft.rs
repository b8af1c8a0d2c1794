use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::field::FieldPath;

use super::report::{PatientReport, Sex, SymptomSet};

/// An in-progress report exactly as the user typed it.
///
/// Numeric inputs are kept as raw text so that an empty or half-typed value
/// can be held, shown back and judged by the validator. A draft may violate
/// any invariant at any time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct ReportDraft {
    pub full_name: String,
    #[serde(deserialize_with = "text_or_number")]
    pub age: String,
    pub sex: String,
    pub symptoms: SymptomSet,
    #[serde(deserialize_with = "text_or_number")]
    pub pain_level: String,
    #[serde(deserialize_with = "text_or_number")]
    pub temperature: String,
    pub onset_date: String,
    pub onset_time: String,
    pub notes: String,
    pub email: String,
    pub consent: bool,
}

impl Default for ReportDraft {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            age: String::new(),
            sex: Sex::NoEspecificado.as_str().to_string(),
            symptoms: SymptomSet::default(),
            pain_level: "1".to_string(),
            temperature: String::new(),
            onset_date: String::new(),
            onset_time: String::new(),
            notes: String::new(),
            email: String::new(),
            consent: false,
        }
    }
}

/// A single value read from, or written to, a draft field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawValue<'a> {
    Text(&'a str),
    Flag(bool),
    Group(&'a SymptomSet),
}

/// The payload of a field-change event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldInput {
    Flag(bool),
    Text(String),
}

impl ReportDraft {
    /// Current raw value of `field`.
    pub fn value(&self, field: FieldPath) -> RawValue<'_> {
        match field {
            FieldPath::FullName => RawValue::Text(&self.full_name),
            FieldPath::Age => RawValue::Text(&self.age),
            FieldPath::Sex => RawValue::Text(&self.sex),
            FieldPath::Symptoms => RawValue::Group(&self.symptoms),
            FieldPath::Symptom(s) => RawValue::Flag(self.symptoms.is_flagged(s)),
            FieldPath::SymptomsOther => RawValue::Text(&self.symptoms.other),
            FieldPath::PainLevel => RawValue::Text(&self.pain_level),
            FieldPath::Temperature => RawValue::Text(&self.temperature),
            FieldPath::OnsetDate => RawValue::Text(&self.onset_date),
            FieldPath::OnsetTime => RawValue::Text(&self.onset_time),
            FieldPath::Notes => RawValue::Text(&self.notes),
            FieldPath::Email => RawValue::Text(&self.email),
            FieldPath::Consent => RawValue::Flag(self.consent),
        }
    }

    /// Apply a field-change event. The symptom group itself cannot be
    /// assigned; its members are changed one at a time.
    pub fn apply(&mut self, field: FieldPath, input: FieldInput) -> Result<(), CoreError> {
        let slot = match field {
            FieldPath::Symptom(s) => {
                let flag = expect_flag(field, input)?;
                self.symptoms.set_flag(s, flag);
                return Ok(());
            }
            FieldPath::Consent => {
                self.consent = expect_flag(field, input)?;
                return Ok(());
            }
            FieldPath::Symptoms => {
                return Err(CoreError::FieldKind {
                    field: field.to_string(),
                    expected: "member",
                });
            }
            FieldPath::FullName => &mut self.full_name,
            FieldPath::Age => &mut self.age,
            FieldPath::Sex => &mut self.sex,
            FieldPath::SymptomsOther => &mut self.symptoms.other,
            FieldPath::PainLevel => &mut self.pain_level,
            FieldPath::Temperature => &mut self.temperature,
            FieldPath::OnsetDate => &mut self.onset_date,
            FieldPath::OnsetTime => &mut self.onset_time,
            FieldPath::Notes => &mut self.notes,
            FieldPath::Email => &mut self.email,
        };
        *slot = expect_text(field, input)?;
        Ok(())
    }
}

fn expect_flag(field: FieldPath, input: FieldInput) -> Result<bool, CoreError> {
    match input {
        FieldInput::Flag(v) => Ok(v),
        FieldInput::Text(_) => Err(CoreError::FieldKind {
            field: field.to_string(),
            expected: "boolean",
        }),
    }
}

fn expect_text(field: FieldPath, input: FieldInput) -> Result<String, CoreError> {
    match input {
        FieldInput::Text(v) => Ok(v),
        FieldInput::Flag(_) => Err(CoreError::FieldKind {
            field: field.to_string(),
            expected: "text",
        }),
    }
}

/// Seed a new draft from a previously accepted report.
impl From<&PatientReport> for ReportDraft {
    fn from(report: &PatientReport) -> Self {
        Self {
            full_name: report.full_name.clone(),
            age: report.age.to_string(),
            sex: report.sex.as_str().to_string(),
            symptoms: report.symptoms.clone(),
            pain_level: report.pain_level.to_string(),
            temperature: report.temperature.map(|t| t.to_string()).unwrap_or_default(),
            onset_date: report.onset_date.clone().unwrap_or_default(),
            onset_time: report.onset_time.clone().unwrap_or_default(),
            notes: report.notes.clone().unwrap_or_default(),
            email: report.email.clone().unwrap_or_default(),
            consent: report.consent,
        }
    }
}

/// Numeric form inputs arrive as strings from the browser but as numbers
/// from JSON written by hand; both are kept as text.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(String::new()),
        Some(serde_json::Value::String(s)) => Ok(s),
        Some(serde_json::Value::Number(n)) => Ok(n.to_string()),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a string or number, got {other}"
        ))),
    }
}
