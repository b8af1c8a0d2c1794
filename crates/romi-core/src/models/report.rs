use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::field::Symptom;

/// A validated patient report. Only the schema validator builds these from
/// user input, and stored copies are checked again on load; every invariant
/// of the intake form holds for a value of this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PatientReport {
    pub full_name: String,
    pub age: u8,
    pub sex: Sex,
    pub symptoms: SymptomSet,
    pub pain_level: u8,
    /// Body temperature in °C. `None` when the patient left it blank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub temperature: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    #[ts(optional)]
    pub onset_date: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    #[ts(optional)]
    pub onset_time: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    #[ts(optional)]
    pub notes: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    #[ts(optional)]
    pub email: Option<String>,
    pub consent: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Sex {
    #[serde(rename = "masculino")]
    Masculino,
    #[serde(rename = "femenino")]
    Femenino,
    #[default]
    #[serde(rename = "no-especificado")]
    NoEspecificado,
}

impl Sex {
    pub const ALL: [Sex; 3] = [Sex::Masculino, Sex::Femenino, Sex::NoEspecificado];

    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Masculino => "masculino",
            Sex::Femenino => "femenino",
            Sex::NoEspecificado => "no-especificado",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sex::Masculino => "Masculino",
            Sex::Femenino => "Femenino",
            Sex::NoEspecificado => "Prefiero no decir",
        }
    }
}

impl std::str::FromStr for Sex {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sex::ALL
            .into_iter()
            .find(|sex| sex.as_str() == s)
            .ok_or_else(|| CoreError::UnknownSex(s.to_string()))
    }
}

/// Reported symptoms: eight independent indicators plus free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct SymptomSet {
    pub headache: bool,
    pub fever: bool,
    pub cough: bool,
    pub sore_throat: bool,
    pub nausea: bool,
    pub diarrhea: bool,
    pub fatigue: bool,
    pub shortness_of_breath: bool,
    pub other: String,
}

impl SymptomSet {
    pub fn is_flagged(&self, symptom: Symptom) -> bool {
        match symptom {
            Symptom::Headache => self.headache,
            Symptom::Fever => self.fever,
            Symptom::Cough => self.cough,
            Symptom::SoreThroat => self.sore_throat,
            Symptom::Nausea => self.nausea,
            Symptom::Diarrhea => self.diarrhea,
            Symptom::Fatigue => self.fatigue,
            Symptom::ShortnessOfBreath => self.shortness_of_breath,
        }
    }

    pub fn set_flag(&mut self, symptom: Symptom, value: bool) {
        let slot = match symptom {
            Symptom::Headache => &mut self.headache,
            Symptom::Fever => &mut self.fever,
            Symptom::Cough => &mut self.cough,
            Symptom::SoreThroat => &mut self.sore_throat,
            Symptom::Nausea => &mut self.nausea,
            Symptom::Diarrhea => &mut self.diarrhea,
            Symptom::Fatigue => &mut self.fatigue,
            Symptom::ShortnessOfBreath => &mut self.shortness_of_breath,
        };
        *slot = value;
    }

    /// Ticked indicators, in form order.
    pub fn flagged(&self) -> impl Iterator<Item = Symptom> + '_ {
        Symptom::ALL.into_iter().filter(|s| self.is_flagged(*s))
    }
}

/// Blank strings written by the web client mean "not provided".
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_empty()))
}
