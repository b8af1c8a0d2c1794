use romi_core::models::draft::ReportDraft;
use romi_core::models::report::PatientReport;
use romi_schema::parse_optional_number;

pub const SEVERE_PAIN: f64 = 8.0;
pub const HIGH_FEVER_CELSIUS: f64 = 39.0;

/// The inputs triage looks at, extracted from a report or a draft.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TriageSignals {
    pub shortness_of_breath: bool,
    pub fever_reported: bool,
    /// `None` when the draft holds no usable number.
    pub pain_level: Option<f64>,
    pub temperature: Option<f64>,
}

impl TriageSignals {
    pub fn severe_pain(&self) -> bool {
        self.pain_level.is_some_and(|p| p >= SEVERE_PAIN)
    }

    /// An absent temperature counts as 0 °C here, so it never reaches the
    /// threshold.
    pub fn high_fever(&self) -> bool {
        self.temperature.unwrap_or(0.0) >= HIGH_FEVER_CELSIUS
    }
}

impl From<&ReportDraft> for TriageSignals {
    fn from(draft: &ReportDraft) -> Self {
        Self {
            shortness_of_breath: draft.symptoms.shortness_of_breath,
            fever_reported: draft.symptoms.fever,
            pain_level: parse_optional_number(&draft.pain_level),
            temperature: parse_optional_number(&draft.temperature),
        }
    }
}

impl From<&PatientReport> for TriageSignals {
    fn from(report: &PatientReport) -> Self {
        Self {
            shortness_of_breath: report.symptoms.shortness_of_breath,
            fever_reported: report.symptoms.fever,
            pain_level: Some(f64::from(report.pain_level)),
            temperature: report.temperature,
        }
    }
}
