use std::fmt;

use romi_core::models::draft::ReportDraft;
use romi_core::models::report::Sex;
use romi_core::models::triage::TriageDecision;
use romi_schema::parse_optional_number;
use serde::Serialize;

const BLANK: &str = "—";

/// Read-only projection of the live draft, as shown next to the form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preview {
    /// `name · age años · sex`, with blanks shown as a dash.
    pub patient: String,
    pub email: Option<String>,
    /// Labels of ticked symptoms in form order, then `Otros: …` if given.
    pub symptoms: Vec<String>,
    /// `n/10`.
    pub pain: String,
    pub temperature: Option<String>,
    pub onset: Option<String>,
    pub triage: TriageDecision,
}

impl Preview {
    pub fn new(draft: &ReportDraft, triage: TriageDecision) -> Self {
        let name = or_blank(&draft.full_name);
        let age = or_blank(draft.age.trim());
        let sex = draft
            .sex
            .parse::<Sex>()
            .map(|s| s.label().to_string())
            .unwrap_or_else(|_| draft.sex.clone());

        let mut symptoms: Vec<String> = draft
            .symptoms
            .flagged()
            .map(|s| s.label().to_string())
            .collect();
        if !draft.symptoms.other.is_empty() {
            symptoms.push(format!("Otros: {}", draft.symptoms.other));
        }

        let onset = [draft.onset_date.as_str(), draft.onset_time.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            patient: format!("{name} · {age} años · {sex}"),
            email: (!draft.email.is_empty()).then(|| draft.email.clone()),
            symptoms,
            pain: format!("{}/10", or_blank(draft.pain_level.trim())),
            temperature: parse_optional_number(&draft.temperature).map(|t| format!("{t} °C")),
            onset: (!onset.is_empty()).then_some(onset),
            triage,
        }
    }
}

fn or_blank(raw: &str) -> &str {
    if raw.is_empty() { BLANK } else { raw }
}

impl fmt::Display for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Paciente")?;
        writeln!(f, "  {}", self.patient)?;
        if let Some(email) = &self.email {
            writeln!(f, "  {email}")?;
        }
        writeln!(f, "Síntomas")?;
        for symptom in &self.symptoms {
            writeln!(f, "  - {symptom}")?;
        }
        writeln!(f, "  Dolor: {}", self.pain)?;
        if let Some(temperature) = &self.temperature {
            writeln!(f, "  Temperatura: {temperature}")?;
        }
        if let Some(onset) = &self.onset {
            writeln!(f, "  Inicio: {onset}")?;
        }
        writeln!(f, "Triage (estimación local)")?;
        write!(
            f,
            "  Nivel: {} · {}",
            self.triage.level.as_str().to_uppercase(),
            self.triage.reason
        )?;
        if let Some(recommendation) = &self.triage.recommendation {
            write!(f, "\n  {recommendation}")?;
        }
        Ok(())
    }
}
