use romi_core::models::triage::{TriageDecision, TriageLevel};

use crate::signals::TriageSignals;
use crate::TriageRule;

/// Breathing difficulty, or severe pain together with high fever.
/// Breathing takes priority when both hold.
pub struct ImmediateCare;

impl TriageRule for ImmediateCare {
    fn level(&self) -> TriageLevel {
        TriageLevel::Alto
    }

    fn recommendation(&self) -> &'static str {
        "Se recomienda valoración médica inmediata / urgencias."
    }

    fn reason(&self, signals: &TriageSignals) -> Option<&'static str> {
        if signals.shortness_of_breath {
            Some("Dificultad para respirar reportada.")
        } else if signals.severe_pain() && signals.high_fever() {
            Some("Dolor intenso junto con fiebre alta.")
        } else {
            None
        }
    }
}

/// Any single alarm signal: severe pain, high temperature, or reported fever.
pub struct WatchfulFollowUp;

impl TriageRule for WatchfulFollowUp {
    fn level(&self) -> TriageLevel {
        TriageLevel::Medio
    }

    fn recommendation(&self) -> &'static str {
        "Revisar evolución en 24–48h y consultar si empeora."
    }

    fn reason(&self, signals: &TriageSignals) -> Option<&'static str> {
        if signals.severe_pain() {
            Some("Dolor alto.")
        } else if signals.high_fever() {
            Some("Fiebre elevada.")
        } else if signals.fever_reported {
            Some("Fiebre moderada.")
        } else {
            None
        }
    }
}

pub fn no_alarm() -> TriageDecision {
    TriageDecision {
        level: TriageLevel::Bajo,
        reason: "Síntomas sin señales de alarma.".to_string(),
        recommendation: Some("Reposo, hidratación y seguimiento de síntomas.".to_string()),
    }
}
