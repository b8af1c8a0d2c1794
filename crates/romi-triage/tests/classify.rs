use romi_core::models::draft::ReportDraft;
use romi_core::models::report::{PatientReport, Sex, SymptomSet};
use romi_core::models::triage::TriageLevel;
use romi_triage::{TriageSignals, triage, triage_draft, triage_report};

fn nominal() -> ReportDraft {
    ReportDraft::default()
}

#[test]
fn breathing_difficulty_alone_is_high() {
    let mut draft = nominal();
    draft.symptoms.shortness_of_breath = true;
    let decision = triage_draft(&draft);
    assert_eq!(decision.level, TriageLevel::Alto);
    assert_eq!(decision.reason, "Dificultad para respirar reportada.");
    assert_eq!(
        decision.recommendation.as_deref(),
        Some("Se recomienda valoración médica inmediata / urgencias.")
    );
}

#[test]
fn severe_pain_with_high_fever_is_high_for_the_combination() {
    let draft = ReportDraft {
        pain_level: "8".to_string(),
        temperature: "39".to_string(),
        ..nominal()
    };
    let decision = triage_draft(&draft);
    assert_eq!(decision.level, TriageLevel::Alto);
    assert_eq!(decision.reason, "Dolor intenso junto con fiebre alta.");
}

#[test]
fn breathing_reason_wins_over_the_combination() {
    let mut draft = ReportDraft {
        pain_level: "9".to_string(),
        temperature: "40".to_string(),
        ..nominal()
    };
    draft.symptoms.shortness_of_breath = true;
    assert_eq!(triage_draft(&draft).reason, "Dificultad para respirar reportada.");
}

#[test]
fn severe_pain_without_temperature_is_medium() {
    let draft = ReportDraft {
        pain_level: "8".to_string(),
        temperature: String::new(),
        ..nominal()
    };
    let decision = triage_draft(&draft);
    assert_eq!(decision.level, TriageLevel::Medio);
    assert_eq!(decision.reason, "Dolor alto.");
}

#[test]
fn high_temperature_alone_is_medium() {
    let draft = ReportDraft {
        temperature: "39.5".to_string(),
        ..nominal()
    };
    let decision = triage_draft(&draft);
    assert_eq!(decision.level, TriageLevel::Medio);
    assert_eq!(decision.reason, "Fiebre elevada.");
}

#[test]
fn reported_fever_alone_is_medium() {
    let mut draft = nominal();
    draft.symptoms.fever = true;
    let decision = triage_draft(&draft);
    assert_eq!(decision.level, TriageLevel::Medio);
    assert_eq!(decision.reason, "Fiebre moderada.");
    assert_eq!(
        decision.recommendation.as_deref(),
        Some("Revisar evolución en 24–48h y consultar si empeora.")
    );
}

#[test]
fn medium_reason_priority_is_pain_then_temperature_then_flag() {
    let mut draft = ReportDraft {
        pain_level: "8".to_string(),
        temperature: "38".to_string(),
        ..nominal()
    };
    draft.symptoms.fever = true;
    assert_eq!(triage_draft(&draft).reason, "Dolor alto.");

    draft.pain_level = "3".to_string();
    draft.temperature = "39".to_string();
    assert_eq!(triage_draft(&draft).reason, "Fiebre elevada.");
}

#[test]
fn no_alarm_signals_is_low() {
    let mut draft = nominal();
    draft.symptoms.cough = true;
    draft.pain_level = "7".to_string();
    draft.temperature = "38.9".to_string();
    let decision = triage_draft(&draft);
    assert_eq!(decision.level, TriageLevel::Bajo);
    assert_eq!(decision.reason, "Síntomas sin señales de alarma.");
    assert_eq!(
        decision.recommendation.as_deref(),
        Some("Reposo, hidratación y seguimiento de síntomas.")
    );
}

#[test]
fn incomplete_or_garbage_draft_never_panics_and_is_low() {
    let draft = ReportDraft {
        age: "??".to_string(),
        sex: String::new(),
        pain_level: String::new(),
        temperature: "treinta".to_string(),
        ..nominal()
    };
    assert_eq!(triage_draft(&draft).level, TriageLevel::Bajo);
    assert_eq!(triage(&TriageSignals::default()).level, TriageLevel::Bajo);
}

#[test]
fn triage_is_referentially_transparent() {
    let mut draft = ReportDraft {
        pain_level: "8".to_string(),
        ..nominal()
    };
    draft.symptoms.fever = true;
    let first = triage_draft(&draft);
    let _ = triage_draft(&nominal());
    let second = triage_draft(&draft);
    assert_eq!(first, second);
}

#[test]
fn report_and_equivalent_draft_agree() {
    let report = PatientReport {
        full_name: "Luis".to_string(),
        age: 50,
        sex: Sex::Masculino,
        symptoms: SymptomSet {
            fever: true,
            ..SymptomSet::default()
        },
        pain_level: 9,
        temperature: Some(39.2),
        onset_date: None,
        onset_time: None,
        notes: None,
        email: None,
        consent: true,
    };
    let from_report = triage_report(&report);
    let from_draft = triage_draft(&ReportDraft::from(&report));
    assert_eq!(from_report, from_draft);
    assert_eq!(from_report.level, TriageLevel::Alto);
}

#[test]
fn levels_are_ordered_by_severity() {
    assert!(TriageLevel::Bajo < TriageLevel::Medio);
    assert!(TriageLevel::Medio < TriageLevel::Alto);
}
