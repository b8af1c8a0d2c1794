use romi_core::models::draft::{FieldInput, RawValue, ReportDraft};
use romi_core::models::prefs::{A11yPrefs, Contrast, FontSize, Motion};
use romi_core::models::report::{PatientReport, Sex, SymptomSet};
use romi_core::{CoreError, FieldPath, Symptom};

#[test]
fn default_draft_matches_blank_form() {
    let draft = ReportDraft::default();
    assert_eq!(draft.sex, "no-especificado");
    assert_eq!(draft.pain_level, "1");
    assert_eq!(draft.age, "");
    assert_eq!(draft.symptoms, SymptomSet::default());
    assert!(!draft.consent);
}

#[test]
fn apply_updates_text_and_flags() {
    let mut draft = ReportDraft::default();
    draft
        .apply(FieldPath::Age, FieldInput::Text("42".to_string()))
        .unwrap();
    draft
        .apply(FieldPath::Symptom(Symptom::Nausea), FieldInput::Flag(true))
        .unwrap();
    draft
        .apply(FieldPath::SymptomsOther, FieldInput::Text("mareo".to_string()))
        .unwrap();

    assert_eq!(draft.value(FieldPath::Age), RawValue::Text("42"));
    assert_eq!(
        draft.value(FieldPath::Symptom(Symptom::Nausea)),
        RawValue::Flag(true)
    );
    assert_eq!(draft.symptoms.other, "mareo");
    assert_eq!(
        draft.symptoms.flagged().collect::<Vec<_>>(),
        vec![Symptom::Nausea]
    );
}

#[test]
fn apply_rejects_mismatched_input() {
    let mut draft = ReportDraft::default();
    assert!(matches!(
        draft.apply(FieldPath::FullName, FieldInput::Flag(true)),
        Err(CoreError::FieldKind { expected: "text", .. })
    ));
    assert!(matches!(
        draft.apply(FieldPath::Symptoms, FieldInput::Flag(true)),
        Err(CoreError::FieldKind { expected: "member", .. })
    ));
    assert_eq!(draft, ReportDraft::default());
}

#[test]
fn draft_json_accepts_numbers_or_strings() {
    let draft: ReportDraft = serde_json::from_str(
        r#"{"fullName": "Ana", "age": 41, "painLevel": "7", "temperature": null,
            "symptoms": {"fever": true}}"#,
    )
    .unwrap();
    assert_eq!(draft.age, "41");
    assert_eq!(draft.pain_level, "7");
    assert_eq!(draft.temperature, "");
    assert_eq!(draft.sex, "no-especificado");
    assert!(draft.symptoms.fever);
}

#[test]
fn draft_json_rejects_other_shapes_for_numbers() {
    let result: Result<ReportDraft, _> = serde_json::from_str(r#"{"age": [41]}"#);
    assert!(result.is_err());
}

#[test]
fn report_seeds_an_equivalent_draft() {
    let report = PatientReport {
        full_name: "Ana".to_string(),
        age: 41,
        sex: Sex::Femenino,
        symptoms: SymptomSet::default(),
        pain_level: 5,
        temperature: Some(37.5),
        onset_date: Some("2024-05-01".to_string()),
        onset_time: None,
        notes: None,
        email: None,
        consent: true,
    };
    let draft = ReportDraft::from(&report);
    assert_eq!(draft.age, "41");
    assert_eq!(draft.sex, "femenino");
    assert_eq!(draft.temperature, "37.5");
    assert_eq!(draft.onset_date, "2024-05-01");
    assert_eq!(draft.onset_time, "");
}

#[test]
fn report_treats_blank_optional_strings_as_absent() {
    let report: PatientReport = serde_json::from_str(
        r#"{"fullName": "Ana", "age": 41, "sex": "no-especificado",
            "symptoms": {"cough": true}, "painLevel": 2,
            "email": "", "notes": "", "consent": true}"#,
    )
    .unwrap();
    assert_eq!(report.email, None);
    assert_eq!(report.notes, None);
    assert_eq!(report.temperature, None);

    let json = serde_json::to_value(&report).unwrap();
    assert!(json.get("email").is_none());
}

#[test]
fn sex_parses_wire_values_only() {
    assert_eq!("masculino".parse::<Sex>().unwrap(), Sex::Masculino);
    assert!(matches!(
        "Masculino".parse::<Sex>(),
        Err(CoreError::UnknownSex(_))
    ));
    assert_eq!(Sex::NoEspecificado.label(), "Prefiero no decir");
}

#[test]
fn prefs_fill_missing_members_individually() {
    let prefs: A11yPrefs = serde_json::from_str(r#"{"motion": "reduced"}"#).unwrap();
    assert_eq!(
        prefs,
        A11yPrefs {
            font: FontSize::Md,
            contrast: Contrast::Normal,
            motion: Motion::Reduced,
        }
    );
    assert!("xxl".parse::<FontSize>().is_err());
    assert_eq!("high".parse::<Contrast>().unwrap(), Contrast::High);
}
