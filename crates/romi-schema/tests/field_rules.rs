use romi_core::models::draft::RawValue;
use romi_core::models::report::SymptomSet;
use romi_core::{FieldPath, Symptom};
use romi_schema::rules::measurements::{AGE, PAIN_LEVEL, TEMPERATURE};
use romi_schema::{FieldRule, parse_optional_number, validate_field};

fn message(field: FieldPath, value: RawValue<'_>) -> Option<String> {
    validate_field(field, value).err().map(|e| e.message)
}

#[test]
fn age_in_range_passes() {
    for age in ["0", "1", "35", "119", "120", " 42 "] {
        assert!(
            validate_field(FieldPath::Age, RawValue::Text(age)).is_ok(),
            "age {age:?} should pass"
        );
    }
}

#[test]
fn age_out_of_range_fails_with_bound_message() {
    assert_eq!(
        message(FieldPath::Age, RawValue::Text("-1")).as_deref(),
        Some("Edad mínima 0")
    );
    assert_eq!(
        message(FieldPath::Age, RawValue::Text("121")).as_deref(),
        Some("Edad máxima 120")
    );
}

#[test]
fn age_non_integer_fails_before_range() {
    assert_eq!(
        message(FieldPath::Age, RawValue::Text("30.5")).as_deref(),
        Some("La edad debe ser un número entero")
    );
    // Integer check comes before the max check.
    assert_eq!(
        message(FieldPath::Age, RawValue::Text("150.5")).as_deref(),
        Some("La edad debe ser un número entero")
    );
}

#[test]
fn age_blank_or_garbage_is_a_type_error() {
    for raw in ["", "   ", "abc", "NaN", "inf"] {
        assert_eq!(
            message(FieldPath::Age, RawValue::Text(raw)).as_deref(),
            Some("Ingresa una edad válida"),
            "raw {raw:?}"
        );
    }
}

#[test]
fn pain_level_bounds() {
    for level in 1..=10 {
        let raw = level.to_string();
        assert!(validate_field(FieldPath::PainLevel, RawValue::Text(&raw)).is_ok());
    }
    assert_eq!(
        message(FieldPath::PainLevel, RawValue::Text("0")).as_deref(),
        Some("Mínimo 1")
    );
    assert_eq!(
        message(FieldPath::PainLevel, RawValue::Text("11")).as_deref(),
        Some("Máximo 10")
    );
    assert_eq!(
        message(FieldPath::PainLevel, RawValue::Text("")).as_deref(),
        Some("Selecciona un nivel de dolor")
    );
    assert!(validate_field(FieldPath::PainLevel, RawValue::Text("5.5")).is_err());
}

#[test]
fn temperature_blank_is_absent_not_an_error() {
    for raw in ["", "  ", "abc"] {
        assert!(validate_field(FieldPath::Temperature, RawValue::Text(raw)).is_ok());
        assert_eq!(parse_optional_number(raw), None);
    }
}

#[test]
fn temperature_range() {
    for raw in ["34", "36.6", "39", "43"] {
        assert!(validate_field(FieldPath::Temperature, RawValue::Text(raw)).is_ok());
    }
    assert_eq!(
        message(FieldPath::Temperature, RawValue::Text("33.9")).as_deref(),
        Some("Mín 34°C")
    );
    assert_eq!(
        message(FieldPath::Temperature, RawValue::Text("43.1")).as_deref(),
        Some("Máx 43°C")
    );
}

#[test]
fn full_name_needs_two_characters() {
    assert!(validate_field(FieldPath::FullName, RawValue::Text("")).is_err());
    assert!(validate_field(FieldPath::FullName, RawValue::Text("A")).is_err());
    assert!(validate_field(FieldPath::FullName, RawValue::Text("Al")).is_ok());
    // Counted in characters, not bytes.
    assert!(validate_field(FieldPath::FullName, RawValue::Text("Ñ")).is_err());
}

#[test]
fn sex_must_be_a_declared_option() {
    for raw in ["masculino", "femenino", "no-especificado"] {
        assert!(validate_field(FieldPath::Sex, RawValue::Text(raw)).is_ok());
    }
    assert_eq!(
        message(FieldPath::Sex, RawValue::Text("")).as_deref(),
        Some("Selecciona una opción")
    );
    assert!(validate_field(FieldPath::Sex, RawValue::Text("otro")).is_err());
}

#[test]
fn symptom_group_requires_one_indicator_or_description() {
    let empty = SymptomSet::default();
    let err = validate_field(FieldPath::Symptoms, RawValue::Group(&empty)).unwrap_err();
    assert_eq!(err.field, FieldPath::Symptoms);
    assert_eq!(err.message, "Selecciona al menos un síntoma o escribe otro");

    let whitespace = SymptomSet {
        other: "   \t".to_string(),
        ..SymptomSet::default()
    };
    assert!(validate_field(FieldPath::Symptoms, RawValue::Group(&whitespace)).is_err());

    for symptom in Symptom::ALL {
        let mut set = SymptomSet::default();
        set.set_flag(symptom, true);
        assert!(
            validate_field(FieldPath::Symptoms, RawValue::Group(&set)).is_ok(),
            "{symptom:?} alone should satisfy the group"
        );
    }

    let described = SymptomSet {
        other: "mareo".to_string(),
        ..SymptomSet::default()
    };
    assert!(validate_field(FieldPath::Symptoms, RawValue::Group(&described)).is_ok());
}

#[test]
fn group_members_have_no_rule_of_their_own() {
    assert!(validate_field(FieldPath::Symptom(Symptom::Fever), RawValue::Flag(false)).is_ok());
    assert!(validate_field(FieldPath::SymptomsOther, RawValue::Text("")).is_ok());
    assert!(validate_field(FieldPath::Notes, RawValue::Text("")).is_ok());
}

#[test]
fn email_is_optional_but_must_be_well_formed() {
    assert!(validate_field(FieldPath::Email, RawValue::Text("")).is_ok());
    assert!(validate_field(FieldPath::Email, RawValue::Text("a@b.com")).is_ok());
    assert!(validate_field(FieldPath::Email, RawValue::Text("maria.perez+salud@clinica.mx")).is_ok());
    for bad in ["not-an-email", "a@b", "@b.com", ".a@b.com", "a..b@c.com", "a@b.c"] {
        assert_eq!(
            message(FieldPath::Email, RawValue::Text(bad)).as_deref(),
            Some("Email inválido"),
            "{bad:?}"
        );
    }
}

#[test]
fn consent_must_be_true() {
    assert!(validate_field(FieldPath::Consent, RawValue::Flag(true)).is_ok());
    assert_eq!(
        message(FieldPath::Consent, RawValue::Flag(false)).as_deref(),
        Some("Necesitamos tu autorización")
    );
}

#[test]
fn onset_fields_are_free_form() {
    assert!(validate_field(FieldPath::OnsetDate, RawValue::Text("ayer por la tarde")).is_ok());
    assert!(validate_field(FieldPath::OnsetTime, RawValue::Text("")).is_ok());
}

#[test]
fn measurement_rules_accept_exactly_their_declared_range() {
    let samples = [
        "-1", "0", "0.5", "1", "9.5", "10", "11", "33.9", "34", "37.833166768244276", "43",
        "43.01", "119", "120", "120.5", "121",
    ];
    for rule in [&AGE, &PAIN_LEVEL, &TEMPERATURE] {
        for raw in samples {
            let n = parse_optional_number(raw).unwrap();
            assert_eq!(
                rule.check(RawValue::Text(raw)).is_ok(),
                rule.range.contains(n),
                "{:?} with {raw:?}",
                rule.field
            );
        }
    }
}
