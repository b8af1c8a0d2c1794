use romi_core::FieldPath;
use romi_core::models::draft::{RawValue, ReportDraft};
use romi_core::models::report::{PatientReport, Sex};

use crate::error::FieldError;
use crate::range::parse_optional_number;
use crate::rules::identity;
use crate::rules::measurements::{self, MeasurementRule};
use crate::{all_rules, get_rule};

/// Validate a single raw value.
///
/// Members of the symptom group and unconstrained fields (notes) carry no
/// rule of their own and always pass; the group as a whole is judged under
/// [`FieldPath::Symptoms`].
pub fn validate_field(field: FieldPath, value: RawValue<'_>) -> Result<(), FieldError> {
    match get_rule(field) {
        Some(rule) => rule
            .check(value)
            .map_err(|message| FieldError::new(field, message)),
        None => Ok(()),
    }
}

/// Validate a whole draft, collecting every failure in declaration order.
///
/// On success the draft is normalized into a [`PatientReport`]: blank
/// optional inputs become `None` and numeric text becomes numbers.
pub fn validate_report(draft: &ReportDraft) -> Result<PatientReport, Vec<FieldError>> {
    let errors: Vec<FieldError> = all_rules()
        .iter()
        .filter_map(|rule| {
            rule.check(draft.value(rule.field()))
                .err()
                .map(|message| FieldError::new(rule.field(), message))
        })
        .collect();

    if !errors.is_empty() {
        tracing::debug!(error_count = errors.len(), "draft failed validation");
        return Err(errors);
    }

    build_report(draft).map_err(|e| vec![e])
}

fn build_report(draft: &ReportDraft) -> Result<PatientReport, FieldError> {
    let age = required_number(&draft.age, &measurements::AGE)?;
    let pain_level = required_number(&draft.pain_level, &measurements::PAIN_LEVEL)?;
    let sex: Sex = draft
        .sex
        .parse()
        .map_err(|_| FieldError::new(FieldPath::Sex, identity::SEX_REQUIRED))?;

    Ok(PatientReport {
        full_name: draft.full_name.clone(),
        age: age as u8,
        sex,
        symptoms: draft.symptoms.clone(),
        pain_level: pain_level as u8,
        temperature: parse_optional_number(&draft.temperature),
        onset_date: non_empty(&draft.onset_date),
        onset_time: non_empty(&draft.onset_time),
        notes: non_empty(&draft.notes),
        email: non_empty(&draft.email),
        consent: draft.consent,
    })
}

// The rule table has already range-checked these inputs.
fn required_number(raw: &str, rule: &MeasurementRule) -> Result<f64, FieldError> {
    parse_optional_number(raw).ok_or_else(|| FieldError::new(rule.field, rule.messages.invalid))
}

fn non_empty(raw: &str) -> Option<String> {
    (!raw.is_empty()).then(|| raw.to_string())
}
