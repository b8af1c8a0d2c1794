use romi_core::FieldPath;
use romi_schema::FieldError;
use serde::Serialize;

/// One line of the error summary shown above the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryEntry {
    /// Id of the control to focus.
    pub anchor: &'static str,
    /// Message prefixed with the field label, e.g. `Edad: Edad máxima 120`.
    pub text: String,
}

impl From<&FieldError> for SummaryEntry {
    fn from(error: &FieldError) -> Self {
        Self {
            anchor: error.field.anchor(),
            text: format!("{}: {}", error.field.label(), error.message),
        }
    }
}

/// Summary lines in declaration order, whatever order `errors` are in.
pub fn summarize<'a>(errors: impl IntoIterator<Item = &'a FieldError>) -> Vec<SummaryEntry> {
    let mut errors: Vec<&FieldError> = errors.into_iter().collect();
    errors.sort_by_key(|e| {
        FieldPath::VALIDATED
            .iter()
            .position(|f| *f == e.field)
            .unwrap_or(usize::MAX)
    });
    errors.into_iter().map(SummaryEntry::from).collect()
}
