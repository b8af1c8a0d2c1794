use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("unknown sex option: {0}")]
    UnknownSex(String),

    #[error("field '{field}' expects a {expected} value")]
    FieldKind {
        field: String,
        expected: &'static str,
    },

    #[error("unknown preference value '{value}' for {preference}")]
    UnknownPreference {
        preference: &'static str,
        value: String,
    },
}
