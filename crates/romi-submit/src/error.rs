use thiserror::Error;

/// Why the remote side did not accept a report. The display text is shown
/// to the patient as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The report was refused and resending it unchanged will not help.
    #[error("{0}")]
    Rejected(String),

    /// The service could not take the report right now.
    #[error("{0}")]
    Unavailable(String),
}
