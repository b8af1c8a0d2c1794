//! Storage key conventions.
//!
//! The keys match the ones the web client writes to local storage, so a
//! record saved there and a record saved by this workspace share a name.

/// The most recent accepted submission.
pub const LAST_SUBMISSION: &str = "romi:lastSubmission";

/// Accessibility display preferences.
pub const A11Y_PREFS: &str = "romi:a11y";
