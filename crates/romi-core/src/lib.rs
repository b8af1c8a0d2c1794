//! romi-core
//!
//! Pure domain types for the symptom intake: the patient report, its
//! in-progress draft, field identifiers, triage results and display
//! preferences. No I/O.

pub mod error;
pub mod field;
pub mod models;
pub mod storage_keys;

pub use error::CoreError;
pub use field::{FieldPath, Symptom};
