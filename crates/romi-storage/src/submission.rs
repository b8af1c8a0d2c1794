//! The last accepted submission.
//!
//! Stored as a versioned envelope. Version 0 is the bare report object the
//! web client writes to local storage; it is migrated on load.

use romi_core::models::draft::ReportDraft;
use romi_core::models::report::PatientReport;
use romi_core::storage_keys;
use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::state;
use crate::store::KeyValueStore;

/// Current envelope version. Bump this when changing the shape and add a
/// step to [`migrate`].
const CURRENT_VERSION: u64 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSubmission {
    pub version: u64,
    /// When the record was saved. Unknown for records migrated from v0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<jiff::Timestamp>,
    pub report: PatientReport,
}

/// Save `report` as the last submission, replacing any previous one.
/// Failures are logged and swallowed: losing the local copy must never block
/// the intake.
pub fn save_submission<S: KeyValueStore + ?Sized>(store: &S, report: &PatientReport) {
    if let Err(e) = try_save_submission(store, report) {
        tracing::warn!(error = %e, "failed to save last submission");
    }
}

pub fn try_save_submission<S: KeyValueStore + ?Sized>(
    store: &S,
    report: &PatientReport,
) -> Result<(), StorageError> {
    let envelope = StoredSubmission {
        version: CURRENT_VERSION,
        saved_at: Some(jiff::Timestamp::now()),
        report: report.clone(),
    };
    state::save_state(store, storage_keys::LAST_SUBMISSION, &envelope)?;
    tracing::debug!("last submission saved");
    Ok(())
}

/// Load the last submission. Absent when nothing was saved, the store is
/// unavailable, or the stored value cannot be understood or fails the
/// report rules.
pub fn load_last_submission<S: KeyValueStore + ?Sized>(store: &S) -> Option<PatientReport> {
    match try_load_submission(store) {
        Ok(stored) => stored.map(|s| s.report),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unreadable last submission");
            None
        }
    }
}

pub fn try_load_submission<S: KeyValueStore + ?Sized>(
    store: &S,
) -> Result<Option<StoredSubmission>, StorageError> {
    let Some(json) = state::load_state::<serde_json::Value, _>(store, storage_keys::LAST_SUBMISSION)?
    else {
        return Ok(None);
    };
    let on_disk_version = json.get("version").and_then(|v| v.as_u64()).unwrap_or(0);
    let migrated = migrate(json, on_disk_version)?;
    let stored: StoredSubmission = serde_json::from_value(migrated)?;
    romi_schema::validate_report(&ReportDraft::from(&stored.report)).map_err(|errors| {
        StorageError::InvalidReport {
            key: storage_keys::LAST_SUBMISSION.to_string(),
            source: errors.into(),
        }
    })?;
    tracing::debug!(on_disk_version, "last submission loaded");
    Ok(Some(stored))
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(json: serde_json::Value, from_version: u64) -> Result<serde_json::Value, StorageError> {
    if from_version > CURRENT_VERSION {
        return Err(StorageError::UnsupportedVersion {
            key: storage_keys::LAST_SUBMISSION.to_string(),
            version: from_version,
        });
    }
    if !json.is_object() {
        return Err(StorageError::Malformed {
            key: storage_keys::LAST_SUBMISSION.to_string(),
        });
    }

    let mut json = json;

    // v0 → v1: wrap the bare report in an envelope
    if from_version < 1 {
        json = serde_json::json!({
            "version": 1,
            "report": json,
        });
        tracing::info!("migrated last submission v0 → v1");
    }

    Ok(json)
}
