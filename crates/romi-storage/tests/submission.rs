use romi_core::models::report::{PatientReport, Sex, SymptomSet};
use romi_core::storage_keys;
use romi_storage::error::StorageError;
use romi_storage::submission::{
    load_last_submission, save_submission, try_load_submission, try_save_submission,
};
use romi_storage::{FileStore, KeyValueStore, MemoryStore};

fn sample_report() -> PatientReport {
    PatientReport {
        full_name: "Ana López".to_string(),
        age: 41,
        sex: Sex::Femenino,
        symptoms: SymptomSet {
            fever: true,
            cough: true,
            ..SymptomSet::default()
        },
        pain_level: 3,
        temperature: Some(38.2),
        onset_date: Some("2024-05-01".to_string()),
        onset_time: None,
        notes: None,
        email: Some("ana@example.com".to_string()),
        consent: true,
    }
}

/// A store whose every operation fails.
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Err(StorageError::Unavailable("disabled".to_string()))
    }

    fn put(&self, _key: &str, _body: &[u8]) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("disabled".to_string()))
    }

    fn delete(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("disabled".to_string()))
    }
}

#[test]
fn nothing_saved_loads_as_absent() {
    let store = MemoryStore::new();
    assert_eq!(load_last_submission(&store), None);
}

#[test]
fn saved_report_loads_back() {
    let store = MemoryStore::new();
    save_submission(&store, &sample_report());
    assert_eq!(load_last_submission(&store), Some(sample_report()));
}

#[test]
fn second_save_replaces_first() {
    let store = MemoryStore::new();
    save_submission(&store, &sample_report());

    let mut newer = sample_report();
    newer.full_name = "Luis Gómez".to_string();
    newer.sex = Sex::Masculino;
    save_submission(&store, &newer);

    assert_eq!(load_last_submission(&store), Some(newer));
}

#[test]
fn saved_envelope_carries_version_and_timestamp() {
    let store = MemoryStore::new();
    try_save_submission(&store, &sample_report()).unwrap();

    let stored = try_load_submission(&store).unwrap().unwrap();
    assert_eq!(stored.version, 1);
    assert!(stored.saved_at.is_some());
    assert_eq!(stored.report, sample_report());
}

#[test]
fn bare_report_from_web_client_is_migrated() {
    let store = MemoryStore::new();
    let bare = serde_json::json!({
        "fullName": "Ana López",
        "age": 41,
        "sex": "femenino",
        "symptoms": { "fever": true, "cough": true, "other": "" },
        "painLevel": 3,
        "temperature": 38.2,
        "onsetDate": "2024-05-01",
        "onsetTime": "",
        "notes": "",
        "email": "ana@example.com",
        "consent": true
    });
    store
        .put(storage_keys::LAST_SUBMISSION, bare.to_string().as_bytes())
        .unwrap();

    let stored = try_load_submission(&store).unwrap().unwrap();
    assert_eq!(stored.version, 1);
    assert_eq!(stored.saved_at, None);
    assert_eq!(stored.report, sample_report());
}

#[test]
fn corrupted_value_loads_as_absent() {
    let store = MemoryStore::new();
    store
        .put(storage_keys::LAST_SUBMISSION, b"{not json")
        .unwrap();

    assert!(try_load_submission(&store).is_err());
    assert_eq!(load_last_submission(&store), None);
}

#[test]
fn non_object_value_is_malformed() {
    let store = MemoryStore::new();
    store.put(storage_keys::LAST_SUBMISSION, b"[1, 2, 3]").unwrap();

    assert!(matches!(
        try_load_submission(&store),
        Err(StorageError::Malformed { .. })
    ));
    assert_eq!(load_last_submission(&store), None);
}

#[test]
fn newer_version_is_rejected() {
    let store = MemoryStore::new();
    let future = serde_json::json!({ "version": 99, "report": {} });
    store
        .put(storage_keys::LAST_SUBMISSION, future.to_string().as_bytes())
        .unwrap();

    assert!(matches!(
        try_load_submission(&store),
        Err(StorageError::UnsupportedVersion { version: 99, .. })
    ));
    assert_eq!(load_last_submission(&store), None);
}

#[test]
fn unavailable_store_is_swallowed() {
    save_submission(&BrokenStore, &sample_report());
    assert_eq!(load_last_submission(&BrokenStore), None);
    assert!(try_save_submission(&BrokenStore, &sample_report()).is_err());
}

#[test]
fn file_store_round_trip_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    save_submission(&FileStore::new(dir.path()), &sample_report());

    let reopened = FileStore::new(dir.path());
    assert_eq!(load_last_submission(&reopened), Some(sample_report()));
}

#[test]
fn temperature_keeps_every_digit_through_storage() {
    let store = MemoryStore::new();
    for temperature in [37.833166768244276, 34.00000000000001, 42.99999999999999, 36.6] {
        let report = PatientReport {
            temperature: Some(temperature),
            ..sample_report()
        };
        save_submission(&store, &report);
        assert_eq!(load_last_submission(&store), Some(report));
    }
}

#[test]
fn temperature_keeps_every_digit_through_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let report = PatientReport {
        temperature: Some(37.833166768244276),
        ..sample_report()
    };

    save_submission(&FileStore::new(dir.path()), &report);

    let loaded = load_last_submission(&FileStore::new(dir.path())).unwrap();
    assert_eq!(loaded.temperature.map(f64::to_bits), Some(37.833166768244276_f64.to_bits()));
}

#[test]
fn stored_report_breaking_the_rules_loads_as_absent() {
    let store = MemoryStore::new();
    let bad = serde_json::json!({
        "fullName": "",
        "age": 200,
        "sex": "no-especificado",
        "symptoms": {},
        "painLevel": 0,
        "consent": false
    });
    store
        .put(storage_keys::LAST_SUBMISSION, bad.to_string().as_bytes())
        .unwrap();

    let Err(StorageError::InvalidReport { source, .. }) = try_load_submission(&store) else {
        panic!("expected the stored report to be rejected");
    };
    let romi_schema::SchemaError::Invalid(errors) = source;
    assert!(!errors.is_empty());
    assert_eq!(load_last_submission(&store), None);
}
