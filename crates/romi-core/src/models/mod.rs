pub mod draft;
pub mod prefs;
pub mod report;
pub mod triage;
