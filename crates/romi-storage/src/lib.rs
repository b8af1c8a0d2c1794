//! romi-storage
//!
//! Local key-value persistence for the last accepted submission and the
//! accessibility preferences. Reads are tolerant: a missing, unreadable or
//! corrupted entry loads as "nothing stored" and saves never fail the
//! caller.

pub mod error;
pub mod prefs;
pub mod state;
pub mod store;
pub mod submission;

pub use store::{FileStore, KeyValueStore, MemoryStore};
