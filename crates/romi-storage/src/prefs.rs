use romi_core::models::prefs::A11yPrefs;
use romi_core::storage_keys;

use crate::state;
use crate::store::KeyValueStore;

/// Load display preferences, falling back to defaults when nothing usable
/// is stored. Members missing from a stored value take their own defaults.
pub fn load_prefs<S: KeyValueStore + ?Sized>(store: &S) -> A11yPrefs {
    match state::load_state::<A11yPrefs, _>(store, storage_keys::A11Y_PREFS) {
        Ok(Some(prefs)) => prefs,
        Ok(None) => A11yPrefs::default(),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unreadable accessibility preferences");
            A11yPrefs::default()
        }
    }
}

/// Save display preferences. Failures are logged and swallowed.
pub fn save_prefs<S: KeyValueStore + ?Sized>(store: &S, prefs: &A11yPrefs) {
    match state::save_state(store, storage_keys::A11Y_PREFS, prefs) {
        Ok(()) => tracing::debug!(
            font = prefs.font.as_str(),
            contrast = prefs.contrast.as_str(),
            motion = prefs.motion.as_str(),
            "accessibility preferences saved"
        ),
        Err(e) => tracing::warn!(error = %e, "failed to save accessibility preferences"),
    }
}
