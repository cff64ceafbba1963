//! Dark mode preference.
//!
//! Stored as a JSON boolean under its own key, independent of the task
//! list and of the selected task backend. Failures are cosmetic: reads fall
//! back to `false`, writes are logged and dropped.

use crate::db::local_storage::LocalStorage;
use crate::libs::messages::Message;
use crate::msg_error;

pub const DARK_MODE_KEY: &str = "darkMode";

#[derive(Debug, Clone)]
pub struct PreferenceStore {
    storage: LocalStorage,
}

impl PreferenceStore {
    pub fn new(storage: LocalStorage) -> Self {
        Self { storage }
    }

    /// Current dark mode flag; `false` when unset or unreadable.
    pub fn get(&self) -> bool {
        let raw = match self.storage.get_item(DARK_MODE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return false,
            Err(e) => {
                msg_error!(Message::PreferenceLoadFailed(e.to_string()));
                return false;
            }
        };

        match serde_json::from_str::<bool>(&raw) {
            Ok(value) => value,
            Err(e) => {
                msg_error!(Message::PreferenceLoadFailed(e.to_string()));
                false
            }
        }
    }

    /// Persists `dark`. Never fails.
    pub fn set(&self, dark: bool) {
        if let Err(e) = self.storage.set_item(DARK_MODE_KEY, if dark { "true" } else { "false" }) {
            msg_error!(Message::PreferenceSaveFailed(e.to_string()));
        }
    }

    /// Flips the flag, persists it and returns the new value.
    pub fn toggle(&self) -> bool {
        let dark = !self.get();
        self.set(dark);
        dark
    }
}
