use crate::db::local_storage::LocalStorage;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::preference::PreferenceStore;
use crate::msg_success;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let preferences = PreferenceStore::new(LocalStorage::open(&DataStorage::new()));
    if preferences.toggle() {
        msg_success!(Message::DarkModeEnabled);
    } else {
        msg_success!(Message::DarkModeDisabled);
    }

    Ok(())
}
