use fx_core::PreferenceStore;
use web_sys as web;

/// `localStorage`-backed preferences. Reads and writes silently do nothing
/// when storage is unavailable (private mode, sandboxed frames).
pub struct LocalStorage {
    storage: Option<web::Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let storage = web::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::debug!("[storage] localStorage unavailable; preferences are per-session");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            _ = storage.set_item(key, value);
        }
    }
}
