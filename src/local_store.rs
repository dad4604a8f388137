use wasm_bindgen::{JsCast, JsValue};
use web_sys::Storage;

use queryquill_core::{KeyValueStore, StorageError};

/// `localStorage` behind the core store seam.
///
/// When the browser refuses storage (private mode, disabled cookies) reads
/// come back empty and writes report [`StorageError::Unavailable`].
pub(crate) struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub(crate) fn open() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            gloo::console::warn!("local store: localStorage unavailable");
        }
        Self { storage }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| StorageError::WriteFailed(js_error_text(&err)))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage.as_ref() {
            let _ = storage.remove_item(key);
        }
    }
}

pub(crate) fn js_error_text(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| "unknown error".to_string())
}

pub(crate) fn log_storage_error(context: &str, err: &StorageError) {
    let message = err.to_string();
    gloo::console::warn!("local store:", context, message);
}
