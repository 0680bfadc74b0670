//! `localStorage`-backed slot for the outstanding verification code.

use login_form::{CodeStore, StoreError};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalStorageCodeStore {
    key: String,
}

impl LocalStorageCodeStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

fn local_storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or(StoreError::Unavailable)
}

fn rejected(err: JsValue) -> StoreError {
    StoreError::Rejected(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl CodeStore for LocalStorageCodeStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        local_storage()?.get_item(&self.key).map_err(rejected)
    }

    fn save(&mut self, code: &str) -> Result<(), StoreError> {
        local_storage()?.set_item(&self.key, code).map_err(rejected)
    }

    fn remove(&mut self) -> Result<(), StoreError> {
        local_storage()?.remove_item(&self.key).map_err(rejected)
    }
}
