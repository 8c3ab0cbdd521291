//! # Browser sessionStorage backend
//!
//! [`WebSessionStore`] is the [`SessionStore`] used on the **web platform**. It
//! reads and writes `window.sessionStorage`, so entries disappear when the tab
//! closes, exactly the lifetime the portfolio cache wants.
//!
//! The struct holds nothing: `web_sys::Storage` is neither `Send` nor `Sync`,
//! so the handle is looked up again on every call. The browser keeps that lookup
//! cheap.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{DomException, Storage};

use crate::modules::portfolio::application::ports::outgoing::{SessionStore, StorageError};

#[derive(Clone, Copy, Debug, Default)]
pub struct WebSessionStore;

impl WebSessionStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .session_storage()
            .map_err(|e| StorageError::Unavailable(describe(&e)))?
            .ok_or_else(|| StorageError::Unavailable("sessionStorage disabled".to_string()))
    }
}

fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}

impl SessionStore for WebSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(describe(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?.set_item(key, value).map_err(|e| {
            let name = e.dyn_ref::<DomException>().map(DomException::name);
            StorageError::write_rejected(name.as_deref(), describe(&e), key, key.len() + value.len())
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Unavailable(describe(&e)))
    }
}
