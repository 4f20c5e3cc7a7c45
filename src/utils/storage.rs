//! JSON-encoded access to `localStorage` and `sessionStorage`.
//!
//! Missing storage (private browsing, disabled cookies) and malformed
//! entries both read back as `None`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::Storage;

fn local() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
}

fn session() -> Option<Storage> {
    web_sys::window()
        .and_then(|w| w.session_storage().ok())
        .flatten()
}

pub fn local_get<T: DeserializeOwned>(key: &str) -> Option<T> {
    get_json(local()?, key)
}

/// Returns true if the value was written.
pub fn local_set<T: Serialize>(key: &str, value: &T) -> bool {
    local().map_or(false, |s| set_json(s, key, value))
}

pub fn local_remove(key: &str) {
    if let Some(store) = local() {
        let _ = store.remove_item(key);
    }
}

pub fn session_get<T: DeserializeOwned>(key: &str) -> Option<T> {
    get_json(session()?, key)
}

pub fn session_set<T: Serialize>(key: &str, value: &T) -> bool {
    session().map_or(false, |s| set_json(s, key, value))
}

pub fn session_remove(key: &str) {
    if let Some(store) = session() {
        let _ = store.remove_item(key);
    }
}

fn get_json<T: DeserializeOwned>(store: Storage, key: &str) -> Option<T> {
    let raw = store.get_item(key).ok().flatten()?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("stored value under {key} is not valid JSON: {err}");
            None
        }
    }
}

fn set_json<T: Serialize>(store: Storage, key: &str, value: &T) -> bool {
    match serde_json::to_string(value) {
        Ok(raw) => store.set_item(key, &raw).is_ok(),
        Err(err) => {
            log::error!("could not serialize value for {key}: {err}");
            false
        }
    }
}
