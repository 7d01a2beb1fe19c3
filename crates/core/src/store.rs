//! Injected key-value persistence capability.
//!
//! The browser original kept UI-only state in `localStorage`; here the store
//! is an object-safe trait so domain code stays testable without any
//! particular backing. Values are plain strings; JSON helpers are layered on
//! top for typed state.

use std::sync::RwLock;

use rustc_hash::FxHashMap;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Key under which the session cart is persisted (opt-in).
pub const CART_KEY: &str = "utsav.cart";

/// Key under which admin website settings are persisted.
pub const SETTINGS_KEY: &str = "utsav.admin.settings";

/// Key under which the hidden-product id set is persisted.
pub const HIDDEN_PRODUCTS_KEY: &str = "utsav.admin.hidden_products";

/// Key under which the hidden-review id set is persisted.
pub const HIDDEN_REVIEWS_KEY: &str = "utsav.admin.hidden_reviews";

/// A string key-value store with application lifetime.
pub trait KeyValueStore: Send + Sync {
    /// Fetch the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Remove the value stored under `key`, if any.
    fn remove(&self, key: &str);
}

/// Errors from the typed JSON helpers.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The stored string was not valid JSON for the requested type.
    #[error("stored value is not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),

    /// The value could not be serialized to JSON.
    #[error("value could not be serialized: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Read a JSON-serialized value from the store.
///
/// Returns `Ok(None)` when the key is absent.
///
/// # Errors
///
/// Returns [`StoreError::Decode`] when a value is present but does not parse
/// as `T`.
pub fn get_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StoreError> {
    store
        .get(key)
        .map(|raw| serde_json::from_str(&raw).map_err(StoreError::Decode))
        .transpose()
}

/// Write a value to the store as JSON.
///
/// # Errors
///
/// Returns [`StoreError::Encode`] when the value cannot be serialized.
pub fn set_json<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value).map_err(StoreError::Encode)?;

    store.set(key, &raw);

    Ok(())
}

/// In-memory [`KeyValueStore`], the default backing for a single session.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<FxHashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .read()
            .ok()
            .and_then(|values| values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.write() {
            values.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.write() {
            values.remove(key);
        }
    }
}
