//! In-memory URL store.
//!
//! Keys are handed out sequentially (`u0`, `u1`, ...) from a counter that
//! lives next to the map behind one lock, so key derivation and insertion
//! are a single step as far as readers and other writers can tell.

use parking_lot::RwLock;
use std::collections::HashMap;

/// Prefix prepended to the decimal counter value to form a key.
pub const KEY_PREFIX: &str = "u";

struct StoreState {
    items: HashMap<String, String>,
    index: u64,
}

pub struct UrlStore {
    inner: RwLock<StoreState>,
}

impl UrlStore {
    pub fn new() -> UrlStore {
        UrlStore {
            inner: RwLock::new(StoreState {
                items: HashMap::new(),
                index: 0,
            }),
        }
    }

    /// Stores `url` under a freshly generated key and returns the key.
    ///
    /// Never fails and never hands out the same key twice.
    pub fn add(&self, url: impl Into<String>) -> String {
        let mut inner = self.inner.write();
        let key = format!("{}{}", KEY_PREFIX, inner.index);
        inner.items.insert(key.clone(), url.into());
        inner.index += 1;
        key
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let inner = self.inner.read();
        inner.items.get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for UrlStore {
    fn default() -> Self {
        Self::new()
    }
}
