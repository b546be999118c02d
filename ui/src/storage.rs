use feed::{KeyValueStore, MemoryStore};

/// The browser's `localStorage`, or memory when it is unavailable
/// (private browsing, sandboxed frames).
pub enum BrowserStore {
    Local(web_sys::Storage),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn open() -> Self {
        match web_sys::window().and_then(|w| w.local_storage().ok().flatten())
        {
            Some(storage) => BrowserStore::Local(storage),
            None => {
                tracing::warn!(
                    "localStorage unavailable, positions will not persist"
                );
                BrowserStore::Memory(MemoryStore::default())
            }
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            BrowserStore::Local(storage) => {
                storage.get_item(key).ok().flatten()
            }
            BrowserStore::Memory(memory) => memory.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) {
        match self {
            BrowserStore::Local(storage) => {
                if let Err(e) = storage.set_item(key, value) {
                    tracing::warn!("failed to store {key}: {e:?}");
                }
            }
            BrowserStore::Memory(memory) => memory.set(key, value),
        }
    }
}
