use payloads::Coordinates;
use std::cell::RefCell;
use std::collections::HashMap;

/// Key under which the last known coordinates are stored.
pub const POSITION_KEY: &str = "position";

/// A synchronous string key-value store, such as the browser's
/// `localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Process-local store, used when persistent storage is unavailable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// Last known device position, kept across page loads.
pub struct PositionStore<S> {
    store: S,
}

impl<S: KeyValueStore> PositionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the stored coordinates. Missing and malformed entries both
    /// read as `None`.
    pub fn load(&self) -> Option<Coordinates> {
        let raw = self.store.get(POSITION_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(position) => Some(position),
            Err(e) => {
                tracing::warn!("ignoring malformed stored position: {e}");
                None
            }
        }
    }

    pub fn save(&self, position: &Coordinates) {
        match serde_json::to_string(position) {
            Ok(raw) => self.store.set(POSITION_KEY, &raw),
            Err(e) => tracing::warn!("failed to encode position: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_returns_none_when_absent() {
        let positions = PositionStore::new(MemoryStore::default());
        assert_eq!(positions.load(), None);
    }

    #[test]
    fn save_then_load() {
        let positions = PositionStore::new(MemoryStore::default());
        let here = Coordinates {
            latitude: 40.7,
            longitude: -74.0,
        };
        positions.save(&here);
        assert_eq!(positions.load(), Some(here));
        assert_eq!(
            positions.store().get(POSITION_KEY).as_deref(),
            Some(r#"{"latitude":40.7,"longitude":-74.0}"#)
        );
    }

    #[test]
    fn malformed_entry_reads_as_none() {
        let store = MemoryStore::default();
        store.set(POSITION_KEY, r#"{"latitude":"north"}"#);
        let positions = PositionStore::new(store);
        assert_eq!(positions.load(), None);
    }
}
