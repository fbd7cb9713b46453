use crate::record::RawRow;

/// Storage key holding the last successfully parsed sheet.
pub const PRODUCTS_CACHE_KEY: &str = "eurekaProducts";

/// Minimal key-value store the cache codec works against.
///
/// The frontend backs it with localStorage; tests use an in-memory map.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Read the cached raw row set. A missing or undecodable entry is a miss.
pub fn cached_rows(store: &dyn KeyValueStore) -> Option<Vec<RawRow>> {
    let text = store.get(PRODUCTS_CACHE_KEY)?;
    serde_json::from_str(&text).ok()
}

/// Store a freshly parsed row set for later visits.
pub fn store_rows(store: &dyn KeyValueStore, rows: &[RawRow]) {
    if let Ok(text) = serde_json::to_string(rows) {
        store.set(PRODUCTS_CACHE_KEY, &text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::normalize_rows;
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
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

    fn sample_rows() -> Vec<RawRow> {
        let mut row = RawRow::new();
        row.insert("CODICE".to_string(), json!("A1"));
        row.insert("ARTICOLO".to_string(), json!("Penna stilografica"));
        row.insert("PREZZO".to_string(), json!(24.9));
        vec![row]
    }

    #[test]
    fn test_round_trip_preserves_rows() {
        let store = MemoryStore::default();
        let rows = sample_rows();

        store_rows(&store, &rows);
        assert_eq!(cached_rows(&store), Some(rows));
    }

    #[test]
    fn test_missing_entry_is_a_miss() {
        let store = MemoryStore::default();
        assert_eq!(cached_rows(&store), None);
    }

    #[test]
    fn test_undecodable_entry_is_a_miss() {
        let store = MemoryStore::default();
        store.set(PRODUCTS_CACHE_KEY, "not json at all");
        assert_eq!(cached_rows(&store), None);

        store.set(PRODUCTS_CACHE_KEY, "{\"non\": \"un array\"}");
        assert_eq!(cached_rows(&store), None);
    }

    #[test]
    fn test_cached_rows_normalize_identically() {
        let store = MemoryStore::default();
        let rows = sample_rows();
        let first = normalize_rows(&rows);

        store_rows(&store, &rows);
        let reloaded = cached_rows(&store).unwrap();
        assert_eq!(normalize_rows(&reloaded), first);
    }

    #[test]
    fn test_store_overwrites_previous_entry() {
        let store = MemoryStore::default();
        store.set(PRODUCTS_CACHE_KEY, "corrotto");

        let rows = sample_rows();
        store_rows(&store, &rows);
        assert_eq!(cached_rows(&store), Some(rows));
    }
}
