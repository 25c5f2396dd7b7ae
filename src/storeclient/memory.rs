use crate::errors::*;
use crate::storeclient::StoreClient;
use std::collections::HashMap;
use tracing::debug;

/// In-memory store with the same command surface as the networked one.
/// Plain values and lists live in separate maps so that a key holds one
/// kind of data at a time, and mixing them is a wrong-type error.
#[derive(Debug, Default)]
pub struct MemoryStore {
    strings: HashMap<String, Vec<u8>>,
    lists: HashMap<String, Vec<Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore {
            strings: HashMap::new(),
            lists: HashMap::new(),
        }
    }
}

impl StoreClient for MemoryStore {
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        if self.lists.contains_key(key) {
            return Err(CacheError::WrongType(format!(
                "set on list key {:?}",
                key
            )));
        }
        self.strings.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        if self.lists.contains_key(key) {
            return Err(CacheError::WrongType(format!(
                "get on list key {:?}",
                key
            )));
        }
        Ok(self.strings.get(key).cloned())
    }

    fn incr(&mut self, key: &str) -> Result<i64> {
        if self.lists.contains_key(key) {
            return Err(CacheError::WrongType(format!(
                "incr on list key {:?}",
                key
            )));
        }
        let current: i64 = match self.strings.get(key) {
            Some(raw) => {
                let text = std::str::from_utf8(raw).map_err(|_| {
                    CacheError::WrongType(format!("incr on non-integer key {:?}", key))
                })?;
                text.parse::<i64>().map_err(|_| {
                    CacheError::WrongType(format!("incr on non-integer key {:?}", key))
                })?
            }
            None => 0,
        };
        let next = current + 1;
        self.strings
            .insert(key.to_string(), next.to_string().into_bytes());
        Ok(next)
    }

    fn rpush(&mut self, key: &str, value: &[u8]) -> Result<usize> {
        if self.strings.contains_key(key) {
            return Err(CacheError::WrongType(format!(
                "rpush on plain key {:?}",
                key
            )));
        }
        let entries = self.lists.entry(key.to_string()).or_insert_with(Vec::new);
        entries.push(value.to_vec());
        Ok(entries.len())
    }

    fn list(&mut self, key: &str) -> Result<Vec<Vec<u8>>> {
        if self.strings.contains_key(key) {
            return Err(CacheError::WrongType(format!(
                "list read on plain key {:?}",
                key
            )));
        }
        Ok(self.lists.get(key).cloned().unwrap_or_default())
    }

    fn flushdb(&mut self) -> Result<()> {
        debug!(
            "flushdb - dropping {} plain keys and {} lists",
            self.strings.len(),
            self.lists.len()
        );
        self.strings.clear();
        self.lists.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incr_counts_from_zero() {
        let mut store = MemoryStore::new();
        assert_eq!(store.incr("hits").unwrap(), 1);
        assert_eq!(store.incr("hits").unwrap(), 2);
        assert_eq!(store.get("hits").unwrap(), Some(b"2".to_vec()));
    }

    #[test]
    fn incr_on_text_is_wrong_type() {
        let mut store = MemoryStore::new();
        store.set("greeting", b"hello").unwrap();
        assert!(matches!(
            store.incr("greeting"),
            Err(CacheError::WrongType(_))
        ));
    }

    #[test]
    fn rpush_keeps_append_order() {
        let mut store = MemoryStore::new();
        assert_eq!(store.rpush("log", b"a").unwrap(), 1);
        assert_eq!(store.rpush("log", b"b").unwrap(), 2);
        assert_eq!(
            store.list("log").unwrap(),
            vec![b"a".to_vec(), b"b".to_vec()]
        );
    }

    #[test]
    fn rpush_on_plain_key_is_wrong_type() {
        let mut store = MemoryStore::new();
        store.set("k", b"v").unwrap();
        assert!(matches!(
            store.rpush("k", b"x"),
            Err(CacheError::WrongType(_))
        ));
    }

    #[test]
    fn flushdb_drops_everything() {
        let mut store = MemoryStore::new();
        store.set("k", b"v").unwrap();
        store.rpush("log", b"a").unwrap();
        store.flushdb().unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        assert!(store.list("log").unwrap().is_empty());
    }
}
