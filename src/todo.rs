//! Todo Collection
//!
//! Ordered list of todo records mirrored to a key-value store after every
//! change.

use crate::error::StorageError;
use crate::models::TodoRecord;
use crate::storage::KeyValueStore;

/// Todo records plus the store they are persisted to
#[derive(Debug)]
pub struct TodoList<S> {
    store: S,
    key: String,
    items: Vec<TodoRecord>,
}

impl<S: KeyValueStore> TodoList<S> {
    /// Seed from the stored value. A missing or unreadable value yields an
    /// empty list; the bad value is replaced on the next write.
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let items: Vec<TodoRecord> = match store.get(&key) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("discarding unreadable todo data under {:?}: {}", key, e);
                Vec::new()
            }),
            None => Vec::new(),
        };
        log::debug!("loaded {} todos", items.len());
        Self { store, key, items }
    }

    pub fn items(&self) -> &[TodoRecord] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of records not yet completed
    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|t| !t.completed).count()
    }

    /// Append a new record. Returns the new id, or `None` for blank text.
    pub fn add(&mut self, text: &str, now_ms: u64) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.next_id(now_ms);
        self.items.push(TodoRecord {
            id,
            text: text.to_string(),
            completed: false,
        });
        self.persist();
        Some(id)
    }

    /// Flip `completed` on the matching record
    pub fn toggle(&mut self, id: u64) -> bool {
        let Some(item) = self.items.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        item.completed = !item.completed;
        self.persist();
        true
    }

    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        if self.items.len() == before {
            return false;
        }
        self.persist();
        true
    }

    // Ids are creation timestamps, bumped past the current max so that two
    // adds within the same millisecond stay distinct.
    fn next_id(&self, now_ms: u64) -> u64 {
        match self.items.iter().map(|t| t.id).max() {
            Some(max) if max >= now_ms => max + 1,
            _ => now_ms,
        }
    }

    fn persist(&self) {
        let result = serde_json::to_string(&self.items)
            .map_err(StorageError::from)
            .and_then(|json| self.store.set(&self.key, &json));
        if let Err(e) = result {
            log::error!("failed to persist todos: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    const KEY: &str = "todos";

    fn stored(list: &TodoList<MemoryStore>) -> Vec<TodoRecord> {
        let raw = list.store.get(KEY).expect("nothing persisted");
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn test_load_missing_key() {
        let list = TodoList::load(MemoryStore::default(), KEY);
        assert!(list.is_empty());
    }

    #[test]
    fn test_load_existing() {
        let store = MemoryStore::with_entry(KEY, r#"[{"id":1,"text":"Read ch. 3","completed":true}]"#);
        let list = TodoList::load(store, KEY);
        assert_eq!(list.len(), 1);
        assert!(list.items()[0].completed);
        assert_eq!(list.remaining(), 0);
    }

    #[test]
    fn test_load_unreadable_falls_back_to_empty() {
        let store = MemoryStore::with_entry(KEY, "{not json");
        let mut list = TodoList::load(store, KEY);
        assert!(list.is_empty());

        list.add("Fresh start", 10);
        assert_eq!(stored(&list), list.items());
    }

    #[test]
    fn test_add_whitespace_is_noop() {
        let mut list = TodoList::load(MemoryStore::default(), KEY);
        assert_eq!(list.add("   \t ", 100), None);
        assert_eq!(list.add("", 100), None);
        assert!(list.is_empty());
        assert!(list.store.get(KEY).is_none());
    }

    #[test]
    fn test_add_then_toggle_twice() {
        let mut list = TodoList::load(MemoryStore::default(), KEY);
        let id = list.add("Buy milk", 1_000).unwrap();
        assert!(!list.items()[0].completed);

        assert!(list.toggle(id));
        assert!(list.items()[0].completed);
        assert!(list.toggle(id));
        assert!(!list.items()[0].completed);
        assert_eq!(list.items()[0].text, "Buy milk");
    }

    #[test]
    fn test_toggle_unknown_id() {
        let mut list = TodoList::load(MemoryStore::default(), KEY);
        list.add("Grade essays", 5);
        let before = list.items().to_vec();
        assert!(!list.toggle(42));
        assert_eq!(list.items(), before.as_slice());
    }

    #[test]
    fn test_remove_unknown_id() {
        let mut list = TodoList::load(MemoryStore::default(), KEY);
        list.add("Grade essays", 5);
        list.add("Post slides", 6);
        let before = list.items().to_vec();
        assert!(!list.remove(999));
        assert_eq!(list.items(), before.as_slice());
    }

    #[test]
    fn test_ids_unique_within_same_millisecond() {
        let mut list = TodoList::load(MemoryStore::default(), KEY);
        let a = list.add("one", 500).unwrap();
        let b = list.add("two", 500).unwrap();
        let c = list.add("three", 499).unwrap();
        assert_eq!(a, 500);
        assert_eq!(b, 501);
        assert_eq!(c, 502);
        assert_eq!(list.add("four", 9_000), Some(9_000));
    }

    #[test]
    fn test_text_is_trimmed() {
        let mut list = TodoList::load(MemoryStore::default(), KEY);
        list.add("  Submit grades  ", 1);
        assert_eq!(list.items()[0].text, "Submit grades");
    }

    #[test]
    fn test_store_mirrors_memory_after_each_change() {
        let mut list = TodoList::load(MemoryStore::default(), KEY);
        let first = list.add("Buy milk", 1).unwrap();
        assert_eq!(stored(&list), list.items());

        let second = list.add("Call advisor", 2).unwrap();
        assert_eq!(stored(&list), list.items());

        list.toggle(second);
        assert_eq!(stored(&list), list.items());

        list.remove(first);
        assert_eq!(stored(&list), list.items());
        assert_eq!(list.len(), 1);
        assert_eq!(list.remaining(), 0);
    }
}
