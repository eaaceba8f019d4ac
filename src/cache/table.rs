use lru::LruCache;
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::Mutex;

/// A bounded, thread-safe LRU table.
///
/// Capacity is fixed at construction; inserting past it evicts the
/// least recently used entry, so memory stays flat over long sessions.
/// Values are cloned out on hit.
pub struct Table<K, V> {
    memory: Mutex<LruCache<K, V>>,
}

impl<K: Hash + Eq, V: Clone> Table<K, V> {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).expect("cache capacity must be positive");
        Self {
            memory: Mutex::new(LruCache::new(capacity)),
        }
    }
    pub fn get(&self, key: &K) -> Option<V> {
        self.memory
            .lock()
            .expect("cache lock poisoned")
            .get(key)
            .cloned()
    }
    pub fn put(&self, key: K, value: V) {
        self.memory
            .lock()
            .expect("cache lock poisoned")
            .put(key, value);
    }
    pub fn len(&self) -> usize {
        self.memory.lock().expect("cache lock poisoned").len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn clear(&self) {
        self.memory.lock().expect("cache lock poisoned").clear();
    }
    /// Clones the resident values, most recently used first.
    pub fn snapshot(&self) -> Vec<V> {
        self.memory
            .lock()
            .expect("cache lock poisoned")
            .iter()
            .map(|(_, v)| v.clone())
            .collect()
    }
}
