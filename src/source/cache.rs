//! Document cache: blank templates and filled outputs

use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;

/// Cache key under which a downloaded blank template is kept
pub fn template_key(template: &str) -> String {
    format!("template:{}", template)
}

struct CacheInner {
    lru: LruCache<String, Vec<u8>>,
    total_bytes: usize,
}

/// LRU cache of document bytes with an entry count and a byte budget
pub struct CacheManager {
    inner: Mutex<CacheInner>,
    max_bytes: usize,
}

impl CacheManager {
    pub fn new(capacity: usize, max_bytes: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Mutex::new(CacheInner {
                lru: LruCache::new(capacity),
                total_bytes: 0,
            }),
            max_bytes,
        }
    }

    /// Store document bytes, evicting least recently used entries until the
    /// byte budget holds. Returns false when the entry alone exceeds the budget.
    pub fn put(&self, key: String, data: Vec<u8>) -> bool {
        let new_size = data.len();
        if new_size > self.max_bytes {
            return false;
        }

        let mut inner = self.inner.lock();

        if let Some(old) = inner.lru.pop(&key) {
            inner.total_bytes = inner.total_bytes.saturating_sub(old.len());
        }

        while inner.total_bytes + new_size > self.max_bytes {
            match inner.lru.pop_lru() {
                Some((_, evicted)) => {
                    inner.total_bytes = inner.total_bytes.saturating_sub(evicted.len());
                }
                None => break,
            }
        }

        // A full LRU drops its oldest entry on insert
        if let Some((_, evicted)) = inner.lru.push(key, data) {
            inner.total_bytes = inner.total_bytes.saturating_sub(evicted.len());
        }
        inner.total_bytes += new_size;
        true
    }

    /// Store bytes under a fresh unique key and return the key
    pub fn put_new(&self, data: Vec<u8>) -> Option<String> {
        let key = {
            let inner = self.inner.lock();
            loop {
                let key = uuid::Uuid::new_v4().to_string();
                if !inner.lru.contains(&key) {
                    break key;
                }
            }
        };
        self.put(key.clone(), data).then_some(key)
    }

    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.inner.lock().lru.get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.inner.lock().lru.contains(key)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().lru.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().lru.is_empty()
    }

    pub fn total_bytes(&self) -> usize {
        self.inner.lock().total_bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_key() {
        assert_eq!(template_key("disc002"), "template:disc002");
    }

    #[test]
    fn test_cache_basic_operations() {
        let cache = CacheManager::new(10, 1024 * 1024);
        assert!(cache.is_empty());

        assert!(cache.put(template_key("disc001"), vec![1, 2, 3]));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.total_bytes(), 3);
        assert_eq!(cache.get("template:disc001"), Some(vec![1, 2, 3]));
        assert!(!cache.contains("template:disc002"));
    }

    #[test]
    fn test_entry_capacity_eviction_keeps_byte_count() {
        let cache = CacheManager::new(2, 1024 * 1024);

        cache.put("a".to_string(), vec![0u8; 4]);
        cache.put("b".to_string(), vec![0u8; 5]);
        cache.put("c".to_string(), vec![0u8; 6]);

        assert!(!cache.contains("a"));
        assert!(cache.contains("b"));
        assert!(cache.contains("c"));
        assert_eq!(cache.total_bytes(), 11);
    }

    #[test]
    fn test_byte_budget_eviction() {
        let cache = CacheManager::new(10, 100);

        cache.put("filled-1".to_string(), vec![0u8; 40]);
        cache.put("filled-2".to_string(), vec![0u8; 40]);
        cache.put("filled-3".to_string(), vec![0u8; 40]);

        assert!(!cache.contains("filled-1"));
        assert_eq!(cache.total_bytes(), 80);
    }

    #[test]
    fn test_oversized_entry_rejected() {
        let cache = CacheManager::new(10, 50);
        assert!(!cache.put("huge".to_string(), vec![0u8; 100]));
        assert!(cache.put_new(vec![0u8; 100]).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_put_new_generates_distinct_keys() {
        let cache = CacheManager::new(10, 1024);
        let first = cache.put_new(vec![1]).unwrap();
        let second = cache.put_new(vec![2]).unwrap();

        assert_ne!(first, second);
        assert_eq!(first.len(), 36);
        assert_eq!(cache.get(&second), Some(vec![2]));
    }

    #[test]
    fn test_replacing_key_adjusts_bytes() {
        let cache = CacheManager::new(10, 1024);
        cache.put("k".to_string(), vec![0u8; 50]);
        cache.put("k".to_string(), vec![0u8; 30]);
        assert_eq!(cache.total_bytes(), 30);
        assert_eq!(cache.len(), 1);
    }
}
