//! Shared cache of zero arrays.

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use parking_lot::Mutex;

/// Hands out one canonical all-zero array per length.
///
/// Zero terms stay as [`Term::Zero`](crate::Term::Zero) tags while an
/// expression is evaluated; the cache only supplies the backing array when a
/// zero has to be returned as real data. The cache is thread-safe and meant
/// to be shared between combiners through an `Arc`.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use sigcalc::ZeroCache;
///
/// let cache = ZeroCache::new();
/// let a = cache.zeros(4);
/// let b = cache.zeros(4);
/// assert!(Arc::ptr_eq(&a, &b));
/// assert_eq!(&*a, &[0.0; 4]);
/// ```
#[derive(Debug, Default)]
pub struct ZeroCache {
    arrays: Mutex<HashMap<usize, Arc<[f64]>>>,
}

impl ZeroCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the zero array of length `len`, allocating it on first use.
    pub fn zeros(&self, len: usize) -> Arc<[f64]> {
        let mut arrays = self.arrays.lock();
        arrays
            .entry(len)
            .or_insert_with(|| {
                debug!("allocating zero array of length {len}");
                vec![0.0; len].into()
            })
            .clone()
    }

    /// Number of distinct lengths currently cached.
    pub fn len(&self) -> usize {
        self.arrays.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrays.lock().is_empty()
    }

    /// Drops every cached array. Arrays already handed out stay valid.
    pub fn clear(&self) {
        self.arrays.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_array_per_length() {
        let cache = ZeroCache::new();
        assert!(cache.is_empty());
        let three = cache.zeros(3);
        let five = cache.zeros(5);
        assert_eq!(three.len(), 3);
        assert_eq!(five.len(), 5);
        assert!(Arc::ptr_eq(&three, &cache.zeros(3)));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_clear() {
        let cache = ZeroCache::new();
        let before = cache.zeros(2);
        cache.clear();
        assert!(cache.is_empty());
        let after = cache.zeros(2);
        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(before, after);
    }

    #[test]
    fn test_shared_between_threads() {
        let cache = Arc::new(ZeroCache::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || cache.zeros(8))
            })
            .collect();
        let arrays: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for array in &arrays[1..] {
            assert!(Arc::ptr_eq(&arrays[0], array));
        }
    }
}
