use std::collections::HashMap;
use std::hash::Hash;

/// Explicit memoization table, passed by `&mut` into recursive solvers
#[derive(Debug, Clone)]
pub struct MemoCache<K, V> {
    cache: HashMap<K, V>,
}

impl<K, V> MemoCache<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        MemoCache {
            cache: HashMap::new(),
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.cache.get(key)
    }

    /// Returns the cached value for `key`, computing and storing it on a miss.
    ///
    /// `compute` cannot reach the cache itself; recursive solvers look the key
    /// up with [`get`](Self::get) first and [`insert`](Self::insert) afterwards.
    pub fn get_or_insert_with<F>(&mut self, key: K, compute: F) -> &V
    where
        F: FnOnce(&K) -> V,
    {
        self.cache.entry(key).or_insert_with_key(compute)
    }

    pub fn insert(&mut self, key: K, value: V) {
        self.cache.insert(key, value);
    }

    pub fn contains(&self, key: &K) -> bool {
        self.cache.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

impl<K, V> Default for MemoCache<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Wraps a one-argument function with a private cache
pub fn memoize<T, R, F>(mut function: F) -> impl FnMut(T) -> R
where
    T: Eq + Hash + Clone,
    R: Clone,
    F: FnMut(&T) -> R,
{
    let mut cache = MemoCache::new();
    move |input: T| cache.get_or_insert_with(input, |key| function(key)).clone()
}

/// Wraps a two-argument function with a private cache keyed by the pair
pub fn memoize2<A, B, R, F>(mut function: F) -> impl FnMut(A, B) -> R
where
    A: Eq + Hash + Clone,
    B: Eq + Hash + Clone,
    R: Clone,
    F: FnMut(&A, &B) -> R,
{
    let mut cache = MemoCache::new();
    move |a: A, b: B| {
        cache
            .get_or_insert_with((a, b), |(a, b)| function(a, b))
            .clone()
    }
}
