use fxhash::FxHashMap;
use std::hash::Hash;
use std::ops::Index;

/// Sparse map from keys to reals where every absent key reads as 0.
///
/// Reads never insert. No `PartialEq` is provided: a key that was never
/// written and a key explicitly set to 0 must read the same.
#[derive(Debug, Clone)]
pub struct Counter<K: Hash + Eq> {
    values: FxHashMap<K, f64>,
}

impl<K: Hash + Eq> Default for Counter<K> {
    fn default() -> Self {
        Self {
            values: FxHashMap::default(),
        }
    }
}

impl<K: Hash + Eq> Counter<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &K) -> f64 {
        *self.values.get(key).unwrap_or(&0.0)
    }

    pub fn insert(&mut self, key: K, value: f64) {
        self.values.insert(key, value);
    }

    /// Adds `delta` to the stored value, starting from 0 for a new key.
    pub fn add(&mut self, key: K, delta: f64) {
        *self.values.entry(key).or_insert(0.0) += delta;
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.values.contains_key(key)
    }

    /// Number of keys that have been written.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &f64)> {
        self.values.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.values.keys()
    }
}

impl<K: Hash + Eq> Index<&K> for Counter<K> {
    type Output = f64;

    fn index(&self, key: &K) -> &f64 {
        self.values.get(key).unwrap_or(&0.0)
    }
}

impl<K: Hash + Eq> FromIterator<(K, f64)> for Counter<K> {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<K: Hash + Eq> Extend<(K, f64)> for Counter<K> {
    fn extend<I: IntoIterator<Item = (K, f64)>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}
