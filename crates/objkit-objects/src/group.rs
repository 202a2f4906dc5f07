use std::collections::HashMap;
use std::hash::Hash;

/// A map from each key to every value recorded for it.
///
/// Keys iterate in the order they were first inserted; values keep their
/// insertion order within a key.
#[derive(Debug, Clone)]
pub struct Multimap<K, V> {
    index: HashMap<K, usize>,
    entries: Vec<(K, Vec<V>)>,
}

impl<K: PartialEq, V: PartialEq> PartialEq for Multimap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq, V: Eq> Eq for Multimap<K, V> {}

impl<K, V> Default for Multimap<K, V> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<K: Hash + Eq + Clone, V> Multimap<K, V> {
    /// An empty multimap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` to the values of `key`.
    pub fn insert(&mut self, key: K, value: V) {
        if let Some(&slot) = self.index.get(&key) {
            self.entries[slot].1.push(value);
            return;
        }
        let _ = self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, vec![value]));
    }

    /// The values recorded for `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&[V]> {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].1.as_slice())
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no key has been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in first-insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// `(key, values)` pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> {
        self.entries
            .iter()
            .map(|(key, values)| (key, values.as_slice()))
    }
}

impl<K, V> IntoIterator for Multimap<K, V> {
    type Item = (K, Vec<V>);
    type IntoIter = std::vec::IntoIter<(K, Vec<V>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Group `items` into a multimap, keyed by `key_of` with values from `value_of`.
///
/// ```
/// use objkit_objects::{CityEntry, group};
///
/// let cities = vec![
///     CityEntry::new("Belarus", "Brest"),
///     CityEntry::new("Russia", "Omsk"),
///     CityEntry::new("Belarus", "Grodno"),
/// ];
/// let grouped = group(&cities, |c| c.country.clone(), |c| c.city.clone());
/// let belarus = ["Brest".to_string(), "Grodno".to_string()];
/// assert_eq!(grouped.get(&"Belarus".to_string()), Some(&belarus[..]));
/// assert_eq!(grouped.keys().collect::<Vec<_>>(), ["Belarus", "Russia"]);
/// ```
#[must_use]
pub fn group<T, K, V>(
    items: impl IntoIterator<Item = T>,
    mut key_of: impl FnMut(&T) -> K,
    mut value_of: impl FnMut(&T) -> V,
) -> Multimap<K, V>
where
    K: Hash + Eq + Clone,
{
    let mut grouped = Multimap::new();
    for item in items {
        grouped.insert(key_of(&item), value_of(&item));
    }
    grouped
}
