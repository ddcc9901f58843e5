use core::hash::BuildHasher;
use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;

/// Read access to a multi-valued string map, keyed by parameter name.
///
/// Implemented for [`Values`] and for the common map types holding
/// `String -> Vec<String>`, so callers can bind from whatever their query
/// parser produced.
pub trait ValueSource {
    /// All values recorded for `key`, in the order they were added, or
    /// `None` when the key is absent. A present key may map to an empty list.
    fn values(&self, key: &str) -> Option<&[String]>;

    /// Returns true if `key` is present, even with no values.
    fn contains_key(&self, key: &str) -> bool {
        self.values(key).is_some()
    }
}

impl<T: ValueSource + ?Sized> ValueSource for &T {
    fn values(&self, key: &str) -> Option<&[String]> {
        (**self).values(key)
    }
}

impl<S: BuildHasher> ValueSource for HashMap<String, Vec<String>, S> {
    fn values(&self, key: &str) -> Option<&[String]> {
        self.get(key).map(Vec::as_slice)
    }
}

impl ValueSource for BTreeMap<String, Vec<String>> {
    fn values(&self, key: &str) -> Option<&[String]> {
        self.get(key).map(Vec::as_slice)
    }
}

impl<S: BuildHasher> ValueSource for IndexMap<String, Vec<String>, S> {
    fn values(&self, key: &str) -> Option<&[String]> {
        self.get(key).map(Vec::as_slice)
    }
}

/// An insertion-ordered multi-map of query parameters.
///
/// ```
/// use querybind::Values;
///
/// let mut q: Values = [("tag", "a"), ("page", "2")].into_iter().collect();
/// q.add("tag", "b");
/// assert_eq!(q.get("tag"), Some("a"));
/// assert_eq!(q.get_all("tag"), ["a", "b"]);
/// assert_eq!(q.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Values {
    inner: IndexMap<String, Vec<String>>,
}

impl Values {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` to the values of `key`.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.entry(key.into()).or_default().push(value.into());
    }

    /// Replaces every value of `key` with `value`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.insert(key.into(), vec![value.into()]);
    }

    /// Replaces every value of `key` with `values`, which may be empty.
    pub fn set_all<I, V>(&mut self, key: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.inner
            .insert(key.into(), values.into_iter().map(Into::into).collect());
    }

    /// The first value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner
            .get(key)
            .and_then(|v| v.first())
            .map(String::as_str)
    }

    /// Every value of `key`; empty when the key is absent.
    pub fn get_all(&self, key: &str) -> &[String] {
        self.inner.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns true if `key` is present.
    pub fn has(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    /// Removes `key`, keeping the order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.inner.shift_remove(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if there are no keys.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates keys with their values, in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl ValueSource for Values {
    fn values(&self, key: &str) -> Option<&[String]> {
        self.inner.get(key).map(Vec::as_slice)
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Values {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Values {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Values::new();
        values.extend(iter);
        values
    }
}

impl From<IndexMap<String, Vec<String>>> for Values {
    fn from(inner: IndexMap<String, Vec<String>>) -> Self {
        Self { inner }
    }
}

impl From<Values> for IndexMap<String, Vec<String>> {
    fn from(values: Values) -> Self {
        values.inner
    }
}

impl<'a> IntoIterator for &'a Values {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = indexmap::map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
