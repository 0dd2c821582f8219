//! Keyed owning table with string and integer key variants.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use super::Item;
use crate::{MapsError, Result};

/// Key types accepted by [`KeyedTable`].
pub trait TableKey: Eq + Hash + Clone + Debug {}

impl TableKey for String {}
impl TableKey for i32 {}

/// Mapping from key to an owned value.
///
/// Enumeration order is unspecified; callers must not depend on it.
///
/// # Examples
/// ```
/// use maps_core::StringTable;
///
/// let mut props = StringTable::new();
/// props.set("surface", &"asphalt".to_owned())?;
/// props.set("surface", &"gravel".to_owned())?;
/// assert_eq!(props.get("surface")?, "gravel");
/// assert_eq!(props.len(), 1);
/// # Ok::<(), maps_core::MapsError>(())
/// ```
#[derive(Debug, PartialEq)]
pub struct KeyedTable<K: TableKey, V> {
    entries: HashMap<K, V>,
}

/// String-keyed table of strings.
pub type StringTable = KeyedTable<String, String>;

/// Integer-keyed table of integers.
pub type IntTable = KeyedTable<i32, i32>;

impl<K: TableKey, V> Default for KeyedTable<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: TableKey, V: Item> KeyedTable<K, V> {
    /// Construct an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a copy of `value` under a copy of `key`.
    ///
    /// Any previous value for the key is released before the new one is
    /// inserted. The table is untouched when copying or allocation fails.
    ///
    /// # Errors
    /// Returns [`MapsError::OutOfMemory`] when space cannot be reserved, or
    /// the error raised while copying `value`.
    pub fn set<Q>(&mut self, key: &Q, value: &V) -> Result<()>
    where
        K: Borrow<Q>,
        Q: ToOwned<Owned = K> + Hash + Eq + ?Sized,
    {
        let copy = value.try_clone()?;
        self.entries
            .try_reserve(1)
            .map_err(|_| MapsError::OutOfMemory)?;
        drop(self.entries.remove(key));
        self.entries.insert(key.to_owned(), copy);
        Ok(())
    }

    /// Return a copy of the value stored under `key`.
    ///
    /// # Errors
    /// Returns [`MapsError::NotFound`] when the key is absent.
    pub fn get<Q>(&self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries
            .get(key)
            .ok_or(MapsError::NotFound { what: "table key" })?
            .try_clone()
    }

    /// Return `true` when `key` is present.
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Remove `key` and hand its value back to the caller.
    ///
    /// # Errors
    /// Returns [`MapsError::NotFound`] when the key is absent.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries
            .remove(key)
            .ok_or(MapsError::NotFound { what: "table key" })
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when the table holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Visit every entry in unspecified order.
    ///
    /// `callback` receives `(index, total, key, value)` as owned copies.
    /// Returning `false` stops the traversal. Returns the number of times
    /// `callback` ran.
    ///
    /// # Errors
    /// Returns the error raised while copying a value.
    pub fn foreach<F>(&self, mut callback: F) -> Result<usize>
    where
        F: FnMut(usize, usize, K, V) -> bool,
    {
        let total = self.entries.len();
        let mut visited = 0;
        for (index, (key, value)) in self.entries.iter().enumerate() {
            let copy = value.try_clone()?;
            visited += 1;
            if !callback(index, total, key.clone(), copy) {
                break;
            }
        }
        Ok(visited)
    }
}

impl<K: TableKey, V: Item> Item for KeyedTable<K, V> {
    fn try_clone(&self) -> Result<Self> {
        let mut entries = HashMap::new();
        entries
            .try_reserve(self.entries.len())
            .map_err(|_| MapsError::OutOfMemory)?;
        for (key, value) in &self.entries {
            entries.insert(key.clone(), value.try_clone()?);
        }
        Ok(Self { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn overwrite_replaces_value() {
        let mut table = StringTable::new();
        table.set("k", &"one".to_owned()).expect("set");
        table.set("k", &"two".to_owned()).expect("set");
        assert_eq!(table.get("k").expect("present"), "two");
        assert_eq!(table.len(), 1);
    }

    #[rstest]
    fn missing_key_is_not_found() {
        let table = StringTable::new();
        assert!(matches!(
            table.get("absent"),
            Err(MapsError::NotFound { .. })
        ));
        assert!(!table.contains("absent"));
    }

    #[rstest]
    fn int_table_acts_as_set() {
        let mut set = IntTable::new();
        set.set(&7, &7).expect("set");
        assert!(set.contains(&7));
        assert!(!set.contains(&8));
    }

    #[rstest]
    fn clone_copies_every_entry() {
        let mut table = StringTable::new();
        table.set("a", &"1".to_owned()).expect("set");
        table.set("b", &"2".to_owned()).expect("set");
        let mut copy = table.try_clone().expect("clone");
        assert_eq!(copy, table);
        copy.remove("a").expect("present");
        assert!(table.contains("a"));
    }

    #[rstest]
    fn foreach_reports_total_and_can_stop() {
        let mut table = IntTable::new();
        for k in 0..4 {
            table.set(&k, &k).expect("set");
        }
        let mut totals = Vec::new();
        let visited = table
            .foreach(|index, total, key, value| {
                assert_eq!(key, value);
                totals.push(total);
                index < 1
            })
            .expect("iteration");
        assert_eq!(visited, 2);
        assert_eq!(totals, vec![4, 4]);
    }
}
