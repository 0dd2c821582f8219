//! Insertion-ordered owning list.

use std::slice;

use super::Item;
use crate::{MapsError, Result};

/// Insertion-ordered sequence that owns its elements.
///
/// Elements are cloned in by [`ItemList::append`] and cloned out by
/// [`ItemList::foreach`]. Dropping the list releases every element.
///
/// # Examples
/// ```
/// use maps_core::ItemList;
///
/// let mut names: ItemList<String> = ItemList::new();
/// names.append(&"first".to_owned())?;
/// names.append(&"second".to_owned())?;
///
/// let mut seen = Vec::new();
/// names.foreach(|index, total, name| {
///     seen.push((index, total, name));
///     true
/// })?;
/// assert_eq!(seen[1], (1, 2, "second".to_owned()));
/// # Ok::<(), maps_core::MapsError>(())
/// ```
#[derive(Debug, PartialEq)]
pub struct ItemList<T> {
    items: Vec<T>,
}

impl<T> Default for ItemList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Item> ItemList<T> {
    /// Construct an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a list holding copies of `items`, in order.
    ///
    /// # Errors
    /// Fails when any element cannot be copied.
    pub fn try_from_slice(items: &[T]) -> Result<Self> {
        let mut list = Self::new();
        list.items
            .try_reserve_exact(items.len())
            .map_err(|_| MapsError::OutOfMemory)?;
        for item in items {
            list.items.push(item.try_clone()?);
        }
        Ok(list)
    }

    /// Append a copy of `item` at the tail.
    ///
    /// The list is left untouched when the copy or the allocation fails.
    ///
    /// # Errors
    /// Returns [`MapsError::OutOfMemory`] when space cannot be reserved, or
    /// the error raised while copying `item`.
    pub fn append(&mut self, item: &T) -> Result<()> {
        let copy = item.try_clone()?;
        self.append_owned(copy)
    }

    /// Append `item` without copying it.
    ///
    /// # Errors
    /// Returns [`MapsError::OutOfMemory`] when space cannot be reserved.
    pub fn append_owned(&mut self, item: T) -> Result<()> {
        self.items
            .try_reserve(1)
            .map_err(|_| MapsError::OutOfMemory)?;
        self.items.push(item);
        Ok(())
    }

    /// Remove the first entry equal to `item` and hand it back.
    ///
    /// The removed element is not released; the caller now owns it.
    ///
    /// # Errors
    /// Returns [`MapsError::NotFound`] when no entry matches.
    pub fn remove(&mut self, item: &T) -> Result<T>
    where
        T: PartialEq,
    {
        let index = self
            .items
            .iter()
            .position(|candidate| candidate == item)
            .ok_or(MapsError::NotFound {
                what: "list element",
            })?;
        Ok(self.items.remove(index))
    }

    /// Release every element and leave the list empty.
    pub fn remove_all(&mut self) {
        self.items.clear();
    }

    /// Number of elements held.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Return `true` when the list holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Visit each element in insertion order.
    ///
    /// `callback` receives `(index, total, copy)` and owns the copy. Returning
    /// `false` stops the traversal. The list itself is never modified.
    /// Returns the number of times `callback` ran.
    ///
    /// # Errors
    /// Returns the error raised while copying an element; the callback is
    /// not invoked for that element or any after it.
    pub fn foreach<F>(&self, mut callback: F) -> Result<usize>
    where
        F: FnMut(usize, usize, T) -> bool,
    {
        let total = self.items.len();
        let mut visited = 0;
        for (index, item) in self.items.iter().enumerate() {
            let copy = item.try_clone()?;
            visited += 1;
            if !callback(index, total, copy) {
                break;
            }
        }
        Ok(visited)
    }

    /// Borrow the elements in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Mutably borrow the elements in insertion order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.items.iter_mut()
    }
}

impl<T: Item> Item for ItemList<T> {
    fn try_clone(&self) -> Result<Self> {
        Self::try_from_slice(&self.items)
    }
}

impl<'a, T: Item> IntoIterator for &'a ItemList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
