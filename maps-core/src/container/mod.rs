//! Owning containers shared by every composite entity.
//!
//! Elements enter a container by deep copy and leave it by deep copy.
//! [`Item`] is the clone half of that contract. `Drop` is the release half,
//! so dropping a container always releases every element it holds.

mod item_list;
mod keyed_table;

pub use item_list::ItemList;
pub use keyed_table::{IntTable, KeyedTable, StringTable, TableKey};

use crate::{MapsError, Result};

/// Values that can be deep-copied into and out of containers.
///
/// Copies are fallible so that allocation failure surfaces as
/// [`MapsError::OutOfMemory`] instead of aborting.
pub trait Item: Sized {
    /// Produce an independently owned copy of `self`.
    ///
    /// # Errors
    /// Returns an error when any part of the copy cannot be built.
    fn try_clone(&self) -> Result<Self>;
}

impl Item for String {
    fn try_clone(&self) -> Result<Self> {
        let mut copy = Self::new();
        copy.try_reserve_exact(self.len())
            .map_err(|_| MapsError::OutOfMemory)?;
        copy.push_str(self);
        Ok(copy)
    }
}

impl Item for i32 {
    fn try_clone(&self) -> Result<Self> {
        Ok(*self)
    }
}
