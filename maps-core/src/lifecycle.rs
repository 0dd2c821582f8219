//! Clone-by-replay for composite entities.
//!
//! A composite entity lists its fields once, in [`Entity::FIELDS`]. Each
//! entry knows how to replay one field from a source onto a target through
//! the target's public setter. [`deep_copy`] walks that list against a blank
//! target and drops the partial target on the first failure, so a half-built
//! copy is never handed out.

use log::debug;

use crate::{Capability, MapsError, Result};

/// Ownership category of an entity field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Plain value copied bit for bit.
    Primitive,
    /// Nested entity owned exclusively by the parent.
    OwnedHandle,
    /// [`ItemList`](crate::ItemList) owned by the parent.
    OwnedList,
    /// [`KeyedTable`](crate::KeyedTable) owned by the parent.
    OwnedMap,
}

/// Replays one field from `source` onto `target`.
pub type CopyFn<E> = fn(&E, &mut E) -> Result<()>;

/// Declarative description of one entity field.
pub struct Field<E> {
    /// Field name, used in diagnostics.
    pub name: &'static str,
    /// Ownership category.
    pub kind: FieldKind,
    copy: CopyFn<E>,
}

impl<E> Field<E> {
    /// Describe a field and how to replay it.
    #[must_use]
    pub const fn new(name: &'static str, kind: FieldKind, copy: CopyFn<E>) -> Self {
        Self { name, kind, copy }
    }

    /// Replay this field from `source` onto `target`.
    ///
    /// # Errors
    /// Returns whatever the target's setter rejects.
    pub fn replay(&self, source: &E, target: &mut E) -> Result<()> {
        (self.copy)(source, target)
    }
}

/// A composite entity whose clone replays its setters.
pub trait Entity: Sized + 'static {
    /// Entity name, used in diagnostics.
    const NAME: &'static str;

    /// Every field, in replay order.
    const FIELDS: &'static [Field<Self>];

    /// A zero-initialised instance for a clone to populate.
    ///
    /// Taking a [`Capability`] keeps blank entities behind the feature gate.
    fn blank(cap: Capability) -> Self;
}

/// Build an independent copy of `source` by replaying [`Entity::FIELDS`].
///
/// # Errors
/// Returns the first setter error. The partially built copy is dropped
/// before the error is returned.
pub fn deep_copy<E: Entity>(source: &E) -> Result<E> {
    let mut target = E::blank(Capability::held());
    for field in E::FIELDS {
        if let Err(err) = field.replay(source, &mut target) {
            debug!(
                "clone of {} failed at field {} ({:?}): {err}; discarding partial copy",
                E::NAME,
                field.name,
                field.kind
            );
            drop(target);
            return Err(err);
        }
    }
    Ok(target)
}

/// Turn a `NotFound` result into `None`, passing other outcomes through.
///
/// Field replays use this to skip optional fields that were never set.
///
/// # Errors
/// Returns any error other than [`MapsError::NotFound`].
pub fn if_present<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(MapsError::NotFound { .. }) => Ok(None),
        Err(err) => Err(err),
    }
}
