//! Events raised by a map view.
//!
//! A [`ViewEvent`] is a tagged value: its [`EventKind`] decides which fields
//! it may carry, and every accessor enforces that. Object events borrow the
//! view object they refer to instead of owning it.

#![forbid(unsafe_code)]

mod event;
mod kinds;

pub use event::{ScreenPoint, ViewEvent};
pub use kinds::{ActionType, EventKind, GestureType};
