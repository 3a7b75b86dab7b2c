//! Core types for kindex.
//!
//! - [`ObjectReference`] and [`GroupKind`]: the identity of a managed object
//!   and of its resource type.
//! - [`Error`] and [`Result`]: typed, recoverable errors for parsing and
//!   configuration loading.

pub mod error;
pub mod reference;
pub mod result;

pub use error::Error;
pub use reference::{GroupKind, ObjectReference};
pub use result::{Result, ResultExt};
