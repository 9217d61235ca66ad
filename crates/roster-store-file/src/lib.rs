//! Flat-file backend for the Roster address-book store.
//!
//! Each address book lives in its own file under a root directory, one
//! encoded contact row per line.

mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::{DEFAULT_EXTENSION, FileStore};
