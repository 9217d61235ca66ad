//! Core types for the Roster address-book manager.
//!
//! A [`Registry`] maps address-book names to [`ContactList`]s and answers
//! cross-book city/state queries. This crate does no console or file I/O;
//! persistence goes through the [`BookStore`] trait.

pub mod contact;
pub mod error;
pub mod list;
pub mod registry;
pub mod row;
pub mod store;

pub use contact::{Contact, ContactField, ContactUpdate};
pub use error::{Error, Result};
pub use list::ContactList;
pub use registry::Registry;
pub use store::{BookStore, MemoryStore};
