//! The `BookStore` trait and an in-memory implementation.
//!
//! A store persists the encoded rows of one address book under the book's
//! name. Backends (e.g. `roster-store-file`) implement the trait; the
//! [`ContactList`](crate::ContactList) and [`Registry`](crate::Registry)
//! persistence helpers depend only on this abstraction.

use std::{cell::RefCell, collections::HashMap};

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a flat, name-keyed row store.
///
/// Calls are blocking. A failed `save` may leave a partially written book
/// behind; a failed `load` has no effect on the caller's in-memory state.
pub trait BookStore {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Replace whatever is stored under `book` with `rows`.
  fn save(&self, book: &str, rows: &[String]) -> Result<(), Self::Error>;

  /// Return the rows stored under `book`, in stored order.
  ///
  /// A book that was never saved yields an empty vector, not an error.
  fn load(&self, book: &str) -> Result<Vec<String>, Self::Error>;
}

impl<S: BookStore + ?Sized> BookStore for &S {
  type Error = S::Error;

  fn save(&self, book: &str, rows: &[String]) -> Result<(), Self::Error> {
    (**self).save(book, rows)
  }

  fn load(&self, book: &str) -> Result<Vec<String>, Self::Error> {
    (**self).load(book)
  }
}

// ─── MemoryStore ─────────────────────────────────────────────────────────────

/// A [`BookStore`] that keeps rows in process memory — useful for testing.
#[derive(Debug, Default)]
pub struct MemoryStore {
  books: RefCell<HashMap<String, Vec<String>>>,
}

impl MemoryStore {
  pub fn new() -> Self { Self::default() }

  /// Whether anything was ever saved under `book`.
  pub fn contains(&self, book: &str) -> bool {
    self.books.borrow().contains_key(book)
  }
}

impl BookStore for MemoryStore {
  type Error = std::convert::Infallible;

  fn save(&self, book: &str, rows: &[String]) -> Result<(), Self::Error> {
    self.books.borrow_mut().insert(book.to_owned(), rows.to_vec());
    Ok(())
  }

  fn load(&self, book: &str) -> Result<Vec<String>, Self::Error> {
    Ok(self.books.borrow().get(book).cloned().unwrap_or_default())
  }
}
