//! [`Registry`] — every address book, keyed by name, plus cross-book queries.
//!
//! City and state searches run over all books and remember their last result
//! per key. The `view_by_*` methods read that remembered result back without
//! recomputing it, so they only reflect contacts as of the last search for
//! the same key.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, info, warn};

use crate::{
  Error, Result,
  contact::{Contact, ContactField},
  list::ContactList,
  store::BookStore,
};

#[derive(Debug, Clone, Default)]
pub struct Registry {
  books:    HashMap<String, ContactList>,
  by_city:  HashMap<String, Vec<Contact>>,
  by_state: HashMap<String, Vec<Contact>>,
}

impl Registry {
  pub fn new() -> Self { Self::default() }

  pub fn len(&self) -> usize { self.books.len() }

  pub fn is_empty(&self) -> bool { self.books.is_empty() }

  // ── Books ─────────────────────────────────────────────────────────────────

  /// Register an empty address book under `name`.
  ///
  /// An existing book is never replaced; the call fails with
  /// [`Error::BookExists`] instead.
  pub fn create_book(&mut self, name: &str) -> Result<&mut ContactList> {
    if self.books.contains_key(name) {
      warn!(book = name, "address book already exists");
      return Err(Error::BookExists(name.to_owned()));
    }

    info!(book = name, "address book created");
    Ok(self.books.entry(name.to_owned()).or_default())
  }

  pub fn book(&self, name: &str) -> Result<&ContactList> {
    self
      .books
      .get(name)
      .ok_or_else(|| Error::BookNotFound(name.to_owned()))
  }

  pub fn book_mut(&mut self, name: &str) -> Result<&mut ContactList> {
    self
      .books
      .get_mut(name)
      .ok_or_else(|| Error::BookNotFound(name.to_owned()))
  }

  pub fn contains(&self, name: &str) -> bool { self.books.contains_key(name) }

  /// Book names in unspecified order.
  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.books.keys().map(String::as_str)
  }

  // ── Cross-book search ─────────────────────────────────────────────────────

  fn collect(&self, field: ContactField, value: &str) -> Vec<Contact> {
    self
      .books
      .values()
      .flat_map(|book| book.search_by(field, value))
      .cloned()
      .collect()
  }

  /// Every contact in `city` across all books, grouped by book. The result
  /// replaces whatever [`view_by_city`](Self::view_by_city) returned for
  /// `city` before.
  pub fn search_city(&mut self, city: &str) -> &[Contact] {
    let hits = self.collect(ContactField::City, city);
    debug!(city, hits = hits.len(), "searched all books by city");
    let slot = self.by_city.entry(city.to_owned()).or_default();
    *slot = hits;
    slot.as_slice()
  }

  /// The state counterpart of [`search_city`](Self::search_city).
  pub fn search_state(&mut self, state: &str) -> &[Contact] {
    let hits = self.collect(ContactField::State, state);
    debug!(state, hits = hits.len(), "searched all books by state");
    let slot = self.by_state.entry(state.to_owned()).or_default();
    *slot = hits;
    slot.as_slice()
  }

  /// The result of the last [`search_city`](Self::search_city) for `city`,
  /// or an empty slice if it was never searched.
  pub fn view_by_city(&self, city: &str) -> &[Contact] {
    self.by_city.get(city).map(Vec::as_slice).unwrap_or_default()
  }

  pub fn view_by_state(&self, state: &str) -> &[Contact] {
    self.by_state.get(state).map(Vec::as_slice).unwrap_or_default()
  }

  // ── Counts ────────────────────────────────────────────────────────────────

  /// For each value of `field`, the number of books holding at least one
  /// contact with that value. This counts books, not contacts.
  pub fn count_by(&self, field: ContactField) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for key in self.books.values().flat_map(|book| book.count_by(field).into_keys()) {
      *counts.entry(key).or_default() += 1;
    }
    counts
  }

  pub fn count_by_city(&self) -> BTreeMap<String, usize> {
    self.count_by(ContactField::City)
  }

  pub fn count_by_state(&self) -> BTreeMap<String, usize> {
    self.count_by(ContactField::State)
  }

  // ── Persistence ───────────────────────────────────────────────────────────

  pub fn save_book<S: BookStore>(&self, store: &S, name: &str) -> Result<()> {
    self.book(name)?.save_to(store, name)
  }

  /// Merge the stored rows of `name` into the book, registering the book
  /// first if it does not exist yet. Returns how many contacts were added.
  pub fn load_book<S: BookStore>(&mut self, store: &S, name: &str) -> Result<usize> {
    if let Some(book) = self.books.get_mut(name) {
      return book.load_from(store, name);
    }
    let mut book = ContactList::new();
    let added = book.load_from(store, name)?;
    self.books.insert(name.to_owned(), book);
    Ok(added)
  }

}
