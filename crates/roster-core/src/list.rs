//! [`ContactList`] — the contents of one address book.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::{
  Error, Result,
  contact::{Contact, ContactField, ContactUpdate},
  store::BookStore,
};

/// An ordered collection of contacts with unique identity keys.
///
/// Lookups by name are linear scans; the first match wins. Since [`add`]
/// rejects duplicates, there is never more than one match.
///
/// [`add`]: ContactList::add
#[derive(Debug, Clone, Default)]
pub struct ContactList {
  contacts: Vec<Contact>,
}

impl ContactList {
  pub fn new() -> Self { Self::default() }

  pub fn len(&self) -> usize { self.contacts.len() }

  pub fn is_empty(&self) -> bool { self.contacts.is_empty() }

  pub fn iter(&self) -> std::slice::Iter<'_, Contact> { self.contacts.iter() }

  /// All contacts in stored order (insertion order, until
  /// [`sort_by_name`](Self::sort_by_name) rearranges it).
  pub fn contacts(&self) -> &[Contact] { &self.contacts }

  pub fn find(&self, first: &str, last: &str) -> Option<&Contact> {
    self.contacts.iter().find(|c| c.is_named(first, last))
  }

  // ── Mutations ─────────────────────────────────────────────────────────────

  /// Append `contact`, rejecting it if its identity key is already present.
  pub fn add(&mut self, contact: Contact) -> Result<()> {
    if self.contacts.contains(&contact) {
      warn!(name = %contact.full_name(), "rejected duplicate contact");
      return Err(Error::Duplicate {
        first: contact.first_name,
        last:  contact.last_name,
      });
    }

    info!(name = %contact.full_name(), "contact added");
    self.contacts.push(contact);
    Ok(())
  }

  /// Overwrite the non-identity fields of the contact named `first last`.
  pub fn edit(
    &mut self,
    first: &str,
    last: &str,
    update: ContactUpdate,
  ) -> Result<&Contact> {
    let Some(contact) =
      self.contacts.iter_mut().find(|c| c.is_named(first, last))
    else {
      return Err(not_found(first, last));
    };

    contact.apply(update);
    info!(first, last, "contact updated");
    Ok(&*contact)
  }

  /// Remove and return the contact named `first last`.
  pub fn delete(&mut self, first: &str, last: &str) -> Result<Contact> {
    let idx = self
      .contacts
      .iter()
      .position(|c| c.is_named(first, last))
      .ok_or_else(|| not_found(first, last))?;

    info!(first, last, "contact deleted");
    Ok(self.contacts.remove(idx))
  }

  /// Reorder the stored contacts by [`Contact::cmp_by_name`]. This is
  /// permanent: later listings see the sorted order.
  pub fn sort_by_name(&mut self) { self.contacts.sort_by(Contact::cmp_by_name); }

  // ── Queries ───────────────────────────────────────────────────────────────

  /// A stably sorted view on `field` (ordinal string order). The stored
  /// order is left untouched.
  pub fn sorted_by(&self, field: ContactField) -> Vec<&Contact> {
    let mut sorted: Vec<&Contact> = self.contacts.iter().collect();
    sorted.sort_by(|a, b| a.field(field).cmp(b.field(field)));
    sorted
  }

  pub fn sorted_by_city(&self) -> Vec<&Contact> {
    self.sorted_by(ContactField::City)
  }

  pub fn sorted_by_state(&self) -> Vec<&Contact> {
    self.sorted_by(ContactField::State)
  }

  pub fn sorted_by_zip(&self) -> Vec<&Contact> { self.sorted_by(ContactField::Zip) }

  /// Contacts whose `field` equals `value` exactly, in stored order.
  pub fn search_by(&self, field: ContactField, value: &str) -> Vec<&Contact> {
    let hits: Vec<&Contact> =
      self.contacts.iter().filter(|c| c.field(field) == value).collect();
    debug!(?field, value, hits = hits.len(), "searched contact list");
    hits
  }

  pub fn search_by_city(&self, city: &str) -> Vec<&Contact> {
    self.search_by(ContactField::City, city)
  }

  pub fn search_by_state(&self, state: &str) -> Vec<&Contact> {
    self.search_by(ContactField::State, state)
  }

  /// Number of contacts per distinct `field` value. Values with no contacts
  /// are absent rather than mapped to zero.
  pub fn count_by(&self, field: ContactField) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for contact in &self.contacts {
      *counts.entry(contact.field(field).to_owned()).or_default() += 1;
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

  /// Encode every contact as one row, in stored order.
  pub fn to_rows(&self) -> Vec<String> {
    self.contacts.iter().map(Contact::to_row).collect()
  }

  /// Decode `rows` and append the contacts not already present.
  ///
  /// All rows are decoded before anything is appended, so a malformed row
  /// leaves the list unchanged. Returns how many contacts were appended.
  pub fn extend_from_rows<I, R>(&mut self, rows: I) -> Result<usize>
  where
    I: IntoIterator<Item = R>,
    R: AsRef<str>,
  {
    let decoded = rows
      .into_iter()
      .map(|row| Contact::from_row(row.as_ref()))
      .collect::<Result<Vec<_>>>()?;

    let before = self.contacts.len();
    for contact in decoded {
      if !self.contacts.contains(&contact) {
        self.contacts.push(contact);
      }
    }
    Ok(self.contacts.len() - before)
  }

  /// Write this list to `store` under `book`.
  pub fn save_to<S: BookStore>(&self, store: &S, book: &str) -> Result<()> {
    store
      .save(book, &self.to_rows())
      .map_err(|e| Error::Persistence(Box::new(e)))?;
    info!(book, contacts = self.len(), "address book saved");
    Ok(())
  }

  /// Merge the contacts stored under `book` into this list.
  pub fn load_from<S: BookStore>(&mut self, store: &S, book: &str) -> Result<usize> {
    let rows = store
      .load(book)
      .map_err(|e| Error::Persistence(Box::new(e)))?;
    let added = self.extend_from_rows(&rows)?;
    info!(book, rows = rows.len(), added, "address book loaded");
    Ok(added)
  }
}

impl<'a> IntoIterator for &'a ContactList {
  type IntoIter = std::slice::Iter<'a, Contact>;
  type Item = &'a Contact;

  fn into_iter(self) -> Self::IntoIter { self.iter() }
}

fn not_found(first: &str, last: &str) -> Error {
  warn!(first, last, "contact not found");
  Error::ContactNotFound { first: first.to_owned(), last: last.to_owned() }
}
