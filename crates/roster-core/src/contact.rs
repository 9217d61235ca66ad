//! Contact — a single person's entry in an address book.
//!
//! A contact is identified by its `(first_name, last_name)` pair. Every other
//! field is free text and can be rewritten through [`Contact::apply`].

use std::{
  cmp::Ordering,
  fmt,
  hash::{Hash, Hasher},
};

use serde::Serialize;

// ─── Fields ──────────────────────────────────────────────────────────────────

/// The eight contact fields, in declared (and persisted) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
  FirstName,
  LastName,
  Address,
  City,
  State,
  Zip,
  PhoneNumber,
  Email,
}

impl ContactField {
  pub const ALL: [ContactField; 8] = [
    Self::FirstName,
    Self::LastName,
    Self::Address,
    Self::City,
    Self::State,
    Self::Zip,
    Self::PhoneNumber,
    Self::Email,
  ];

  /// Human-readable label used in record rendering and prompts.
  pub fn label(self) -> &'static str {
    match self {
      Self::FirstName => "First Name",
      Self::LastName => "Last Name",
      Self::Address => "Address",
      Self::City => "City",
      Self::State => "State",
      Self::Zip => "ZIP Code",
      Self::PhoneNumber => "Phone Number",
      Self::Email => "Email",
    }
  }
}

// ─── Contact ─────────────────────────────────────────────────────────────────

/// One address-book entry. No field is validated; empty strings are allowed.
///
/// Equality and hashing look only at the identity key (first and last name,
/// case-sensitive). Two contacts with the same name but different addresses
/// compare equal.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Contact {
  pub first_name:   String,
  pub last_name:    String,
  pub address:      String,
  pub city:         String,
  pub state:        String,
  pub zip:          String,
  pub phone_number: String,
  pub email:        String,
}

impl Contact {
  #[allow(clippy::too_many_arguments)]
  pub fn new(
    first_name: impl Into<String>,
    last_name: impl Into<String>,
    address: impl Into<String>,
    city: impl Into<String>,
    state: impl Into<String>,
    zip: impl Into<String>,
    phone_number: impl Into<String>,
    email: impl Into<String>,
  ) -> Self {
    Self {
      first_name:   first_name.into(),
      last_name:    last_name.into(),
      address:      address.into(),
      city:         city.into(),
      state:        state.into(),
      zip:          zip.into(),
      phone_number: phone_number.into(),
      email:        email.into(),
    }
  }

  pub fn field(&self, field: ContactField) -> &str {
    match field {
      ContactField::FirstName => &self.first_name,
      ContactField::LastName => &self.last_name,
      ContactField::Address => &self.address,
      ContactField::City => &self.city,
      ContactField::State => &self.state,
      ContactField::Zip => &self.zip,
      ContactField::PhoneNumber => &self.phone_number,
      ContactField::Email => &self.email,
    }
  }

  /// Whether this contact carries the given identity key.
  pub fn is_named(&self, first: &str, last: &str) -> bool {
    self.first_name == first && self.last_name == last
  }

  /// `"first last"`, the string the name ordering compares.
  pub fn full_name(&self) -> String {
    format!("{} {}", self.first_name, self.last_name)
  }

  /// Case-insensitive ordering on [`Contact::full_name`].
  ///
  /// Deliberately not an `Ord` impl: two contacts can be equal under this
  /// ordering (`"ann lee"` vs `"Ann Lee"`) while being distinct entries.
  pub fn cmp_by_name(&self, other: &Self) -> Ordering {
    let lhs = self.full_name();
    let rhs = other.full_name();
    lhs
      .chars()
      .flat_map(char::to_lowercase)
      .cmp(rhs.chars().flat_map(char::to_lowercase))
  }

  /// Overwrite every non-identity field. Empty values overwrite too.
  pub fn apply(&mut self, update: ContactUpdate) {
    let ContactUpdate { address, city, state, zip, phone_number, email } =
      update;
    self.address = address;
    self.city = city;
    self.state = state;
    self.zip = zip;
    self.phone_number = phone_number;
    self.email = email;
  }
}

impl PartialEq for Contact {
  fn eq(&self, other: &Self) -> bool {
    self.is_named(&other.first_name, &other.last_name)
  }
}

impl Eq for Contact {}

impl Hash for Contact {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.first_name.hash(state);
    self.last_name.hash(state);
  }
}

impl fmt::Display for Contact {
  /// The multi-line record shown by the shell.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "Contact Information:")?;
    for field in ContactField::ALL {
      writeln!(f, "{}: {}", field.label(), self.field(field))?;
    }
    Ok(())
  }
}

// ─── ContactUpdate ───────────────────────────────────────────────────────────

/// Replacement values for the six non-identity fields of a contact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUpdate {
  pub address:      String,
  pub city:         String,
  pub state:        String,
  pub zip:          String,
  pub phone_number: String,
  pub email:        String,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn alice() -> Contact {
    Contact::new(
      "Alice", "Liddell", "1 Rabbit Hole", "Oxford", "Oxon", "OX1", "555-0100",
      "alice@example.com",
    )
  }

  #[test]
  fn equality_ignores_non_identity_fields() {
    let mut other = alice();
    other.city = "London".into();
    other.email.clear();
    assert_eq!(alice(), other);
  }

  #[test]
  fn equality_is_case_sensitive() {
    let mut other = alice();
    other.first_name = "alice".into();
    assert_ne!(alice(), other);
  }

  #[test]
  fn name_ordering_ignores_case() {
    let upper = Contact::new("BOB", "Smith", "", "", "", "", "", "");
    let lower = Contact::new("alice", "zed", "", "", "", "", "", "");
    assert_eq!(lower.cmp_by_name(&upper), Ordering::Less);

    let same = Contact::new("bob", "SMITH", "", "", "", "", "", "");
    assert_eq!(upper.cmp_by_name(&same), Ordering::Equal);
  }

  #[test]
  fn apply_overwrites_with_empty_values() {
    let mut c = alice();
    c.apply(ContactUpdate { city: "London".into(), ..Default::default() });

    assert_eq!(c.first_name, "Alice");
    assert_eq!(c.last_name, "Liddell");
    assert_eq!(c.city, "London");
    assert_eq!(c.address, "");
    assert_eq!(c.email, "");
  }

  #[test]
  fn display_lists_every_field() {
    let rendered = alice().to_string();
    assert!(rendered.starts_with("Contact Information:\n"));
    assert!(rendered.contains("First Name: Alice\n"));
    assert!(rendered.contains("ZIP Code: OX1\n"));
    assert!(rendered.ends_with("Email: alice@example.com\n"));
    assert_eq!(rendered.lines().count(), 9);
  }
}
