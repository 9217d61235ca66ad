//! Error types for `roster-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("duplicate entry: {first} {last} already exists in the address book")]
  Duplicate { first: String, last: String },

  #[error("contact not found: {first} {last}")]
  ContactNotFound { first: String, last: String },

  #[error("an address book named {0:?} already exists")]
  BookExists(String),

  #[error("address book not found: {0:?}")]
  BookNotFound(String),

  #[error("malformed contact row: {0}")]
  MalformedRow(String),

  #[error("persistence error: {0}")]
  Persistence(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
