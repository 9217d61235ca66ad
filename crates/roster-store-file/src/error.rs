//! Error type for `roster-store-file`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("i/o error on {path}: {source}")]
  Io {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// The name would escape the store directory or map to no file at all.
  #[error("invalid address book name: {0:?}")]
  InvalidBookName(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
