//! Runtime settings, layered from defaults, an optional TOML file, and
//! `ROSTER_*` environment variables.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use roster_store_file::DEFAULT_EXTENSION;
use serde::Deserialize;

/// Directory used for address-book files when nothing else is configured.
pub const DEFAULT_DATA_DIR: &str = "Contacts";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
  /// Directory holding one file per address book.
  pub data_dir:  PathBuf,
  /// File extension for address-book files, without the dot.
  pub extension: String,
}

impl Settings {
  /// Read `path` (if it exists) over the defaults, then apply the
  /// environment.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    Self::load_with_env(path, config::Environment::with_prefix("ROSTER"))
  }

  fn load_with_env(
    path: &Path,
    env: config::Environment,
  ) -> anyhow::Result<Self> {
    config::Config::builder()
      .set_default("data_dir", DEFAULT_DATA_DIR)?
      .set_default("extension", DEFAULT_EXTENSION)?
      .add_source(config::File::from(path).required(false))
      .add_source(env)
      .build()
      .with_context(|| format!("failed to read config file {}", path.display()))?
      .try_deserialize()
      .context("failed to deserialise Settings")
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use super::*;

  #[test]
  fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load(&dir.path().join("absent.toml")).unwrap();

    assert_eq!(settings.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
    assert_eq!(settings.extension, "txt");
  }

  #[test]
  fn file_values_override_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.toml");
    fs::write(&path, "data_dir = \"/srv/books\"\nextension = \"csv\"\n").unwrap();

    let settings = Settings::load(&path).unwrap();
    assert_eq!(settings.data_dir, PathBuf::from("/srv/books"));
    assert_eq!(settings.extension, "csv");
  }

  #[test]
  fn partial_file_keeps_remaining_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.toml");
    fs::write(&path, "extension = \"dat\"\n").unwrap();

    let settings = Settings::load(&path).unwrap();
    assert_eq!(settings.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
    assert_eq!(settings.extension, "dat");
  }

  #[test]
  fn environment_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.toml");
    fs::write(&path, "data_dir = \"/srv/books\"\nextension = \"csv\"\n").unwrap();

    let vars = [("ROSTER_EXTENSION", "dat")]
      .into_iter()
      .map(|(k, v)| (k.to_owned(), v.to_owned()))
      .collect();
    let env = config::Environment::with_prefix("ROSTER").source(Some(vars));

    let settings = Settings::load_with_env(&path, env).unwrap();
    assert_eq!(settings.data_dir, PathBuf::from("/srv/books"));
    assert_eq!(settings.extension, "dat");
  }

  #[test]
  fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.toml");
    fs::write(&path, "data_dir = [unterminated\n").unwrap();

    assert!(Settings::load(&path).is_err());
  }
}
