//! [`FileStore`] — the flat-file implementation of [`BookStore`].

use std::{
  fs,
  io::{self, Write as _},
  path::{Path, PathBuf},
};

use roster_core::store::BookStore;
use tracing::{debug, info, warn};

use crate::{Error, Result};

/// Extension used when none is configured.
pub const DEFAULT_EXTENSION: &str = "txt";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Roster book store backed by one file per address book.
///
/// Book `name` maps to `<root>/<name>.<extension>`.
#[derive(Debug, Clone)]
pub struct FileStore {
  root:      PathBuf,
  extension: String,
}

impl FileStore {
  /// Open a store rooted at `root`, creating the directory if needed.
  pub fn open(root: impl AsRef<Path>) -> Result<Self> {
    Self::with_extension(root, DEFAULT_EXTENSION)
  }

  /// Like [`FileStore::open`], with a custom file extension (no leading dot).
  pub fn with_extension(
    root: impl AsRef<Path>,
    extension: impl Into<String>,
  ) -> Result<Self> {
    let root = root.as_ref().to_path_buf();
    fs::create_dir_all(&root).map_err(|source| Error::Io {
      path: root.clone(),
      source,
    })?;
    debug!(root = %root.display(), "opened file store");
    Ok(Self { root, extension: extension.into() })
  }

  pub fn root(&self) -> &Path { &self.root }

  /// The file that holds `book`.
  pub fn path_for(&self, book: &str) -> Result<PathBuf> {
    validate_book_name(book)?;
    let file_name = if self.extension.is_empty() {
      book.to_owned()
    } else {
      format!("{book}.{}", self.extension)
    };
    Ok(self.root.join(file_name))
  }
}

/// Reject names that are empty, contain a path separator or NUL, or are
/// `.`/`..`.
fn validate_book_name(book: &str) -> Result<()> {
  let bad = book.is_empty()
    || book == "."
    || book == ".."
    || book.contains(['/', '\\', '\0']);
  if bad {
    return Err(Error::InvalidBookName(book.to_owned()));
  }
  Ok(())
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> Error + '_ {
  move |source| Error::Io { path: path.to_path_buf(), source }
}

fn write_rows(path: &Path, rows: &[String]) -> Result<()> {
  let mut file =
    io::BufWriter::new(fs::File::create(path).map_err(io_error(path))?);
  for row in rows {
    writeln!(file, "{row}").map_err(io_error(path))?;
  }
  file.flush().map_err(io_error(path))
}

// ─── BookStore impl ──────────────────────────────────────────────────────────

impl BookStore for FileStore {
  type Error = Error;

  /// Writes to a `.tmp` sibling first and renames it over the target, so a
  /// failed write never truncates the previous copy. The temporary file is
  /// removed again if any step fails.
  fn save(&self, book: &str, rows: &[String]) -> Result<()> {
    let path = self.path_for(book)?;
    let mut tmp_name = path.clone().into_os_string();
    tmp_name.push(".tmp");
    let tmp = PathBuf::from(tmp_name);

    let written = write_rows(&tmp, rows)
      .and_then(|()| fs::rename(&tmp, &path).map_err(io_error(&path)));
    if let Err(e) = written {
      warn!(book, error = %e, "saving address book failed");
      let _ = fs::remove_file(&tmp);
      return Err(e);
    }

    info!(book, rows = rows.len(), path = %path.display(), "wrote address book file");
    Ok(())
  }

  fn load(&self, book: &str) -> Result<Vec<String>> {
    let path = self.path_for(book)?;
    let text = match fs::read_to_string(&path) {
      Ok(text) => text,
      Err(e) if e.kind() == io::ErrorKind::NotFound => {
        debug!(book, path = %path.display(), "no file for address book");
        return Ok(Vec::new());
      }
      Err(e) => return Err(io_error(&path)(e)),
    };

    let rows: Vec<String> = text
      .lines()
      .filter(|line| !line.is_empty())
      .map(str::to_owned)
      .collect();
    debug!(book, rows = rows.len(), path = %path.display(), "read address book file");
    Ok(rows)
  }
}
