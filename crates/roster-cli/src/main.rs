//! `roster` — console address-book manager.
//!
//! # Usage
//!
//! ```
//! roster                          # interactive menus
//! roster --data-dir ~/contacts    # keep address-book files elsewhere
//! roster show family --json       # print one stored book and exit
//! ```
//!
//! Settings come from `roster.toml` (or `--config`), then `ROSTER_*`
//! environment variables, then flags.

mod settings;
mod shell;

use std::{
  io::{self, Write},
  path::PathBuf,
};

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use roster_core::Registry;
use roster_store_file::FileStore;
use settings::Settings;
use shell::Shell;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "roster", version, about = "Console address-book manager")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, value_name = "FILE", default_value = "roster.toml")]
  config: PathBuf,

  /// Directory holding the address-book files (overrides the config).
  #[arg(long, value_name = "DIR")]
  data_dir: Option<PathBuf>,

  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Print the contacts stored for one address book.
  Show {
    book: String,

    /// Emit a JSON array instead of contact records.
    #[arg(long)]
    json: bool,
  },
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  // Logs go to stderr; stdout belongs to the menus.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .with_writer(io::stderr)
    .init();

  let cli = Cli::parse();
  let settings = resolve_settings(&cli)?;

  let store = FileStore::with_extension(&settings.data_dir, &settings.extension)
    .with_context(|| {
      format!("failed to open data directory {}", settings.data_dir.display())
    })?;
  tracing::debug!(?settings, "settings loaded");

  match cli.command {
    None => {
      let stdin = io::stdin();
      let mut shell = Shell::new(stdin.lock(), io::stdout(), store);
      shell.run()
    }
    Some(Command::Show { book, json }) => {
      show(&store, &book, json, &mut io::stdout().lock())
    }
  }
}

/// Config file and environment, then flags on top.
fn resolve_settings(cli: &Cli) -> Result<Settings> {
  let mut settings = Settings::load(&cli.config)?;
  if let Some(dir) = &cli.data_dir {
    settings.data_dir.clone_from(dir);
  }
  Ok(settings)
}

fn show(
  store: &FileStore,
  book: &str,
  json: bool,
  out: &mut impl Write,
) -> Result<()> {
  let mut registry = Registry::new();
  registry
    .load_book(store, book)
    .with_context(|| format!("failed to load address book {book:?}"))?;
  let contacts = registry.book(book)?;

  if json {
    serde_json::to_writer_pretty(&mut *out, contacts.contacts())
      .context("failed to serialise contacts")?;
    writeln!(out)?;
  } else {
    shell::write_contacts(out, &format!("Address book '{book}'"), contacts)?;
  }
  Ok(())
}
