//! `wordlog` — track vocabulary reviews and decide what to study next.
//!
//! # Usage
//!
//! ```
//! wordlog read apricot --outcome forgot
//! wordlog list --num 20 --forgot
//! wordlog random --num 5
//! wordlog --file ~/words.json status
//! ```

mod table;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;
use wordlog_core::{outcome::Outcome, session::Session};
use wordlog_store_json::JsonStore;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "wordlog", about = "Personal spaced-study tracker")]
struct Args {
  /// Path to a TOML config file (store file location).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Path to the store file (default: ./wordlog.json).
  #[arg(long, env = "WORDLOG_FILE")]
  file: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Most recently seen terms, oldest of the recent first.
  List {
    /// Maximum rows to show.
    #[arg(short, long, default_value_t = 10)]
    num: usize,

    /// Only terms whose last review was a "forgot".
    #[arg(long)]
    forgot: bool,

    /// Only terms reviewed at most N times.
    #[arg(long, value_name = "N")]
    max_count: Option<usize>,
  },

  /// Terms whose first review is most recent.
  New {
    #[arg(short, long, default_value_t = 10)]
    num: usize,
  },

  /// A random sample of terms.
  Random {
    #[arg(short, long, default_value_t = 10)]
    num: usize,

    /// Only terms whose last review was a "forgot".
    #[arg(long)]
    forgot: bool,
  },

  /// Terms first seen today.
  Today,

  /// Full review history for one term.
  Info { term: String },

  /// Total number of tracked terms.
  Status,

  /// Record a review of a term now.
  Read {
    term: String,

    #[arg(long, value_enum, default_value_t = OutcomeArg::Read)]
    outcome: OutcomeArg,
  },

  /// Remove a term and its whole history.
  Delete { term: String },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutcomeArg {
  Forgot,
  Remembered,
  Read,
}

impl From<OutcomeArg> for Outcome {
  fn from(arg: OutcomeArg) -> Self {
    match arg {
      OutcomeArg::Forgot => Self::Forgot,
      OutcomeArg::Remembered => Self::Remembered,
      OutcomeArg::Read => Self::Read,
    }
  }
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  file: String,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();

  // Load config file if provided.
  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flag overrides config file, which overrides the default.
  let store_path = args
    .file
    .or_else(|| (!file_cfg.file.is_empty()).then(|| PathBuf::from(&file_cfg.file)))
    .unwrap_or_else(|| PathBuf::from("./wordlog.json"));

  let mut session = Session::open(JsonStore::new(&store_path))
    .with_context(|| format!("opening store {}", store_path.display()))?;
  tracing::debug!(
    path = %store_path.display(),
    terms = session.total_terms(),
    "store opened"
  );

  // Run the command; write the store back on every path, including failure.
  let run_result = run_command(&mut session, args.command);
  let dirty = session.is_dirty();
  session
    .close()
    .with_context(|| format!("writing store {}", store_path.display()))?;
  if dirty {
    tracing::debug!(path = %store_path.display(), "store written");
  }

  run_result
}

// ─── Command dispatch ─────────────────────────────────────────────────────────

fn run_command(session: &mut Session<JsonStore>, command: Command) -> Result<()> {
  match command {
    Command::List { num, forgot, max_count } => {
      table::print_rows(&session.list(num, forgot, max_count));
    }
    Command::New { num } => {
      table::print_rows(&session.newest(num));
    }
    Command::Random { num, forgot } => {
      table::print_rows(&session.random(num, forgot));
    }
    Command::Today => {
      table::print_rows(&session.today());
    }
    Command::Info { term } => match session.info(&term) {
      Some(events) => table::print_history(&term, events),
      None => println!("{term}: not found"),
    },
    Command::Status => {
      println!("total: {}", session.total_terms());
    }
    Command::Read { term, outcome } => {
      session.read(&term, outcome.into());
      tracing::info!(term = %term, outcome = %Outcome::from(outcome), "review recorded");
    }
    Command::Delete { term } => {
      session
        .delete(&term)
        .with_context(|| format!("deleting {term}"))?;
      tracing::info!(term = %term, "term deleted");
    }
  }
  Ok(())
}
