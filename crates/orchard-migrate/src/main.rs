//! `orchard-migrate` — one-shot migration of legacy platform exports into
//! the Orchard member directory.
//!
//! # Usage
//!
//! ```
//! orchard-migrate --config migrate.toml
//! orchard-migrate --exports-dir ./exports --db ./orchard.db
//! ```
//!
//! Exits non-zero only on a top-level fatal error (a source file cannot be
//! read, the target store cannot be opened). Row-level failures are logged,
//! counted, and reported in the final summary.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use orchard_core::store::DirectoryStore as _;
use orchard_migrate::Settings;
use orchard_store_sqlite::SqliteStore;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
  name = "orchard-migrate",
  about = "Migrate legacy platform CSV exports into the Orchard directory"
)]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "migrate.toml")]
  config: PathBuf,

  /// Directory containing the legacy CSV exports (overrides config).
  #[arg(long)]
  exports_dir: Option<PathBuf>,

  /// Path of the SQLite database to write (overrides config).
  #[arg(long)]
  db: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration; CLI flags override the file and environment.
  let mut settings =
    Settings::load(&cli.config).context("failed to read config file")?;
  if let Some(dir) = cli.exports_dir {
    settings.exports_dir = dir;
  }
  if let Some(db) = cli.db {
    settings.db_path = db;
  }

  let catalog = settings.catalog();
  tracing::info!(
    "migrating exports from {:?} into {:?}",
    catalog.dir(),
    settings.db_path,
  );

  let store = SqliteStore::open(&settings.db_path)
    .await
    .with_context(|| format!("failed to open store at {:?}", settings.db_path))?;

  let report = orchard_migrate::run(&catalog, &store)
    .await
    .context("migration failed")?;

  let counts = store
    .table_counts()
    .await
    .context("counting migrated rows")?;
  report.print(&counts);

  Ok(())
}
