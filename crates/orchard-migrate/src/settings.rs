//! Run configuration.
//!
//! Layered the usual way: defaults, then an optional TOML file, then
//! `ORCHARD_`-prefixed environment variables, then command-line flags (the
//! flags are applied by the binary after loading).

use std::path::{Path, PathBuf};

use orchard_export::{Dataset, ExportCatalog};
use serde::Deserialize;

/// Top-level configuration for one migration run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
  /// Directory containing the legacy CSV exports.
  pub exports_dir: PathBuf,
  /// Path of the SQLite database to write.
  pub db_path:     PathBuf,
  /// Optional per-dataset file-name overrides (exports are often delivered
  /// with timestamped names).
  pub files:       FileNames,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      exports_dir: PathBuf::from("exports"),
      db_path:     PathBuf::from("orchard.db"),
      files:       FileNames::default(),
    }
  }
}

/// Per-dataset file-name overrides; unset fields fall back to the catalog
/// defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileNames {
  pub users:               Option<String>,
  pub messages:            Option<String>,
  pub likes:               Option<String>,
  pub friend_testimonials: Option<String>,
  pub app_testimonials:    Option<String>,
  pub met_ups:             Option<String>,
  pub projects:            Option<String>,
  pub user_links:          Option<String>,
  pub videos:              Option<String>,
  pub pairings:            Option<String>,
}

impl FileNames {
  fn get(&self, dataset: Dataset) -> Option<&str> {
    let name = match dataset {
      Dataset::Users => &self.users,
      Dataset::Messages => &self.messages,
      Dataset::Likes => &self.likes,
      Dataset::FriendTestimonials => &self.friend_testimonials,
      Dataset::AppTestimonials => &self.app_testimonials,
      Dataset::MetUps => &self.met_ups,
      Dataset::Projects => &self.projects,
      Dataset::UserLinks => &self.user_links,
      Dataset::Videos => &self.videos,
      Dataset::Pairings => &self.pairings,
    };
    name.as_deref()
  }
}

impl Settings {
  /// Load settings from `path` (if it exists) and the environment.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .add_source(config::File::from(path.to_path_buf()).required(false))
      .add_source(config::Environment::with_prefix("ORCHARD"))
      .build()?
      .try_deserialize()
  }

  /// Build the export catalog this configuration describes.
  pub fn catalog(&self) -> ExportCatalog {
    let mut catalog = ExportCatalog::new(&self.exports_dir);
    for dataset in Dataset::ALL {
      if let Some(name) = self.files.get(dataset) {
        catalog = catalog.with_file(dataset, name);
      }
    }
    catalog
  }
}
