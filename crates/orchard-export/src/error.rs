//! Error types for `orchard-export`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A configured export file does not exist. Fatal: the pipeline must not
  /// silently run against a partial source set.
  #[error("export file not found: {0}")]
  MissingExport(PathBuf),

  #[error("csv error in {path}: {source}")]
  Csv {
    path:   PathBuf,
    #[source]
    source: csv::Error,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
