//! Error types for `orchard-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("name already mapped: {0:?}")]
  DuplicateName(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
