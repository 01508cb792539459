//! Error type for the migration pipeline.
//!
//! Only top-level failures surface here (unreadable export file, unreachable
//! target store). Row-level failures are absorbed and counted by the phases
//! themselves, and unresolved name references are not errors at all.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error<E>
where
  E: std::error::Error + Send + Sync + 'static,
{
  #[error("reading legacy exports: {0}")]
  Export(#[from] orchard_export::Error),

  #[error("target store: {0}")]
  Store(E),
}

pub type Result<T, E> = std::result::Result<T, Error<E>>;
