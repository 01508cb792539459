//! The Orchard migration pipeline.
//!
//! Ingests the retired platform's CSV exports and reconstructs the identity
//! and relationship graph in the new directory's store. Phases run strictly
//! in sequence, each to completion before the next:
//!
//! 1. [`resolve`] — scan every dataset, build the complete name→id map
//! 2. [`populate`] — write name-stub identities, then profiled identities
//! 3. [`content`] — carry over messages, testimonials, links, videos,
//!    projects, and pairings
//! 4. [`extract`] — decode the six embedded relation lists into candidates
//! 5. [`graph`] — clear-then-rebuild the per-kind relation tables
//! 6. [`report`] — final tallies for operator verification
//!
//! Re-running the whole pipeline is only partially safe: the graph phase is
//! idempotent (tables are cleared first), but identity creation is not — a
//! second run mints fresh identifiers and duplicate entities.

pub mod content;
pub mod error;
pub mod extract;
pub mod graph;
pub mod populate;
pub mod report;
pub mod resolve;
pub mod settings;

use orchard_core::store::DirectoryStore;
use orchard_export::{Dataset, ExportCatalog};

pub use error::Error;
pub use report::MigrationReport;
pub use settings::Settings;

/// Run the whole pipeline against `store` and return the accumulated
/// report. Fatal failures (unreadable export, unreachable store) propagate;
/// row-level failures are absorbed into the report's counters.
pub async fn run<S: DirectoryStore>(
  catalog: &ExportCatalog,
  store: &S,
) -> Result<MigrationReport, Error<S::Error>> {
  let map = resolve::build_name_map(catalog)?;
  let mut report = MigrationReport::default();

  populate::insert_stubs(store, &map, &mut report).await;
  let user_rows = catalog.read(Dataset::Users)?;
  populate::insert_profiles(store, &user_rows, &mut report).await;

  content::migrate_all(store, catalog, &map, &mut report).await?;

  let candidates = extract::extract_candidates(&user_rows, &map, &mut report);
  graph::write_edges(store, &candidates, &mut report).await?;

  Ok(report)
}
