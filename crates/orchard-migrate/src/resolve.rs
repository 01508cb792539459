//! Identity resolution — the collection pass.
//!
//! Scans every source dataset once and builds the complete name→identifier
//! map before any write happens. A name first seen in one dataset may be
//! needed to resolve a mention declared in an earlier one, so the map is a
//! precondition for every consumer, never built incrementally alongside
//! them.

use std::collections::BTreeSet;

use orchard_core::namemap::NameMap;
use orchard_export::{ADMIN_PLACEHOLDER, Dataset, ExportCatalog};

/// Collect the union of all distinct (trimmed) name mentions across every
/// dataset, excluding the sentinels: the empty string and the reserved
/// administrator placeholder.
pub fn collect_names(
  catalog: &ExportCatalog,
) -> Result<BTreeSet<String>, orchard_export::Error> {
  let mut names = BTreeSet::new();

  for dataset in Dataset::ALL {
    let columns = dataset.mention_columns();
    if columns.is_empty() {
      continue;
    }
    for row in catalog.read(dataset)? {
      for column in columns {
        if let Some(name) = row.get_trimmed(column)
          && name != ADMIN_PLACEHOLDER
        {
          names.insert(name.to_string());
        }
      }
    }
  }

  Ok(names)
}

/// Build the run-wide map: one freshly minted identifier per distinct name.
pub fn build_name_map(
  catalog: &ExportCatalog,
) -> Result<NameMap, orchard_export::Error> {
  let names = collect_names(catalog)?;
  tracing::info!(
    "resolved {} distinct names across all source datasets",
    names.len(),
  );
  Ok(NameMap::from_names(names))
}
