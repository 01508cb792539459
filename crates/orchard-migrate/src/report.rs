//! The diagnostics report — counters accumulated by every phase, printed at
//! the end of the run so an operator can sanity-check migrated volume
//! against expected source row counts.

use std::collections::BTreeMap;

use orchard_core::relation::RelationKind;
use orchard_export::Dataset;

/// Row-level failures beyond this count are tallied but not logged in full.
pub const MAX_LOGGED_ROW_ERRORS: u64 = 5;

// ─── Counters ────────────────────────────────────────────────────────────────

/// Outcome counters for one row-oriented phase or dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowStats {
  pub written: u64,
  pub skipped: u64,
  pub errors:  u64,
}

impl RowStats {
  /// Count a row-level failure, logging the first few in full.
  pub fn record_error(&mut self, context: &str, err: &dyn std::fmt::Display) {
    self.errors += 1;
    if self.errors <= MAX_LOGGED_ROW_ERRORS {
      tracing::warn!("{context}: {err}");
    }
  }
}

/// Outcome counters for one relation kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelationStats {
  /// Edges actually written.
  pub written:    u64,
  /// Edges skipped as duplicates or insert conflicts.
  pub duplicates: u64,
  /// Name references with no entry in the identity map.
  pub unresolved: u64,
}

// ─── Report ──────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct MigrationReport {
  pub stub_users:     RowStats,
  pub profiled_users: RowStats,
  pub content:        BTreeMap<Dataset, RowStats>,
  pub relations:      BTreeMap<RelationKind, RelationStats>,
}

impl MigrationReport {
  pub fn relation_mut(&mut self, kind: RelationKind) -> &mut RelationStats {
    self.relations.entry(kind).or_default()
  }

  pub fn relation(&self, kind: RelationKind) -> RelationStats {
    self.relations.get(&kind).copied().unwrap_or_default()
  }

  pub fn content_mut(&mut self, dataset: Dataset) -> &mut RowStats {
    self.content.entry(dataset).or_default()
  }

  /// Print final tallies to standard output. `table_counts` are the
  /// authoritative per-table row counts re-queried from the store after all
  /// writes.
  pub fn print(&self, table_counts: &[(String, u64)]) {
    println!("{}", "=".repeat(50));
    println!("Migration summary");
    println!("{}", "=".repeat(50));

    println!("Users:");
    println!(
      "  {:<22} written {:>6}  skipped {:>5}  errors {:>5}",
      "name stubs",
      self.stub_users.written,
      self.stub_users.skipped,
      self.stub_users.errors,
    );
    println!(
      "  {:<22} written {:>6}  skipped {:>5}  errors {:>5}",
      "profiles",
      self.profiled_users.written,
      self.profiled_users.skipped,
      self.profiled_users.errors,
    );

    if !self.content.is_empty() {
      println!("Content:");
      for (dataset, stats) in &self.content {
        println!(
          "  {:<22} written {:>6}  skipped {:>5}  errors {:>5}",
          dataset.config_key(),
          stats.written,
          stats.skipped,
          stats.errors,
        );
      }
    }

    println!("Relations:");
    for kind in RelationKind::ALL {
      let stats = self.relation(kind);
      println!(
        "  {:<22} written {:>6}  duplicates {:>5}  unresolved {:>5}",
        kind.label(),
        stats.written,
        stats.duplicates,
        stats.unresolved,
      );
    }

    println!("Store row counts:");
    for (table, count) in table_counts {
      println!("  {table}: {count}");
    }
  }
}
