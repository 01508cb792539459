//! Relationship extraction.
//!
//! Decodes the six embedded relation lists on each profiled row into
//! candidate edges. The row owner is the name-based identity of the row's
//! display name; every referenced name resolves through the same map.
//! Unresolvable references are counted and dropped — legacy exports mention
//! stale and deleted identities routinely — and self-references are dropped
//! silently.

use orchard_core::{namemap::NameMap, relation::CandidateEdge};
use orchard_export::{RawRecord, RELATION_FIELDS, values::split_list};

use crate::report::MigrationReport;

/// Decode all candidate edges from the profiled-user rows.
///
/// Pure with respect to the store; the writer persists the result.
pub fn extract_candidates(
  rows: &[RawRecord],
  map: &NameMap,
  report: &mut MigrationReport,
) -> Vec<CandidateEdge> {
  let mut candidates = Vec::new();

  for row in rows {
    // Rows with no resolvable display name own no edges. The sentinel
    // placeholder never resolves, so it is covered here too.
    let Some(owner) = row.get_trimmed("Name").and_then(|n| map.resolve(n))
    else {
      continue;
    };

    for field in RELATION_FIELDS {
      let Some(cell) = row.get(field.column) else {
        continue;
      };
      for name in split_list(cell, field.delimiter) {
        match map.resolve(&name) {
          None => report.relation_mut(field.kind).unresolved += 1,
          Some(id) if id == owner => {} // no self-edges
          Some(id) => candidates.push(CandidateEdge {
            kind:       field.kind,
            subject_id: owner,
            object_id:  id,
          }),
        }
      }
    }
  }

  candidates
}

#[cfg(test)]
mod tests {
  use orchard_core::relation::RelationKind;
  use uuid::Uuid;

  use super::*;

  fn candidates_by_kind(
    candidates: &[CandidateEdge],
    kind: RelationKind,
  ) -> usize {
    candidates.iter().filter(|c| c.kind == kind).count()
  }

  fn synthetic_map(names: &[&str]) -> NameMap {
    let mut map = NameMap::new();
    for name in names {
      map.insert(*name, Uuid::new_v4()).unwrap();
    }
    map
  }

  #[test]
  fn directed_lists_emit_one_edge_per_mention() {
    let map = synthetic_map(&["alice", "bob", "carol"]);
    let rows = vec![
      RawRecord::from_pairs([("Name", "alice"), ("Watermelons", "bob , carol")]),
      RawRecord::from_pairs([("Name", "bob"), ("Watermelons", "alice")]),
    ];

    let mut report = MigrationReport::default();
    let candidates = extract_candidates(&rows, &map, &mut report);

    assert_eq!(candidates_by_kind(&candidates, RelationKind::Vouch), 3);
    let alice = map.resolve("alice").unwrap();
    let bob = map.resolve("bob").unwrap();
    assert!(candidates.iter().any(|c| {
      c.kind == RelationKind::Vouch
        && c.subject_id == alice
        && c.object_id == bob
    }));
    assert!(candidates.iter().any(|c| {
      c.kind == RelationKind::Vouch
        && c.subject_id == bob
        && c.object_id == alice
    }));
    assert_eq!(report.relation(RelationKind::Vouch).unresolved, 0);
  }

  #[test]
  fn unresolved_mentions_are_counted_and_dropped() {
    let map = synthetic_map(&["alice"]);
    let rows =
      vec![RawRecord::from_pairs([("Name", "alice"), ("Bananas", "ghost_user")])];

    let mut report = MigrationReport::default();
    let candidates = extract_candidates(&rows, &map, &mut report);

    assert!(candidates.is_empty());
    assert_eq!(report.relation(RelationKind::Interest).unresolved, 1);
  }

  #[test]
  fn self_references_are_dropped_silently() {
    let map = synthetic_map(&["alice", "bob"]);
    let rows = vec![RawRecord::from_pairs([
      ("Name", "alice"),
      ("Kiwis", "alice , bob"),
    ])];

    let mut report = MigrationReport::default();
    let candidates = extract_candidates(&rows, &map, &mut report);

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].object_id, map.resolve("bob").unwrap());
    // A self-reference is not an unresolved reference.
    assert_eq!(report.relation(RelationKind::Friendship).unresolved, 0);
  }

  #[test]
  fn rows_without_a_resolvable_owner_contribute_nothing() {
    let map = synthetic_map(&["bob"]);
    let rows = vec![
      RawRecord::from_pairs([("Kiwis", "bob")]),
      RawRecord::from_pairs([("Name", "stranger"), ("Kiwis", "bob")]),
    ];

    let mut report = MigrationReport::default();
    let candidates = extract_candidates(&rows, &map, &mut report);

    assert!(candidates.is_empty());
    assert_eq!(report.relation(RelationKind::Friendship).unresolved, 0);
  }

  #[test]
  fn bare_comma_inside_a_spaced_list_is_one_compound_mention() {
    // Under the spaced delimiter, "bob,carol" is one compound name that
    // resolves nowhere.
    let map = synthetic_map(&["alice", "bob", "carol"]);
    let rows =
      vec![RawRecord::from_pairs([("Name", "alice"), ("Melons", "bob,carol")])];

    let mut report = MigrationReport::default();
    let candidates = extract_candidates(&rows, &map, &mut report);

    assert!(candidates.is_empty());
    assert_eq!(report.relation(RelationKind::MetUp).unresolved, 1);
  }
}
