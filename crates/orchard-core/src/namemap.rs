//! The run-wide name→identifier map.
//!
//! Built once, in full, before any downstream write ("build the complete
//! symbol table before linking"). Passed by reference into each phase rather
//! than living in global state, so every phase stays unit-testable against a
//! synthetic map.

use std::collections::BTreeMap;

use uuid::Uuid;

use crate::{Error, Result};

/// Exact-match map from legacy name string to minted stable identifier.
///
/// Matching performs no normalisation beyond whitespace trimming — two
/// spellings that differ in case are two identities, faithfully mirroring the
/// legacy data.
#[derive(Debug, Clone, Default)]
pub struct NameMap {
  entries: BTreeMap<String, Uuid>,
}

impl NameMap {
  pub fn new() -> Self {
    Self::default()
  }

  /// Mint one fresh identifier per distinct name.
  pub fn from_names<I, S>(names: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let entries = names
      .into_iter()
      .map(|n| (n.into(), Uuid::new_v4()))
      .collect();
    Self { entries }
  }

  /// Register a name under a caller-supplied identifier.
  /// Errors if the name is already mapped — the collection pass is expected
  /// to have deduplicated.
  pub fn insert(&mut self, name: impl Into<String>, id: Uuid) -> Result<()> {
    let name = name.into();
    if self.entries.contains_key(&name) {
      return Err(Error::DuplicateName(name));
    }
    self.entries.insert(name, id);
    Ok(())
  }

  /// Look up a name mention. The input is trimmed; the stored key is matched
  /// exactly.
  pub fn resolve(&self, name: &str) -> Option<Uuid> {
    self.entries.get(name.trim()).copied()
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Iterate entries in deterministic (lexicographic) order.
  pub fn iter(&self) -> impl Iterator<Item = (&str, Uuid)> {
    self.entries.iter().map(|(n, id)| (n.as_str(), *id))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn one_identifier_per_distinct_name() {
    let map = NameMap::from_names(["alice", "bob", "carol"]);
    assert_eq!(map.len(), 3);

    let alice = map.resolve("alice").unwrap();
    let bob = map.resolve("bob").unwrap();
    assert_ne!(alice, bob);
  }

  #[test]
  fn repeated_lookups_return_the_same_identifier() {
    let map = NameMap::from_names(["alice"]);
    assert_eq!(map.resolve("alice"), map.resolve("alice"));
  }

  #[test]
  fn lookup_trims_the_mention_but_matches_exactly() {
    let map = NameMap::from_names(["alice"]);
    assert!(map.resolve("  alice ").is_some());
    assert!(map.resolve("Alice").is_none());
    assert!(map.resolve("ghost_user").is_none());
  }

  #[test]
  fn duplicate_insert_is_rejected() {
    let mut map = NameMap::new();
    map.insert("alice", Uuid::new_v4()).unwrap();
    assert!(matches!(
      map.insert("alice", Uuid::new_v4()),
      Err(Error::DuplicateName(_))
    ));
  }
}
