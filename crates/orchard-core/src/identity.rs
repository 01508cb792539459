//! Identity — the canonical reference to one person in the target system.
//!
//! The legacy exports produce two disjoint identity spaces: name-based stubs
//! minted during resolution, and email-keyed profiled rows. The pipeline never
//! unifies them, even when both denote the same real person; reconciliation is
//! a separately schedulable pass.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stable, canonical reference to one person.
///
/// Exactly one of `username` / `email` is populated: stubs carry the name
/// string they were minted for, profiled identities carry the contact email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
  pub id:         Uuid,
  pub username:   Option<String>,
  pub email:      Option<String>,
  pub created_at: DateTime<Utc>,
}

/// Full profile payload for an email-keyed identity, decoded from one row of
/// the profiled-user export. Input to
/// [`crate::store::DirectoryStore::insert_profile`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewProfile {
  /// Identifier minted by the populator — independent of any name-based id.
  pub id:                Uuid,
  pub email:             String,
  /// Display name as it appears in the export. Not a key.
  pub name:              Option<String>,
  pub age:               Option<i64>,
  pub pronouns:          Option<String>,
  pub location:          Option<String>,
  pub short_description: Option<String>,
  pub long_description:  Option<String>,
  pub main_photo:        Option<String>,
  pub photos:            Vec<String>,
  pub consent:           bool,
  pub collaborators:     Vec<String>,
  pub communities:       Vec<String>,
  /// Opaque row id carried over from the legacy platform.
  pub legacy_id:         Option<String>,
  pub created_at:        Option<DateTime<Utc>>,
  pub updated_at:        Option<DateTime<Utc>>,
}
