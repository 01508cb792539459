//! Encoding and decoding helpers between Rust domain types and the
//! plain-text representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings. String lists are stored as
//! compact JSON arrays. UUIDs are stored as hyphenated lowercase strings.

use chrono::{DateTime, Utc};
use orchard_core::{
  identity::Identity,
  relation::{RelationEdge, RelationKind},
};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc>
// ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn encode_dt_opt(dt: Option<DateTime<Utc>>) -> Option<String> {
  dt.map(encode_dt)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── String lists ────────────────────────────────────────────────────────────

pub fn encode_list(items: &[String]) -> Result<String> {
  Ok(serde_json::to_string(items)?)
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from one relation-table row. The kind is not a
/// column — it is implicit in which table the row came from.
pub struct RawEdge {
  pub id:         String,
  pub subject_id: String,
  pub object_id:  String,
  pub created_at: String,
}

impl RawEdge {
  pub fn into_edge(self, kind: RelationKind) -> Result<RelationEdge> {
    Ok(RelationEdge {
      id:         decode_uuid(&self.id)?,
      kind,
      subject_id: decode_uuid(&self.subject_id)?,
      object_id:  decode_uuid(&self.object_id)?,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}

/// Raw strings read directly from a `users` row.
pub struct RawIdentity {
  pub id:         String,
  pub username:   Option<String>,
  pub email:      Option<String>,
  pub created_at: String,
}

impl RawIdentity {
  pub fn into_identity(self) -> Result<Identity> {
    Ok(Identity {
      id:         decode_uuid(&self.id)?,
      username:   self.username,
      email:      self.email,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}
