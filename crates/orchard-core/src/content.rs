//! Content payloads migrated alongside the identity graph.
//!
//! Each type is the decoded form of one legacy export row, with participant
//! references already resolved (or left `None` where resolution failed and
//! the payload is still worth keeping). Row ids and, where absent in the
//! source, timestamps are assigned by the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A direct message between two members.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMessage {
  pub sender_id:    Option<Uuid>,
  pub recipient_id: Option<Uuid>,
  pub content:      String,
  pub created_at:   Option<DateTime<Utc>>,
  pub updated_at:   Option<DateTime<Utc>>,
}

/// A testimonial written by one member about another.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFriendTestimonial {
  pub author_id:  Option<Uuid>,
  pub subject_id: Option<Uuid>,
  pub content:    String,
  pub created_at: Option<DateTime<Utc>>,
  pub updated_at: Option<DateTime<Utc>>,
}

/// A testimonial about the platform itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAppTestimonial {
  pub author_id:  Option<Uuid>,
  /// Verbatim author name from the export; kept even when unresolved.
  pub username:   Option<String>,
  pub content:    String,
  pub created_at: Option<DateTime<Utc>>,
  pub updated_at: Option<DateTime<Utc>>,
}

/// An external link on a member's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUserLink {
  /// A link row is meaningless without its owner, so this is non-optional;
  /// rows with an unresolvable owner are skipped upstream.
  pub user_id:    Uuid,
  pub label:      String,
  pub url:        String,
  pub created_at: Option<DateTime<Utc>>,
  pub updated_at: Option<DateTime<Utc>>,
}

/// A video embedded on a member's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewVideo {
  pub user_id:    Option<Uuid>,
  pub url:        String,
  pub created_at: Option<DateTime<Utc>>,
  pub updated_at: Option<DateTime<Utc>>,
}

/// A community project listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProject {
  pub name:          String,
  pub description:   Option<String>,
  pub link:          Option<String>,
  pub photo_url:     Option<String>,
  pub display_order: i64,
  pub created_at:    Option<DateTime<Utc>>,
  pub updated_at:    Option<DateTime<Utc>>,
}

/// A moderator-curated introduction between two members. Either side may be
/// unresolvable; the verbatim names are kept so the pairing stays legible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPairing {
  pub match1_id:      Option<Uuid>,
  pub match2_id:      Option<Uuid>,
  pub match1_name:    Option<String>,
  pub match2_name:    Option<String>,
  pub match2_alt_name: Option<String>,
  pub contact_info:   Option<String>,
  pub description:    Option<String>,
  pub here_for:       Vec<String>,
  pub anonymous:      bool,
  pub created_at:     Option<DateTime<Utc>>,
}
