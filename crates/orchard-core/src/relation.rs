//! Relation kinds and edges — the person-to-person graph being reconstructed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── RelationKind ────────────────────────────────────────────────────────────

/// One of the six fixed categories of connection between two identities.
///
/// Symmetric kinds are stored once per real-world relationship under a
/// canonical identifier ordering; directed kinds keep both directions as
/// independent edges.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
  Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
  /// Subject expressed romantic/social interest in object.
  Interest,
  /// Mutual acknowledged friendship.
  Friendship,
  /// The two identities have met in person.
  MetUp,
  /// Subject has hidden object from their own view.
  Hidden,
  /// Subject rejected object.
  Rejection,
  /// Subject vouches for object's trustworthiness.
  Vouch,
}

impl RelationKind {
  pub const ALL: [RelationKind; 6] = [
    Self::Interest,
    Self::Friendship,
    Self::MetUp,
    Self::Hidden,
    Self::Rejection,
    Self::Vouch,
  ];

  /// Whether edges of this kind are symmetric (stored under canonical
  /// ordering) rather than directed.
  pub fn is_symmetric(self) -> bool {
    matches!(self, Self::Friendship | Self::MetUp)
  }

  /// The target relation table for this kind.
  pub fn table(self) -> &'static str {
    match self {
      Self::Interest => "interests",
      Self::Friendship => "friendships",
      Self::MetUp => "met_ups",
      Self::Hidden => "hidden_users",
      Self::Rejection => "rejections",
      Self::Vouch => "vouches",
    }
  }

  /// Human-readable label used in operator-facing output.
  pub fn label(self) -> &'static str {
    match self {
      Self::Interest => "interests",
      Self::Friendship => "friendships",
      Self::MetUp => "met-ups",
      Self::Hidden => "hidden",
      Self::Rejection => "rejections",
      Self::Vouch => "vouches",
    }
  }
}

// ─── Edges ───────────────────────────────────────────────────────────────────

/// A decoded (kind, subject, object) triple, not yet persisted.
/// Produced by the relationship extractor, consumed by the graph writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateEdge {
  pub kind:       RelationKind,
  pub subject_id: Uuid,
  pub object_id:  Uuid,
}

impl CandidateEdge {
  /// Reorder a symmetric pair into canonical `(min, max)` form so the same
  /// real-world relationship collapses to one stored edge no matter which
  /// side's row declared it. Directed kinds pass through unchanged.
  pub fn canonical(self) -> Self {
    if self.kind.is_symmetric() && self.object_id < self.subject_id {
      Self {
        kind:       self.kind,
        subject_id: self.object_id,
        object_id:  self.subject_id,
      }
    } else {
      self
    }
  }
}

/// A persisted relation edge. `id` and `created_at` are store-assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationEdge {
  pub id:         Uuid,
  pub kind:       RelationKind,
  pub subject_id: Uuid,
  pub object_id:  Uuid,
  pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn symmetric_pair_is_reordered() {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };

    let edge = CandidateEdge {
      kind:       RelationKind::Friendship,
      subject_id: hi,
      object_id:  lo,
    };
    let canon = edge.canonical();
    assert_eq!(canon.subject_id, lo);
    assert_eq!(canon.object_id, hi);
  }

  #[test]
  fn symmetric_pair_already_canonical_is_unchanged() {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };

    let edge = CandidateEdge {
      kind:       RelationKind::MetUp,
      subject_id: lo,
      object_id:  hi,
    };
    assert_eq!(edge.canonical(), edge);
  }

  #[test]
  fn directed_pair_keeps_its_direction() {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };

    let edge = CandidateEdge {
      kind:       RelationKind::Vouch,
      subject_id: hi,
      object_id:  lo,
    };
    assert_eq!(edge.canonical(), edge);
  }

  #[test]
  fn mirrored_symmetric_candidates_collapse_to_one_canonical_form() {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();

    let declared_by_a = CandidateEdge {
      kind:       RelationKind::Friendship,
      subject_id: a,
      object_id:  b,
    };
    let declared_by_b = CandidateEdge {
      kind:       RelationKind::Friendship,
      subject_id: b,
      object_id:  a,
    };
    assert_eq!(declared_by_a.canonical(), declared_by_b.canonical());
  }
}
