//! The `DirectoryStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `orchard-store-sqlite`).
//! The pipeline phases depend on this abstraction, not on any concrete
//! backend, so each phase can be exercised against an in-memory store.

use std::future::Future;

use uuid::Uuid;

use crate::{
  content::{
    NewAppTestimonial, NewFriendTestimonial, NewMessage, NewPairing,
    NewProject, NewUserLink, NewVideo,
  },
  identity::{Identity, NewProfile},
  relation::{CandidateEdge, RelationEdge, RelationKind},
};

/// Abstraction over the migration target store.
///
/// Writes are row-at-a-time and independent; the pipeline never opens a
/// multi-row transaction. Uniqueness of relation edges is enforced by the
/// store itself (`UNIQUE` plus insert-or-ignore), not by callers — an
/// in-memory "already seen" set would only hold within a single run.
///
/// All methods return `Send` futures so the trait can be used from a
/// multi-threaded async runtime.
pub trait DirectoryStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Identities ────────────────────────────────────────────────────────

  /// Persist a bare name-only stub identity under a caller-minted id.
  /// `created_at` is set by the store.
  fn insert_stub(
    &self,
    id: Uuid,
    username: String,
  ) -> impl Future<Output = Result<Identity, Self::Error>> + Send + '_;

  /// Persist a fully profiled, email-keyed identity.
  fn insert_profile(
    &self,
    profile: NewProfile,
  ) -> impl Future<Output = Result<Identity, Self::Error>> + Send + '_;

  /// All identities currently in the store, stubs and profiled alike.
  fn list_identities(
    &self,
  ) -> impl Future<Output = Result<Vec<Identity>, Self::Error>> + Send + '_;

  // ── Relation graph ────────────────────────────────────────────────────

  /// Delete every row from every relation table. Run before each graph
  /// write phase so re-runs rebuild from a clean slate.
  fn clear_relations(
    &self,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Insert one edge with insert-or-ignore semantics. Returns `true` if a
  /// row was written, `false` if the `(subject_id, object_id)` pair already
  /// existed in the kind's table. Callers are expected to have canonicalised
  /// symmetric pairs first. `id` and `created_at` are store-assigned.
  fn insert_edge(
    &self,
    edge: CandidateEdge,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// All edges of one kind, in insertion order.
  fn list_edges(
    &self,
    kind: RelationKind,
  ) -> impl Future<Output = Result<Vec<RelationEdge>, Self::Error>> + Send + '_;

  /// Number of edges stored for one kind.
  fn relation_count(
    &self,
    kind: RelationKind,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  // ── Content rows ──────────────────────────────────────────────────────

  fn insert_message(
    &self,
    message: NewMessage,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  fn insert_friend_testimonial(
    &self,
    testimonial: NewFriendTestimonial,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  fn insert_app_testimonial(
    &self,
    testimonial: NewAppTestimonial,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  fn insert_user_link(
    &self,
    link: NewUserLink,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  fn insert_video(
    &self,
    video: NewVideo,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  fn insert_project(
    &self,
    project: NewProject,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  fn insert_pairing(
    &self,
    pairing: NewPairing,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Diagnostics ───────────────────────────────────────────────────────

  /// `(table, row count)` for every table the store owns, in a stable
  /// order. Used by the diagnostics reporter so operators can check
  /// migrated volume against expected source row counts.
  fn table_counts(
    &self,
  ) -> impl Future<Output = Result<Vec<(String, u64)>, Self::Error>> + Send + '_;
}
