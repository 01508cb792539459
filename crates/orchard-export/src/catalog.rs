//! The legacy export catalog: which files exist, which columns carry name
//! mentions, and how the six embedded relation lists are laid out.
//!
//! Column headers here are verbatim from the retired platform's exporter,
//! quirks included. They are configuration data, not names we chose.

use std::{
  collections::HashMap,
  path::{Path, PathBuf},
};

use orchard_core::relation::RelationKind;

use crate::{RawRecord, Result, reader::read_records};

/// Reserved placeholder the legacy platform substituted for system-authored
/// rows. Never resolves to an identity.
pub const ADMIN_PLACEHOLDER: &str = "(App admin)";

// ─── Datasets ────────────────────────────────────────────────────────────────

/// One legacy export file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dataset {
  Users,
  Messages,
  Likes,
  FriendTestimonials,
  AppTestimonials,
  MetUps,
  Projects,
  UserLinks,
  Videos,
  Pairings,
}

impl Dataset {
  pub const ALL: [Dataset; 10] = [
    Self::Users,
    Self::Messages,
    Self::Likes,
    Self::FriendTestimonials,
    Self::AppTestimonials,
    Self::MetUps,
    Self::Projects,
    Self::UserLinks,
    Self::Videos,
    Self::Pairings,
  ];

  /// Default file name inside the export directory.
  pub fn default_file_name(self) -> &'static str {
    match self {
      Self::Users => "All-Users.csv",
      Self::Messages => "All-Messages.csv",
      Self::Likes => "All-Likes.csv",
      Self::FriendTestimonials => "All-FriendTestimonials.csv",
      Self::AppTestimonials => "All-AppTestimonials.csv",
      Self::MetUps => "All-Met-Ups.csv",
      Self::Projects => "All-Projects.csv",
      Self::UserLinks => "All-UserLinks.csv",
      Self::Videos => "All-Videos.csv",
      Self::Pairings => "All-Pairings.csv",
    }
  }

  /// Key used for per-dataset file overrides in configuration.
  pub fn config_key(self) -> &'static str {
    match self {
      Self::Users => "users",
      Self::Messages => "messages",
      Self::Likes => "likes",
      Self::FriendTestimonials => "friend_testimonials",
      Self::AppTestimonials => "app_testimonials",
      Self::MetUps => "met_ups",
      Self::Projects => "projects",
      Self::UserLinks => "user_links",
      Self::Videos => "videos",
      Self::Pairings => "pairings",
    }
  }

  /// Columns in this dataset that mention people by free-text name.
  ///
  /// The identity-resolution pass collects the union of these across every
  /// dataset. Projects and app testimonials contribute none: projects have
  /// no member column at all, and app-testimonial authors are resolved
  /// opportunistically at content time without ever minting identities.
  pub fn mention_columns(self) -> &'static [&'static str] {
    match self {
      Self::Users => &["Name"],
      Self::Messages => &["Creator", "Recipient"],
      Self::Likes => &["Sender", "Receiver"],
      Self::FriendTestimonials => &["Creator", "Subject"],
      // The second participant column is literally named "User 2".
      Self::MetUps => &["Creator", "User 2"],
      Self::AppTestimonials => &[],
      Self::Projects => &[],
      Self::UserLinks => &["User"],
      Self::Videos => &["Creator"],
      // "Match 1 " carries a trailing space in the export header row.
      Self::Pairings => &["Match 1 ", "Match 2"],
    }
  }
}

// ─── Relation fields ─────────────────────────────────────────────────────────

/// One multi-valued relation column on the profiled-user export.
#[derive(Debug, Clone, Copy)]
pub struct RelationField {
  /// Verbatim column header.
  pub column:    &'static str,
  /// Element delimiter for this field. Not uniform across the export: the
  /// relation lists use a spaced comma while other list columns use a bare
  /// one, so this is configured per field.
  pub delimiter: &'static str,
  pub kind:      RelationKind,
}

/// Spaced-comma delimiter used by the relation lists and `Photos`.
pub const LIST_DELIM_SPACED: &str = " , ";
/// Bare-comma delimiter used by `Collabs` and `Communities`.
pub const LIST_DELIM_BARE: &str = ",";

/// The six embedded relation lists, one per [`RelationKind`]. The produce
/// theme is the legacy platform's own column naming.
pub const RELATION_FIELDS: [RelationField; 6] = [
  RelationField {
    column:    "Bananas",
    delimiter: LIST_DELIM_SPACED,
    kind:      RelationKind::Interest,
  },
  RelationField {
    column:    "Kiwis",
    delimiter: LIST_DELIM_SPACED,
    kind:      RelationKind::Friendship,
  },
  RelationField {
    column:    "Melons",
    delimiter: LIST_DELIM_SPACED,
    kind:      RelationKind::MetUp,
  },
  RelationField {
    column:    "Pantry",
    delimiter: LIST_DELIM_SPACED,
    kind:      RelationKind::Hidden,
  },
  RelationField {
    column:    "Raspberries",
    delimiter: LIST_DELIM_SPACED,
    kind:      RelationKind::Rejection,
  },
  RelationField {
    column:    "Watermelons",
    delimiter: LIST_DELIM_SPACED,
    kind:      RelationKind::Vouch,
  },
];

// ─── Catalog ─────────────────────────────────────────────────────────────────

/// Resolves datasets to files inside one export directory.
#[derive(Debug, Clone)]
pub struct ExportCatalog {
  dir:       PathBuf,
  overrides: HashMap<Dataset, String>,
}

impl ExportCatalog {
  pub fn new(dir: impl Into<PathBuf>) -> Self {
    Self {
      dir:       dir.into(),
      overrides: HashMap::new(),
    }
  }

  /// Override the file name for one dataset (exports are often delivered
  /// with timestamped names).
  pub fn with_file(mut self, dataset: Dataset, file_name: impl Into<String>) -> Self {
    self.overrides.insert(dataset, file_name.into());
    self
  }

  pub fn dir(&self) -> &Path {
    &self.dir
  }

  pub fn path(&self, dataset: Dataset) -> PathBuf {
    let name = self
      .overrides
      .get(&dataset)
      .map(String::as_str)
      .unwrap_or_else(|| dataset.default_file_name());
    self.dir.join(name)
  }

  /// Read every row of one dataset. A missing file is a hard error.
  pub fn read(&self, dataset: Dataset) -> Result<Vec<RawRecord>> {
    read_records(&self.path(dataset))
  }
}
