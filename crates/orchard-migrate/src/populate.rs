//! User store population.
//!
//! Phase A writes one stub identity per resolved name. Phase B writes one
//! fully profiled identity per email-keyed export row, under a new,
//! independent identifier — deliberately unrelated to any name-based id,
//! even when both denote the same person. Every row write is independent;
//! a failure is logged, counted, and skipped.

use orchard_core::{
  identity::NewProfile, namemap::NameMap, store::DirectoryStore,
};
use orchard_export::{
  RawRecord,
  catalog::{LIST_DELIM_BARE, LIST_DELIM_SPACED},
  values::{parse_bool, parse_int, parse_timestamp, split_list},
};
use uuid::Uuid;

use crate::report::MigrationReport;

/// Phase A: one stub per name in the map.
pub async fn insert_stubs<S: DirectoryStore>(
  store: &S,
  map: &NameMap,
  report: &mut MigrationReport,
) {
  for (name, id) in map.iter() {
    match store.insert_stub(id, name.to_string()).await {
      Ok(_) => report.stub_users.written += 1,
      Err(err) => {
        report
          .stub_users
          .record_error(&format!("stub user {name:?}"), &err);
      }
    }
  }
  tracing::info!("inserted {} name-stub users", report.stub_users.written);
}

/// Phase B: one profiled identity per email-keyed row.
pub async fn insert_profiles<S: DirectoryStore>(
  store: &S,
  rows: &[RawRecord],
  report: &mut MigrationReport,
) {
  for row in rows {
    let Some(profile) = profile_from_row(row) else {
      report.profiled_users.skipped += 1;
      continue;
    };
    let email = profile.email.clone();
    match store.insert_profile(profile).await {
      Ok(_) => report.profiled_users.written += 1,
      Err(err) => {
        report
          .profiled_users
          .record_error(&format!("profiled user {email:?}"), &err);
      }
    }
  }
  tracing::info!(
    "inserted {} profiled users ({} rows without email skipped)",
    report.profiled_users.written,
    report.profiled_users.skipped,
  );
}

/// Decode one profiled-user row. Returns `None` when the row has no email —
/// the profiled dataset is keyed on it.
fn profile_from_row(row: &RawRecord) -> Option<NewProfile> {
  let email = row.get_trimmed("email")?.to_string();

  Some(NewProfile {
    id: Uuid::new_v4(),
    email,
    name: row.get_trimmed("Name").map(str::to_string),
    age: row.get("Age").and_then(parse_int),
    pronouns: row.get_trimmed("Pronouns").map(str::to_string),
    location: row.get_trimmed("Location").map(str::to_string),
    short_description: row.get_trimmed("shortdescription").map(str::to_string),
    long_description: row.get_trimmed("longdescription").map(str::to_string),
    main_photo: row.get_trimmed("MainPhoto").map(str::to_string),
    photos: row
      .get("Photos")
      .map(|v| split_list(v, LIST_DELIM_SPACED))
      .unwrap_or_default(),
    consent: row.get("consent").is_some_and(parse_bool),
    collaborators: row
      .get("Collabs")
      .map(|v| split_list(v, LIST_DELIM_BARE))
      .unwrap_or_default(),
    communities: row
      .get("Communities")
      .map(|v| split_list(v, LIST_DELIM_BARE))
      .unwrap_or_default(),
    legacy_id: row.get_trimmed("unique id").map(str::to_string),
    created_at: row.get("Creation Date").and_then(parse_timestamp),
    updated_at: row.get("Modified Date").and_then(parse_timestamp),
  })
}
