//! Content migration.
//!
//! Carries the name-mention datasets' own payloads into the target store:
//! messages, testimonials, profile links, videos, projects, and pairings.
//! Participants resolve through the identity map; where a reference fails
//! but the payload is still worth keeping, the reference is stored as NULL.
//! Every row is independent — failures are logged, counted, and skipped.

use orchard_core::{
  content::{
    NewAppTestimonial, NewFriendTestimonial, NewMessage, NewPairing,
    NewProject, NewUserLink, NewVideo,
  },
  namemap::NameMap,
  store::DirectoryStore,
};
use orchard_export::{
  ADMIN_PLACEHOLDER, Dataset, ExportCatalog, RawRecord,
  catalog::LIST_DELIM_BARE,
  values::{canonical_video_url, parse_bool, parse_int, parse_timestamp, split_list},
};
use uuid::Uuid;

use crate::{
  error::Result,
  report::MigrationReport,
};

/// Migrate every content dataset, in a fixed order. Reading a dataset is the
/// only fatal failure in this phase.
pub async fn migrate_all<S: DirectoryStore>(
  store: &S,
  catalog: &ExportCatalog,
  map: &NameMap,
  report: &mut MigrationReport,
) -> Result<(), S::Error> {
  migrate_messages(store, &catalog.read(Dataset::Messages)?, map, report).await;
  migrate_friend_testimonials(
    store,
    &catalog.read(Dataset::FriendTestimonials)?,
    map,
    report,
  )
  .await;
  migrate_app_testimonials(
    store,
    &catalog.read(Dataset::AppTestimonials)?,
    map,
    report,
  )
  .await;
  migrate_user_links(store, &catalog.read(Dataset::UserLinks)?, map, report)
    .await;
  migrate_videos(store, &catalog.read(Dataset::Videos)?, map, report).await;
  migrate_projects(store, &catalog.read(Dataset::Projects)?, report).await;
  migrate_pairings(store, &catalog.read(Dataset::Pairings)?, map, report).await;
  Ok(())
}

/// Resolve a mention cell to an identity, treating the administrator
/// placeholder as unresolvable.
fn resolve_mention(map: &NameMap, value: Option<&str>) -> Option<Uuid> {
  value
    .filter(|v| *v != ADMIN_PLACEHOLDER)
    .and_then(|v| map.resolve(v))
}

async fn migrate_messages<S: DirectoryStore>(
  store: &S,
  rows: &[RawRecord],
  map: &NameMap,
  report: &mut MigrationReport,
) {
  for row in rows {
    let Some(content) = row.get_trimmed("Value") else {
      report.content_mut(Dataset::Messages).skipped += 1;
      continue;
    };
    let message = NewMessage {
      sender_id:    resolve_mention(map, row.get_trimmed("Creator")),
      recipient_id: resolve_mention(map, row.get_trimmed("Recipient")),
      content:      content.to_string(),
      created_at:   row.get("Creation Date").and_then(parse_timestamp),
      updated_at:   row.get("Modified Date").and_then(parse_timestamp),
    };
    match store.insert_message(message).await {
      Ok(()) => report.content_mut(Dataset::Messages).written += 1,
      Err(err) => report
        .content_mut(Dataset::Messages)
        .record_error("message insert", &err),
    }
  }
  log_dataset(report, Dataset::Messages);
}

async fn migrate_friend_testimonials<S: DirectoryStore>(
  store: &S,
  rows: &[RawRecord],
  map: &NameMap,
  report: &mut MigrationReport,
) {
  for row in rows {
    let Some(content) = row.get_trimmed("Value") else {
      report.content_mut(Dataset::FriendTestimonials).skipped += 1;
      continue;
    };
    let testimonial = NewFriendTestimonial {
      author_id:  resolve_mention(map, row.get_trimmed("Creator")),
      subject_id: resolve_mention(map, row.get_trimmed("Subject")),
      content:    content.to_string(),
      created_at: row.get("Creation Date").and_then(parse_timestamp),
      updated_at: row.get("Modified Date").and_then(parse_timestamp),
    };
    match store.insert_friend_testimonial(testimonial).await {
      Ok(()) => report.content_mut(Dataset::FriendTestimonials).written += 1,
      Err(err) => report
        .content_mut(Dataset::FriendTestimonials)
        .record_error("friend testimonial insert", &err),
    }
  }
  log_dataset(report, Dataset::FriendTestimonials);
}

async fn migrate_app_testimonials<S: DirectoryStore>(
  store: &S,
  rows: &[RawRecord],
  map: &NameMap,
  report: &mut MigrationReport,
) {
  for row in rows {
    let Some(content) = row.get_trimmed("Value") else {
      report.content_mut(Dataset::AppTestimonials).skipped += 1;
      continue;
    };
    let testimonial = NewAppTestimonial {
      author_id:  resolve_mention(map, row.get_trimmed("Creator")),
      username:   row.get_trimmed("Username").map(str::to_string),
      content:    content.to_string(),
      created_at: row.get("Creation Date").and_then(parse_timestamp),
      updated_at: row.get("Modified Date").and_then(parse_timestamp),
    };
    match store.insert_app_testimonial(testimonial).await {
      Ok(()) => report.content_mut(Dataset::AppTestimonials).written += 1,
      Err(err) => report
        .content_mut(Dataset::AppTestimonials)
        .record_error("app testimonial insert", &err),
    }
  }
  log_dataset(report, Dataset::AppTestimonials);
}

async fn migrate_user_links<S: DirectoryStore>(
  store: &S,
  rows: &[RawRecord],
  map: &NameMap,
  report: &mut MigrationReport,
) {
  for row in rows {
    // A link without a resolvable owner or a URL is meaningless; skip.
    let user_id = resolve_mention(map, row.get_trimmed("User"));
    let url = row.get_trimmed("Link");
    let (Some(user_id), Some(url)) = (user_id, url) else {
      report.content_mut(Dataset::UserLinks).skipped += 1;
      continue;
    };
    let link = NewUserLink {
      user_id,
      label: row
        .get_trimmed("Label")
        .unwrap_or("Link")
        .to_string(),
      url: url.to_string(),
      created_at: row.get("Creation Date").and_then(parse_timestamp),
      updated_at: row.get("Modified Date").and_then(parse_timestamp),
    };
    match store.insert_user_link(link).await {
      Ok(()) => report.content_mut(Dataset::UserLinks).written += 1,
      Err(err) => report
        .content_mut(Dataset::UserLinks)
        .record_error("user link insert", &err),
    }
  }
  log_dataset(report, Dataset::UserLinks);
}

async fn migrate_videos<S: DirectoryStore>(
  store: &S,
  rows: &[RawRecord],
  map: &NameMap,
  report: &mut MigrationReport,
) {
  for row in rows {
    let Some(url) = row.get_trimmed("URL") else {
      report.content_mut(Dataset::Videos).skipped += 1;
      continue;
    };
    let video = NewVideo {
      user_id:    resolve_mention(map, row.get_trimmed("Creator")),
      url:        canonical_video_url(url),
      created_at: row.get("Creation Date").and_then(parse_timestamp),
      updated_at: row.get("Modified Date").and_then(parse_timestamp),
    };
    match store.insert_video(video).await {
      Ok(()) => report.content_mut(Dataset::Videos).written += 1,
      Err(err) => report
        .content_mut(Dataset::Videos)
        .record_error("video insert", &err),
    }
  }
  log_dataset(report, Dataset::Videos);
}

async fn migrate_projects<S: DirectoryStore>(
  store: &S,
  rows: &[RawRecord],
  report: &mut MigrationReport,
) {
  for row in rows {
    let project = NewProject {
      name: row.get_trimmed("Name").unwrap_or("Untitled").to_string(),
      description: row.get_trimmed("Description").map(str::to_string),
      link: row.get_trimmed("Link").map(str::to_string),
      photo_url: row.get_trimmed("Photo").map(str::to_string),
      display_order: row.get("Order").and_then(parse_int).unwrap_or(1),
      created_at: row.get("Creation Date").and_then(parse_timestamp),
      updated_at: row.get("Modified Date").and_then(parse_timestamp),
    };
    match store.insert_project(project).await {
      Ok(()) => report.content_mut(Dataset::Projects).written += 1,
      Err(err) => report
        .content_mut(Dataset::Projects)
        .record_error("project insert", &err),
    }
  }
  log_dataset(report, Dataset::Projects);
}

async fn migrate_pairings<S: DirectoryStore>(
  store: &S,
  rows: &[RawRecord],
  map: &NameMap,
  report: &mut MigrationReport,
) {
  for row in rows {
    // Header quirk: "Match 1 " is verbatim, trailing space included.
    let match1_name = row.get_trimmed("Match 1 ");
    let match2_name = row.get_trimmed("Match 2");
    let pairing = NewPairing {
      match1_id: resolve_mention(map, match1_name),
      match2_id: resolve_mention(map, match2_name),
      match1_name: match1_name.map(str::to_string),
      match2_name: match2_name.map(str::to_string),
      match2_alt_name: row.get_trimmed("Match 2 Alt name").map(str::to_string),
      contact_info: row.get_trimmed("Contact Info2").map(str::to_string),
      description: row.get_trimmed("Description").map(str::to_string),
      here_for: row
        .get("Here for")
        .map(|v| split_list(v, LIST_DELIM_BARE))
        .unwrap_or_default(),
      anonymous: row.get("Anonymous").is_some_and(parse_bool),
      created_at: row.get("Creation Date").and_then(parse_timestamp),
    };
    match store.insert_pairing(pairing).await {
      Ok(()) => report.content_mut(Dataset::Pairings).written += 1,
      Err(err) => report
        .content_mut(Dataset::Pairings)
        .record_error("pairing insert", &err),
    }
  }
  log_dataset(report, Dataset::Pairings);
}

fn log_dataset(report: &mut MigrationReport, dataset: Dataset) {
  let stats = *report.content_mut(dataset);
  tracing::info!(
    "migrated {}: {} written, {} skipped, {} errors",
    dataset.config_key(),
    stats.written,
    stats.skipped,
    stats.errors,
  );
}
