//! End-to-end pipeline tests against a synthetic set of legacy exports in a
//! temporary directory, written to an in-memory store.

use std::{collections::BTreeSet, path::Path};

use orchard_core::{relation::RelationKind, store::DirectoryStore};
use orchard_export::{Dataset, ExportCatalog};
use orchard_store_sqlite::SqliteStore;
use uuid::Uuid;

// ─── Fixture helpers ─────────────────────────────────────────────────────────

fn csv_line(cells: &[&str]) -> String {
  let quoted: Vec<String> = cells
    .iter()
    .map(|cell| {
      if cell.contains(',') || cell.contains('"') || cell.contains('\n') {
        format!("\"{}\"", cell.replace('"', "\"\""))
      } else {
        (*cell).to_string()
      }
    })
    .collect();
  quoted.join(",")
}

fn write_export(dir: &Path, name: &str, rows: &[Vec<&str>]) {
  let content: String = rows
    .iter()
    .map(|row| csv_line(row))
    .collect::<Vec<_>>()
    .join("\n");
  std::fs::write(dir.join(name), content + "\n").unwrap();
}

/// A small but complete export set:
///
/// - alice, bob, carol are profiled users; a fourth row has no email.
/// - alice vouches for bob and carol; bob vouches for alice (directed).
/// - alice and bob declare each other as friends (symmetric, redundant).
/// - alice lists an interest in `ghost_user`, who exists nowhere.
/// - alice lists herself under rejections (self-reference).
/// - eve appears only as a message author; the admin placeholder appears
///   as another message's author.
fn build_exports(dir: &Path) {
  write_export(dir, "All-Users.csv", &[
    vec![
      "email", "Name", "Age", "Pronouns", "Location", "shortdescription",
      "longdescription", "MainPhoto", "Photos", "consent", "Collabs",
      "Communities", "unique id", "Creation Date", "Modified Date",
      "Bananas", "Kiwis", "Melons", "Pantry", "Raspberries", "Watermelons",
    ],
    vec![
      "alice@example.com", "alice", "31", "she/her", "Oakland", "gardener",
      "", "", "a.jpg , b.jpg", "yes", "bob,carol", "bay area",
      "1689736298781x", "Jul 19, 2023 3:11 am", "", "ghost_user", "bob", "",
      "", "alice", "bob , carol",
    ],
    vec![
      "bob@example.com", "bob", "29", "", "", "", "", "", "", "no", "", "",
      "", "", "", "", "alice", "", "", "", "alice",
    ],
    vec![
      "carol@example.com", "carol", "", "", "", "", "", "", "", "", "", "",
      "", "", "", "", "", "", "", "", "",
    ],
    vec![
      "", "dave", "", "", "", "", "", "", "", "", "", "", "", "", "", "",
      "", "", "", "", "",
    ],
  ]);

  write_export(dir, "All-Messages.csv", &[
    vec!["Creator", "Recipient", "Value", "Creation Date", "Modified Date"],
    vec!["alice", "bob", "hi bob", "Jul 19, 2023 3:11 am", ""],
    vec!["(App admin)", "alice", "welcome!", "", ""],
    vec!["eve", "alice", "hello", "", ""],
    vec!["alice", "bob", "", "", ""],
  ]);

  write_export(dir, "All-Likes.csv", &[
    vec!["Sender", "Receiver", "Creation Date"],
    vec!["alice", "bob", ""],
  ]);

  write_export(dir, "All-FriendTestimonials.csv", &[
    vec!["Creator", "Subject", "Value", "Creation Date", "Modified Date"],
    vec!["bob", "alice", "great human", "", ""],
  ]);

  write_export(dir, "All-AppTestimonials.csv", &[
    vec!["Creator", "Username", "Value", "Creation Date", "Modified Date"],
    vec!["alice", "alice", "love it", "", ""],
    vec!["zed", "zed", "never met most of you", "", ""],
  ]);

  write_export(dir, "All-Met-Ups.csv", &[
    vec!["Creator", "User 2", "Creation Date"],
    vec!["alice", "bob", ""],
  ]);

  write_export(dir, "All-Projects.csv", &[
    vec![
      "Name", "Description", "Link", "Photo", "Order", "Creation Date",
      "Modified Date",
    ],
    vec!["garden wiki", "shared notes", "", "", "2", "", ""],
    vec!["", "", "", "", "", "", ""],
  ]);

  write_export(dir, "All-UserLinks.csv", &[
    vec!["User", "Label", "Link", "Creation Date", "Modified Date"],
    vec!["alice", "Blog", "https://alice.example", "", ""],
    vec!["", "Orphan", "https://nobody.example", "", ""],
  ]);

  write_export(dir, "All-Videos.csv", &[
    vec!["Creator", "URL", "Creation Date", "Modified Date"],
    vec![
      "alice",
      "https://www.youtube.com/embed/dQw4w9WgXcQ?rel=0",
      "",
      "",
    ],
  ]);

  write_export(dir, "All-Pairings.csv", &[
    vec![
      "Match 1 ", "Match 2", "Match 2 Alt name", "Contact Info2",
      "Description", "Here for", "Anonymous", "Creation Date",
    ],
    vec![
      "alice", "bob", "", "alice@example.com", "seemed like a fit",
      "friends,dating", "no", "",
    ],
  ]);
}

fn table_count(counts: &[(String, u64)], table: &str) -> u64 {
  counts
    .iter()
    .find(|(t, _)| t == table)
    .map(|(_, n)| *n)
    .unwrap_or_else(|| panic!("no count for table {table:?}"))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn full_pipeline_migrates_the_synthetic_export() {
  let dir = tempfile::tempdir().unwrap();
  build_exports(dir.path());
  let catalog = ExportCatalog::new(dir.path());
  let store = SqliteStore::open_in_memory().await.unwrap();

  let report = orchard_migrate::run(&catalog, &store).await.unwrap();

  // Identity resolution: alice, bob, carol, dave (profiled-row names) and
  // eve (message author). Sentinels excluded.
  assert_eq!(report.stub_users.written, 5);
  assert_eq!(report.profiled_users.written, 3);
  assert_eq!(report.profiled_users.skipped, 1); // the email-less row

  let identities = store.list_identities().await.unwrap();
  assert_eq!(identities.len(), 8); // 5 stubs + 3 profiles

  let usernames: BTreeSet<&str> = identities
    .iter()
    .filter_map(|i| i.username.as_deref())
    .collect();
  assert_eq!(
    usernames,
    BTreeSet::from(["alice", "bob", "carol", "dave", "eve"]),
  );
  assert!(!usernames.contains("(App admin)"));

  let emails: BTreeSet<&str> = identities
    .iter()
    .filter_map(|i| i.email.as_deref())
    .collect();
  assert_eq!(
    emails,
    BTreeSet::from([
      "alice@example.com",
      "bob@example.com",
      "carol@example.com"
    ]),
  );

  // Stub ids, for edge assertions below. Relation edges connect the
  // name-based identities, never the email-based ones.
  let stub_id = |name: &str| -> Uuid {
    identities
      .iter()
      .find(|i| i.username.as_deref() == Some(name))
      .unwrap()
      .id
  };
  let (alice, bob, carol) = (stub_id("alice"), stub_id("bob"), stub_id("carol"));

  // Vouch is directed: alice→bob, alice→carol, bob→alice all coexist.
  let vouches: BTreeSet<(Uuid, Uuid)> = store
    .list_edges(RelationKind::Vouch)
    .await
    .unwrap()
    .into_iter()
    .map(|e| (e.subject_id, e.object_id))
    .collect();
  assert_eq!(
    vouches,
    BTreeSet::from([(alice, bob), (alice, carol), (bob, alice)]),
  );
  assert_eq!(report.relation(RelationKind::Vouch).written, 3);

  // Friendship is symmetric: both declarations collapse into one canonical
  // edge.
  let friendships = store.list_edges(RelationKind::Friendship).await.unwrap();
  assert_eq!(friendships.len(), 1);
  assert_eq!(
    (friendships[0].subject_id, friendships[0].object_id),
    (alice.min(bob), alice.max(bob)),
  );
  let friendship_stats = report.relation(RelationKind::Friendship);
  assert_eq!(friendship_stats.written, 1);
  assert_eq!(friendship_stats.duplicates, 1);

  // ghost_user resolves nowhere: no edge, one unresolved reference.
  assert_eq!(store.relation_count(RelationKind::Interest).await.unwrap(), 0);
  assert_eq!(report.relation(RelationKind::Interest).unresolved, 1);

  // alice's self-reference was dropped silently.
  assert_eq!(store.relation_count(RelationKind::Rejection).await.unwrap(), 0);
  assert_eq!(report.relation(RelationKind::Rejection).unresolved, 0);

  // The met-ups export is a name source only; edges come exclusively from
  // the embedded relation lists, and nobody listed any met-ups there.
  assert_eq!(store.relation_count(RelationKind::MetUp).await.unwrap(), 0);

  // Content datasets.
  let counts = store.table_counts().await.unwrap();
  assert_eq!(table_count(&counts, "messages"), 3); // empty-content row skipped
  assert_eq!(report.content[&Dataset::Messages].skipped, 1);
  assert_eq!(table_count(&counts, "friend_testimonials"), 1);
  assert_eq!(table_count(&counts, "app_testimonials"), 2);
  assert_eq!(table_count(&counts, "user_links"), 1); // ownerless row skipped
  assert_eq!(report.content[&Dataset::UserLinks].skipped, 1);
  assert_eq!(table_count(&counts, "videos"), 1);
  assert_eq!(table_count(&counts, "projects"), 2);
  assert_eq!(table_count(&counts, "pairings"), 1);
}

#[tokio::test]
async fn second_full_run_duplicates_identities_but_not_edges() {
  let dir = tempfile::tempdir().unwrap();
  build_exports(dir.path());
  let catalog = ExportCatalog::new(dir.path());
  let store = SqliteStore::open_in_memory().await.unwrap();

  orchard_migrate::run(&catalog, &store).await.unwrap();
  orchard_migrate::run(&catalog, &store).await.unwrap();

  // Identity creation is not idempotent: the second run mints fresh
  // identifiers for every stub and profile.
  assert_eq!(store.list_identities().await.unwrap().len(), 16);

  // The graph phase is: tables are cleared first, so edge volume is
  // unchanged (now referencing the second run's identities).
  assert_eq!(
    store.relation_count(RelationKind::Friendship).await.unwrap(),
    1,
  );
  assert_eq!(store.relation_count(RelationKind::Vouch).await.unwrap(), 3);
}

#[tokio::test]
async fn missing_export_file_is_fatal() {
  let dir = tempfile::tempdir().unwrap();
  // Deliberately empty directory: no export files at all.
  let catalog = ExportCatalog::new(dir.path());
  let store = SqliteStore::open_in_memory().await.unwrap();

  let err = orchard_migrate::run(&catalog, &store).await.unwrap_err();
  assert!(matches!(err, orchard_migrate::Error::Export(_)));
}
