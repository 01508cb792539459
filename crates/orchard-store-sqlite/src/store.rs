//! [`SqliteStore`] — the SQLite implementation of [`DirectoryStore`].

use std::path::Path;

use chrono::Utc;
use uuid::Uuid;

use orchard_core::{
  content::{
    NewAppTestimonial, NewFriendTestimonial, NewMessage, NewPairing,
    NewProject, NewUserLink, NewVideo,
  },
  identity::{Identity, NewProfile},
  relation::{CandidateEdge, RelationEdge, RelationKind},
  store::DirectoryStore,
};

use crate::{
  Error, Result,
  encode::{
    RawEdge, RawIdentity, encode_dt, encode_dt_opt, encode_list, encode_uuid,
  },
  schema::SCHEMA,
};

/// Tables owned by this store, in reporting order.
const ALL_TABLES: [&str; 14] = [
  "users",
  "interests",
  "friendships",
  "met_ups",
  "hidden_users",
  "rejections",
  "vouches",
  "messages",
  "friend_testimonials",
  "app_testimonials",
  "user_links",
  "videos",
  "projects",
  "pairings",
];

// ─── Store ───────────────────────────────────────────────────────────────────

/// A migration target store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── DirectoryStore impl ─────────────────────────────────────────────────────

impl DirectoryStore for SqliteStore {
  type Error = Error;

  // ── Identities ────────────────────────────────────────────────────────────

  async fn insert_stub(&self, id: Uuid, username: String) -> Result<Identity> {
    let identity = Identity {
      id,
      username: Some(username),
      email: None,
      created_at: Utc::now(),
    };

    let id_str = encode_uuid(identity.id);
    let username_str = identity.username.clone();
    let at_str = encode_dt(identity.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO users (id, username, created_at) VALUES (?1, ?2, ?3)",
          rusqlite::params![id_str, username_str, at_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(identity)
  }

  async fn insert_profile(&self, profile: NewProfile) -> Result<Identity> {
    let created_at = profile.created_at.unwrap_or_else(Utc::now);
    let identity = Identity {
      id:         profile.id,
      username:   None,
      email:      Some(profile.email.clone()),
      created_at,
    };

    let id_str         = encode_uuid(profile.id);
    let photos_str     = encode_list(&profile.photos)?;
    let collabs_str    = encode_list(&profile.collaborators)?;
    let communities_str = encode_list(&profile.communities)?;
    let created_str    = encode_dt(created_at);
    let updated_str    = encode_dt_opt(profile.updated_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO users (
             id, email, name, age, pronouns, location,
             short_description, long_description, main_photo, photos,
             consent, collaborators, communities, legacy_id,
             created_at, updated_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12,
                     ?13, ?14, ?15, ?16)",
          rusqlite::params![
            id_str,
            profile.email,
            profile.name,
            profile.age,
            profile.pronouns,
            profile.location,
            profile.short_description,
            profile.long_description,
            profile.main_photo,
            photos_str,
            profile.consent,
            collabs_str,
            communities_str,
            profile.legacy_id,
            created_str,
            updated_str,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(identity)
  }

  async fn list_identities(&self) -> Result<Vec<Identity>> {
    let raws: Vec<RawIdentity> = self
      .conn
      .call(|conn| {
        let mut stmt = conn
          .prepare("SELECT id, username, email, created_at FROM users")?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawIdentity {
              id:         row.get(0)?,
              username:   row.get(1)?,
              email:      row.get(2)?,
              created_at: row.get(3)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawIdentity::into_identity).collect()
  }

  // ── Relation graph ────────────────────────────────────────────────────────

  async fn clear_relations(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        for kind in RelationKind::ALL {
          conn.execute(&format!("DELETE FROM {}", kind.table()), [])?;
        }
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn insert_edge(&self, edge: CandidateEdge) -> Result<bool> {
    let sql = format!(
      "INSERT OR IGNORE INTO {} (id, subject_id, object_id, created_at)
       VALUES (?1, ?2, ?3, ?4)",
      edge.kind.table(),
    );
    let id_str      = encode_uuid(Uuid::new_v4());
    let subject_str = encode_uuid(edge.subject_id);
    let object_str  = encode_uuid(edge.object_id);
    let at_str      = encode_dt(Utc::now());

    let written = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          &sql,
          rusqlite::params![id_str, subject_str, object_str, at_str],
        )?;
        Ok(changed > 0)
      })
      .await?;

    Ok(written)
  }

  async fn list_edges(&self, kind: RelationKind) -> Result<Vec<RelationEdge>> {
    let sql = format!(
      "SELECT id, subject_id, object_id, created_at FROM {} ORDER BY rowid",
      kind.table(),
    );

    let raws: Vec<RawEdge> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawEdge {
              id:         row.get(0)?,
              subject_id: row.get(1)?,
              object_id:  row.get(2)?,
              created_at: row.get(3)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(|raw| raw.into_edge(kind)).collect()
  }

  async fn relation_count(&self, kind: RelationKind) -> Result<u64> {
    let sql = format!("SELECT COUNT(*) FROM {}", kind.table());
    let count: i64 = self
      .conn
      .call(move |conn| Ok(conn.query_row(&sql, [], |row| row.get(0))?))
      .await?;
    Ok(count as u64)
  }

  // ── Content rows ──────────────────────────────────────────────────────────

  async fn insert_message(&self, message: NewMessage) -> Result<()> {
    let id_str        = encode_uuid(Uuid::new_v4());
    let sender_str    = message.sender_id.map(encode_uuid);
    let recipient_str = message.recipient_id.map(encode_uuid);
    let created_str   = encode_dt_opt(message.created_at);
    let updated_str   = encode_dt_opt(message.updated_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO messages
             (id, sender_id, recipient_id, content, created_at, updated_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            id_str,
            sender_str,
            recipient_str,
            message.content,
            created_str,
            updated_str,
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn insert_friend_testimonial(
    &self,
    testimonial: NewFriendTestimonial,
  ) -> Result<()> {
    let id_str      = encode_uuid(Uuid::new_v4());
    let author_str  = testimonial.author_id.map(encode_uuid);
    let subject_str = testimonial.subject_id.map(encode_uuid);
    let created_str = encode_dt_opt(testimonial.created_at);
    let updated_str = encode_dt_opt(testimonial.updated_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO friend_testimonials
             (id, author_id, subject_id, content, created_at, updated_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            id_str,
            author_str,
            subject_str,
            testimonial.content,
            created_str,
            updated_str,
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn insert_app_testimonial(
    &self,
    testimonial: NewAppTestimonial,
  ) -> Result<()> {
    let id_str      = encode_uuid(Uuid::new_v4());
    let author_str  = testimonial.author_id.map(encode_uuid);
    let created_str = encode_dt_opt(testimonial.created_at);
    let updated_str = encode_dt_opt(testimonial.updated_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO app_testimonials
             (id, author_id, username, content, created_at, updated_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            id_str,
            author_str,
            testimonial.username,
            testimonial.content,
            created_str,
            updated_str,
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn insert_user_link(&self, link: NewUserLink) -> Result<()> {
    let id_str      = encode_uuid(Uuid::new_v4());
    let user_str    = encode_uuid(link.user_id);
    let created_str = encode_dt_opt(link.created_at);
    let updated_str = encode_dt_opt(link.updated_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO user_links
             (id, user_id, label, url, created_at, updated_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            id_str,
            user_str,
            link.label,
            link.url,
            created_str,
            updated_str,
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn insert_video(&self, video: NewVideo) -> Result<()> {
    let id_str      = encode_uuid(Uuid::new_v4());
    let user_str    = video.user_id.map(encode_uuid);
    let created_str = encode_dt_opt(video.created_at);
    let updated_str = encode_dt_opt(video.updated_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO videos (id, user_id, url, created_at, updated_at)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![id_str, user_str, video.url, created_str, updated_str],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn insert_project(&self, project: NewProject) -> Result<()> {
    let id_str      = encode_uuid(Uuid::new_v4());
    let created_str = encode_dt_opt(project.created_at);
    let updated_str = encode_dt_opt(project.updated_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO projects
             (id, name, description, link, photo_url, display_order,
              created_at, updated_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
          rusqlite::params![
            id_str,
            project.name,
            project.description,
            project.link,
            project.photo_url,
            project.display_order,
            created_str,
            updated_str,
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn insert_pairing(&self, pairing: NewPairing) -> Result<()> {
    let id_str      = encode_uuid(Uuid::new_v4());
    let match1_str  = pairing.match1_id.map(encode_uuid);
    let match2_str  = pairing.match2_id.map(encode_uuid);
    let here_for_str = encode_list(&pairing.here_for)?;
    let created_str = encode_dt_opt(pairing.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO pairings
             (id, match1_id, match2_id, match1_name, match2_name,
              match2_alt_name, contact_info, description, here_for,
              anonymous, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
          rusqlite::params![
            id_str,
            match1_str,
            match2_str,
            pairing.match1_name,
            pairing.match2_name,
            pairing.match2_alt_name,
            pairing.contact_info,
            pairing.description,
            here_for_str,
            pairing.anonymous,
            created_str,
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  // ── Diagnostics ───────────────────────────────────────────────────────────

  async fn table_counts(&self) -> Result<Vec<(String, u64)>> {
    let counts = self
      .conn
      .call(|conn| {
        let mut counts = Vec::with_capacity(ALL_TABLES.len());
        for table in ALL_TABLES {
          let count: i64 =
            conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
              row.get(0)
            })?;
          counts.push((table.to_string(), count as u64));
        }
        Ok(counts)
      })
      .await?;
    Ok(counts)
  }
}
