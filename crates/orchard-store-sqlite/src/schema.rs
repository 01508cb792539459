//! SQL schema for the Orchard migration target store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.
//!
//! `users` deliberately carries no uniqueness constraint on `username` or
//! `email`: identity creation is non-idempotent across pipeline runs, and a
//! second full run mints duplicate entities rather than failing partway.
//! The relation tables are the opposite — `(subject_id, object_id)` is
//! unique per table, and the writer relies on insert-or-ignore against that
//! constraint to collapse redundantly declared edges.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- Identities: name-based stubs (username only) and email-keyed profiles.
-- The two spaces are never unified by this pipeline.
CREATE TABLE IF NOT EXISTS users (
    id                TEXT PRIMARY KEY,
    username          TEXT,
    email             TEXT,
    name              TEXT,
    age               INTEGER,
    pronouns          TEXT,
    location          TEXT,
    short_description TEXT,
    long_description  TEXT,
    main_photo        TEXT,
    photos            TEXT NOT NULL DEFAULT '[]',   -- JSON array of URLs
    consent           INTEGER NOT NULL DEFAULT 0,
    collaborators     TEXT NOT NULL DEFAULT '[]',   -- JSON array
    communities       TEXT NOT NULL DEFAULT '[]',   -- JSON array
    legacy_id         TEXT,
    created_at        TEXT NOT NULL,
    updated_at        TEXT
);

-- One table per relation kind, uniform columns. Symmetric kinds store the
-- pair in canonical (min, max) identifier order.
CREATE TABLE IF NOT EXISTS interests (
    id          TEXT PRIMARY KEY,
    subject_id  TEXT NOT NULL REFERENCES users(id),
    object_id   TEXT NOT NULL REFERENCES users(id),
    created_at  TEXT NOT NULL,
    UNIQUE (subject_id, object_id)
);

CREATE TABLE IF NOT EXISTS friendships (
    id          TEXT PRIMARY KEY,
    subject_id  TEXT NOT NULL REFERENCES users(id),
    object_id   TEXT NOT NULL REFERENCES users(id),
    created_at  TEXT NOT NULL,
    UNIQUE (subject_id, object_id)
);

CREATE TABLE IF NOT EXISTS met_ups (
    id          TEXT PRIMARY KEY,
    subject_id  TEXT NOT NULL REFERENCES users(id),
    object_id   TEXT NOT NULL REFERENCES users(id),
    created_at  TEXT NOT NULL,
    UNIQUE (subject_id, object_id)
);

CREATE TABLE IF NOT EXISTS hidden_users (
    id          TEXT PRIMARY KEY,
    subject_id  TEXT NOT NULL REFERENCES users(id),
    object_id   TEXT NOT NULL REFERENCES users(id),
    created_at  TEXT NOT NULL,
    UNIQUE (subject_id, object_id)
);

CREATE TABLE IF NOT EXISTS rejections (
    id          TEXT PRIMARY KEY,
    subject_id  TEXT NOT NULL REFERENCES users(id),
    object_id   TEXT NOT NULL REFERENCES users(id),
    created_at  TEXT NOT NULL,
    UNIQUE (subject_id, object_id)
);

CREATE TABLE IF NOT EXISTS vouches (
    id          TEXT PRIMARY KEY,
    subject_id  TEXT NOT NULL REFERENCES users(id),
    object_id   TEXT NOT NULL REFERENCES users(id),
    created_at  TEXT NOT NULL,
    UNIQUE (subject_id, object_id)
);

-- Content rows carried over with the graph. Participant references are
-- nullable: a resolved payload with an unresolved author is still worth
-- keeping.
CREATE TABLE IF NOT EXISTS messages (
    id           TEXT PRIMARY KEY,
    sender_id    TEXT REFERENCES users(id),
    recipient_id TEXT REFERENCES users(id),
    content      TEXT NOT NULL,
    created_at   TEXT,
    updated_at   TEXT
);

CREATE TABLE IF NOT EXISTS friend_testimonials (
    id          TEXT PRIMARY KEY,
    author_id   TEXT REFERENCES users(id),
    subject_id  TEXT REFERENCES users(id),
    content     TEXT NOT NULL,
    created_at  TEXT,
    updated_at  TEXT
);

CREATE TABLE IF NOT EXISTS app_testimonials (
    id          TEXT PRIMARY KEY,
    author_id   TEXT REFERENCES users(id),
    username    TEXT,
    content     TEXT NOT NULL,
    created_at  TEXT,
    updated_at  TEXT
);

CREATE TABLE IF NOT EXISTS user_links (
    id          TEXT PRIMARY KEY,
    user_id     TEXT NOT NULL REFERENCES users(id),
    label       TEXT NOT NULL,
    url         TEXT NOT NULL,
    created_at  TEXT,
    updated_at  TEXT
);

CREATE TABLE IF NOT EXISTS videos (
    id          TEXT PRIMARY KEY,
    user_id     TEXT REFERENCES users(id),
    url         TEXT NOT NULL,
    created_at  TEXT,
    updated_at  TEXT
);

CREATE TABLE IF NOT EXISTS projects (
    id            TEXT PRIMARY KEY,
    name          TEXT NOT NULL,
    description   TEXT,
    link          TEXT,
    photo_url     TEXT,
    display_order INTEGER NOT NULL DEFAULT 1,
    created_at    TEXT,
    updated_at    TEXT
);

CREATE TABLE IF NOT EXISTS pairings (
    id              TEXT PRIMARY KEY,
    match1_id       TEXT REFERENCES users(id),
    match2_id       TEXT REFERENCES users(id),
    match1_name     TEXT,
    match2_name     TEXT,
    match2_alt_name TEXT,
    contact_info    TEXT,
    description     TEXT,
    here_for        TEXT NOT NULL DEFAULT '[]',    -- JSON array
    anonymous       INTEGER NOT NULL DEFAULT 0,
    created_at      TEXT
);

CREATE INDEX IF NOT EXISTS users_username_idx      ON users(username);
CREATE INDEX IF NOT EXISTS users_email_idx         ON users(email);
CREATE INDEX IF NOT EXISTS messages_sender_idx     ON messages(sender_id);
CREATE INDEX IF NOT EXISTS messages_recipient_idx  ON messages(recipient_id);
CREATE INDEX IF NOT EXISTS user_links_user_idx     ON user_links(user_id);

PRAGMA user_version = 1;
";
