//! SQL schema for the Gigbook SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS venues (
    venue_id            TEXT PRIMARY KEY,
    created_at          TEXT NOT NULL,    -- ISO 8601 UTC; server-assigned
    name                TEXT NOT NULL,
    address             TEXT NOT NULL,
    city                TEXT NOT NULL,
    state               TEXT NOT NULL,
    phone               TEXT,
    genres              TEXT NOT NULL DEFAULT '[]',  -- JSON array of strings
    image_link          TEXT,
    facebook_link       TEXT,
    website_link        TEXT,
    seeking_talent      INTEGER NOT NULL DEFAULT 0,
    seeking_description TEXT
);

CREATE TABLE IF NOT EXISTS artists (
    artist_id           TEXT PRIMARY KEY,
    created_at          TEXT NOT NULL,
    name                TEXT NOT NULL,
    city                TEXT NOT NULL,
    state               TEXT NOT NULL,
    phone               TEXT,
    genres              TEXT NOT NULL DEFAULT '[]',
    image_link          TEXT,
    facebook_link       TEXT,
    website_link        TEXT,
    seeking_venue       INTEGER NOT NULL DEFAULT 0,
    seeking_description TEXT
);

-- Shows are immutable after creation.
-- No UPDATE is ever issued against this table.
CREATE TABLE IF NOT EXISTS shows (
    show_id    TEXT PRIMARY KEY,
    venue_id   TEXT NOT NULL REFERENCES venues(venue_id),
    artist_id  TEXT NOT NULL REFERENCES artists(artist_id),
    start_time TEXT NOT NULL    -- ISO 8601 UTC
);

CREATE INDEX IF NOT EXISTS shows_venue_idx  ON shows(venue_id);
CREATE INDEX IF NOT EXISTS shows_artist_idx ON shows(artist_id);
CREATE INDEX IF NOT EXISTS shows_start_idx  ON shows(start_time);

PRAGMA user_version = 1;
";
