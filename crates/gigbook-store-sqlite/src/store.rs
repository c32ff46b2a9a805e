//! [`SqliteStore`] — the SQLite implementation of [`BookingStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use gigbook_core::{
  artist::{Artist, NewArtist},
  show::{ArtistShow, NewShow, Show, ShowListing, VenueShow},
  store::{AddShowOutcome, BookingStore, DeleteOutcome},
  venue::{NewVenue, Venue},
};

use crate::{
  encode::{
    RawArtist, RawArtistShow, RawShowListing, RawVenue, RawVenueShow,
    encode_dt, encode_genres, encode_uuid,
  },
  schema::SCHEMA,
  Error, Result,
};

const VENUE_COLS: &str = "venue_id, created_at, name, address, city, state, \
                          phone, genres, image_link, facebook_link, \
                          website_link, seeking_talent, seeking_description";

const ARTIST_COLS: &str = "artist_id, created_at, name, city, state, phone, \
                           genres, image_link, facebook_link, website_link, \
                           seeking_venue, seeking_description";

fn venue_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawVenue> {
  Ok(RawVenue {
    venue_id:            row.get(0)?,
    created_at:          row.get(1)?,
    name:                row.get(2)?,
    address:             row.get(3)?,
    city:                row.get(4)?,
    state:               row.get(5)?,
    phone:               row.get(6)?,
    genres:              row.get(7)?,
    image_link:          row.get(8)?,
    facebook_link:       row.get(9)?,
    website_link:        row.get(10)?,
    seeking_talent:      row.get(11)?,
    seeking_description: row.get(12)?,
  })
}

fn artist_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawArtist> {
  Ok(RawArtist {
    artist_id:           row.get(0)?,
    created_at:          row.get(1)?,
    name:                row.get(2)?,
    city:                row.get(3)?,
    state:               row.get(4)?,
    phone:               row.get(5)?,
    genres:              row.get(6)?,
    image_link:          row.get(7)?,
    facebook_link:       row.get(8)?,
    website_link:        row.get(9)?,
    seeking_venue:       row.get(10)?,
    seeking_description: row.get(11)?,
  })
}

/// Closure-to-caller result of an UPDATE that must report "no such row".
enum UpdateOutcome {
  /// The row existed; carries its original `created_at` column.
  Updated { created_at: String },
  Missing,
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Gigbook booking ledger backed by a single SQLite file.
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

// ─── BookingStore impl ───────────────────────────────────────────────────────

impl BookingStore for SqliteStore {
  type Error = Error;

  // ── Venues ────────────────────────────────────────────────────────────────

  async fn add_venue(&self, input: NewVenue) -> Result<Venue> {
    let venue = Venue {
      venue_id:            Uuid::new_v4(),
      created_at:          Utc::now(),
      name:                input.name,
      address:             input.address,
      city:                input.city,
      state:               input.state,
      phone:               input.phone,
      genres:              input.genres,
      image_link:          input.image_link,
      facebook_link:       input.facebook_link,
      website_link:        input.website_link,
      seeking_talent:      input.seeking_talent,
      seeking_description: input.seeking_description,
    };

    let id_str     = encode_uuid(venue.venue_id);
    let at_str     = encode_dt(venue.created_at);
    let genres_str = encode_genres(&venue.genres)?;
    let v          = venue.clone();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO venues (
             venue_id, created_at, name, address, city, state, phone, genres,
             image_link, facebook_link, website_link,
             seeking_talent, seeking_description
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
          rusqlite::params![
            id_str,
            at_str,
            v.name,
            v.address,
            v.city,
            v.state,
            v.phone,
            genres_str,
            v.image_link,
            v.facebook_link,
            v.website_link,
            v.seeking_talent,
            v.seeking_description,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(venue)
  }

  async fn get_venue(&self, id: Uuid) -> Result<Option<Venue>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawVenue> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {VENUE_COLS} FROM venues WHERE venue_id = ?1"),
              rusqlite::params![id_str],
              venue_from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawVenue::into_venue).transpose()
  }

  async fn list_venues(&self) -> Result<Vec<Venue>> {
    let raws: Vec<RawVenue> = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare(&format!("SELECT {VENUE_COLS} FROM venues"))?;
        let rows = stmt
          .query_map([], venue_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawVenue::into_venue).collect()
  }

  async fn update_venue(
    &self,
    id:    Uuid,
    input: NewVenue,
  ) -> Result<Option<Venue>> {
    let id_str     = encode_uuid(id);
    let genres_str = encode_genres(&input.genres)?;
    let fields     = input.clone();

    let outcome: UpdateOutcome = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let created_at: Option<String> = tx
          .query_row(
            "SELECT created_at FROM venues WHERE venue_id = ?1",
            rusqlite::params![id_str],
            |row| row.get(0),
          )
          .optional()?;

        let Some(created_at) = created_at else {
          return Ok(UpdateOutcome::Missing);
        };

        tx.execute(
          "UPDATE venues SET
             name = ?2, address = ?3, city = ?4, state = ?5, phone = ?6,
             genres = ?7, image_link = ?8, facebook_link = ?9,
             website_link = ?10, seeking_talent = ?11,
             seeking_description = ?12
           WHERE venue_id = ?1",
          rusqlite::params![
            id_str,
            fields.name,
            fields.address,
            fields.city,
            fields.state,
            fields.phone,
            genres_str,
            fields.image_link,
            fields.facebook_link,
            fields.website_link,
            fields.seeking_talent,
            fields.seeking_description,
          ],
        )?;

        tx.commit()?;
        Ok(UpdateOutcome::Updated { created_at })
      })
      .await?;

    match outcome {
      UpdateOutcome::Missing => Ok(None),
      UpdateOutcome::Updated { created_at } => Ok(Some(Venue {
        venue_id:            id,
        created_at:          crate::encode::decode_dt(&created_at)?,
        name:                input.name,
        address:             input.address,
        city:                input.city,
        state:               input.state,
        phone:               input.phone,
        genres:              input.genres,
        image_link:          input.image_link,
        facebook_link:       input.facebook_link,
        website_link:        input.website_link,
        seeking_talent:      input.seeking_talent,
        seeking_description: input.seeking_description,
      })),
    }
  }

  async fn delete_venue(&self, id: Uuid) -> Result<DeleteOutcome> {
    let id_str = encode_uuid(id);

    let outcome = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let exists: bool = tx
          .query_row(
            "SELECT 1 FROM venues WHERE venue_id = ?1",
            rusqlite::params![id_str],
            |_| Ok(true),
          )
          .optional()?
          .unwrap_or(false);

        if !exists {
          return Ok(DeleteOutcome::NotFound);
        }

        let show_count: i64 = tx.query_row(
          "SELECT COUNT(*) FROM shows WHERE venue_id = ?1",
          rusqlite::params![id_str],
          |row| row.get(0),
        )?;

        if show_count > 0 {
          // Rolls back on drop; the venue row is untouched.
          return Ok(DeleteOutcome::InUse { show_count: show_count as usize });
        }

        tx.execute(
          "DELETE FROM venues WHERE venue_id = ?1",
          rusqlite::params![id_str],
        )?;
        tx.commit()?;
        Ok(DeleteOutcome::Deleted)
      })
      .await?;

    Ok(outcome)
  }

  async fn search_venues(&self, term: &str) -> Result<Vec<Venue>> {
    // SQLite LIKE is case-insensitive over ASCII, which is exactly the
    // unified search behavior for both record kinds.
    let pattern = format!("%{term}%");

    let raws: Vec<RawVenue> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {VENUE_COLS} FROM venues WHERE name LIKE ?1"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![pattern], venue_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawVenue::into_venue).collect()
  }

  // ── Artists ───────────────────────────────────────────────────────────────

  async fn add_artist(&self, input: NewArtist) -> Result<Artist> {
    let artist = Artist {
      artist_id:           Uuid::new_v4(),
      created_at:          Utc::now(),
      name:                input.name,
      city:                input.city,
      state:               input.state,
      phone:               input.phone,
      genres:              input.genres,
      image_link:          input.image_link,
      facebook_link:       input.facebook_link,
      website_link:        input.website_link,
      seeking_venue:       input.seeking_venue,
      seeking_description: input.seeking_description,
    };

    let id_str     = encode_uuid(artist.artist_id);
    let at_str     = encode_dt(artist.created_at);
    let genres_str = encode_genres(&artist.genres)?;
    let a          = artist.clone();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO artists (
             artist_id, created_at, name, city, state, phone, genres,
             image_link, facebook_link, website_link,
             seeking_venue, seeking_description
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
          rusqlite::params![
            id_str,
            at_str,
            a.name,
            a.city,
            a.state,
            a.phone,
            genres_str,
            a.image_link,
            a.facebook_link,
            a.website_link,
            a.seeking_venue,
            a.seeking_description,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(artist)
  }

  async fn get_artist(&self, id: Uuid) -> Result<Option<Artist>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawArtist> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {ARTIST_COLS} FROM artists WHERE artist_id = ?1"),
              rusqlite::params![id_str],
              artist_from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawArtist::into_artist).transpose()
  }

  async fn list_artists(&self) -> Result<Vec<Artist>> {
    let raws: Vec<RawArtist> = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare(&format!("SELECT {ARTIST_COLS} FROM artists"))?;
        let rows = stmt
          .query_map([], artist_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawArtist::into_artist).collect()
  }

  async fn update_artist(
    &self,
    id:    Uuid,
    input: NewArtist,
  ) -> Result<Option<Artist>> {
    let id_str     = encode_uuid(id);
    let genres_str = encode_genres(&input.genres)?;
    let fields     = input.clone();

    let outcome: UpdateOutcome = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let created_at: Option<String> = tx
          .query_row(
            "SELECT created_at FROM artists WHERE artist_id = ?1",
            rusqlite::params![id_str],
            |row| row.get(0),
          )
          .optional()?;

        let Some(created_at) = created_at else {
          return Ok(UpdateOutcome::Missing);
        };

        tx.execute(
          "UPDATE artists SET
             name = ?2, city = ?3, state = ?4, phone = ?5, genres = ?6,
             image_link = ?7, facebook_link = ?8, website_link = ?9,
             seeking_venue = ?10, seeking_description = ?11
           WHERE artist_id = ?1",
          rusqlite::params![
            id_str,
            fields.name,
            fields.city,
            fields.state,
            fields.phone,
            genres_str,
            fields.image_link,
            fields.facebook_link,
            fields.website_link,
            fields.seeking_venue,
            fields.seeking_description,
          ],
        )?;

        tx.commit()?;
        Ok(UpdateOutcome::Updated { created_at })
      })
      .await?;

    match outcome {
      UpdateOutcome::Missing => Ok(None),
      UpdateOutcome::Updated { created_at } => Ok(Some(Artist {
        artist_id:           id,
        created_at:          crate::encode::decode_dt(&created_at)?,
        name:                input.name,
        city:                input.city,
        state:               input.state,
        phone:               input.phone,
        genres:              input.genres,
        image_link:          input.image_link,
        facebook_link:       input.facebook_link,
        website_link:        input.website_link,
        seeking_venue:       input.seeking_venue,
        seeking_description: input.seeking_description,
      })),
    }
  }

  async fn delete_artist(&self, id: Uuid) -> Result<DeleteOutcome> {
    let id_str = encode_uuid(id);

    let outcome = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let exists: bool = tx
          .query_row(
            "SELECT 1 FROM artists WHERE artist_id = ?1",
            rusqlite::params![id_str],
            |_| Ok(true),
          )
          .optional()?
          .unwrap_or(false);

        if !exists {
          return Ok(DeleteOutcome::NotFound);
        }

        let show_count: i64 = tx.query_row(
          "SELECT COUNT(*) FROM shows WHERE artist_id = ?1",
          rusqlite::params![id_str],
          |row| row.get(0),
        )?;

        if show_count > 0 {
          return Ok(DeleteOutcome::InUse { show_count: show_count as usize });
        }

        tx.execute(
          "DELETE FROM artists WHERE artist_id = ?1",
          rusqlite::params![id_str],
        )?;
        tx.commit()?;
        Ok(DeleteOutcome::Deleted)
      })
      .await?;

    Ok(outcome)
  }

  async fn search_artists(&self, term: &str) -> Result<Vec<Artist>> {
    let pattern = format!("%{term}%");

    let raws: Vec<RawArtist> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {ARTIST_COLS} FROM artists WHERE name LIKE ?1"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![pattern], artist_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawArtist::into_artist).collect()
  }

  // ── Shows ─────────────────────────────────────────────────────────────────

  async fn add_show(&self, input: NewShow) -> Result<AddShowOutcome> {
    let show = Show {
      show_id:    Uuid::new_v4(),
      venue_id:   input.venue_id,
      artist_id:  input.artist_id,
      start_time: input.start_time,
    };

    let show_id_str   = encode_uuid(show.show_id);
    let venue_id_str  = encode_uuid(show.venue_id);
    let artist_id_str = encode_uuid(show.artist_id);
    let start_str     = encode_dt(show.start_time);

    // 0 = added, 1 = venue missing, 2 = artist missing. Pre-checked in the
    // same transaction as the insert so the typed outcome cannot race with
    // the foreign-key constraint.
    let code: u8 = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let venue_exists: bool = tx
          .query_row(
            "SELECT 1 FROM venues WHERE venue_id = ?1",
            rusqlite::params![venue_id_str],
            |_| Ok(true),
          )
          .optional()?
          .unwrap_or(false);
        if !venue_exists {
          return Ok(1);
        }

        let artist_exists: bool = tx
          .query_row(
            "SELECT 1 FROM artists WHERE artist_id = ?1",
            rusqlite::params![artist_id_str],
            |_| Ok(true),
          )
          .optional()?
          .unwrap_or(false);
        if !artist_exists {
          return Ok(2);
        }

        tx.execute(
          "INSERT INTO shows (show_id, venue_id, artist_id, start_time)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![show_id_str, venue_id_str, artist_id_str, start_str],
        )?;
        tx.commit()?;
        Ok(0)
      })
      .await?;

    Ok(match code {
      0 => AddShowOutcome::Added(show),
      1 => AddShowOutcome::VenueNotFound(input.venue_id),
      _ => AddShowOutcome::ArtistNotFound(input.artist_id),
    })
  }

  async fn list_shows(&self) -> Result<Vec<ShowListing>> {
    let raws: Vec<RawShowListing> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT s.show_id, s.venue_id, v.name, s.artist_id, a.name,
                  a.image_link, s.start_time
           FROM shows s
           JOIN venues  v ON v.venue_id  = s.venue_id
           JOIN artists a ON a.artist_id = s.artist_id
           ORDER BY s.start_time DESC",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawShowListing {
              show_id:           row.get(0)?,
              venue_id:          row.get(1)?,
              venue_name:        row.get(2)?,
              artist_id:         row.get(3)?,
              artist_name:       row.get(4)?,
              artist_image_link: row.get(5)?,
              start_time:        row.get(6)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawShowListing::into_listing).collect()
  }

  async fn shows_for_venue(&self, venue_id: Uuid) -> Result<Vec<VenueShow>> {
    let id_str = encode_uuid(venue_id);

    let raws: Vec<RawVenueShow> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT s.show_id, s.artist_id, a.name, a.image_link, s.start_time
           FROM shows s
           JOIN artists a ON a.artist_id = s.artist_id
           WHERE s.venue_id = ?1",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![id_str], |row| {
            Ok(RawVenueShow {
              show_id:           row.get(0)?,
              artist_id:         row.get(1)?,
              artist_name:       row.get(2)?,
              artist_image_link: row.get(3)?,
              start_time:        row.get(4)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawVenueShow::into_venue_show).collect()
  }

  async fn shows_for_artist(&self, artist_id: Uuid) -> Result<Vec<ArtistShow>> {
    let id_str = encode_uuid(artist_id);

    let raws: Vec<RawArtistShow> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT s.show_id, s.venue_id, v.name, v.image_link, s.start_time
           FROM shows s
           JOIN venues v ON v.venue_id = s.venue_id
           WHERE s.artist_id = ?1",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![id_str], |row| {
            Ok(RawArtistShow {
              show_id:          row.get(0)?,
              venue_id:         row.get(1)?,
              venue_name:       row.get(2)?,
              venue_image_link: row.get(3)?,
              start_time:       row.get(4)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawArtistShow::into_artist_show).collect()
  }
}
