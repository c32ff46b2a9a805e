//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings. Genre lists are stored as
//! compact JSON arrays. UUIDs are stored as hyphenated lowercase strings.
//! Seeking flags use SQLite INTEGER 0/1.

use chrono::{DateTime, Utc};
use gigbook_core::{
  artist::Artist,
  show::{ArtistShow, ShowListing, VenueShow},
  venue::Venue,
};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Genres ──────────────────────────────────────────────────────────────────

pub fn encode_genres(genres: &[String]) -> Result<String> {
  Ok(serde_json::to_string(genres)?)
}

pub fn decode_genres(s: &str) -> Result<Vec<String>> {
  Ok(serde_json::from_str(s)?)
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `venues` row.
pub struct RawVenue {
  pub venue_id:            String,
  pub created_at:          String,
  pub name:                String,
  pub address:             String,
  pub city:                String,
  pub state:               String,
  pub phone:               Option<String>,
  pub genres:              String,
  pub image_link:          Option<String>,
  pub facebook_link:       Option<String>,
  pub website_link:        Option<String>,
  pub seeking_talent:      bool,
  pub seeking_description: Option<String>,
}

impl RawVenue {
  pub fn into_venue(self) -> Result<Venue> {
    Ok(Venue {
      venue_id:            decode_uuid(&self.venue_id)?,
      created_at:          decode_dt(&self.created_at)?,
      name:                self.name,
      address:             self.address,
      city:                self.city,
      state:               self.state,
      phone:               self.phone,
      genres:              decode_genres(&self.genres)?,
      image_link:          self.image_link,
      facebook_link:       self.facebook_link,
      website_link:        self.website_link,
      seeking_talent:      self.seeking_talent,
      seeking_description: self.seeking_description,
    })
  }
}

/// Raw strings read directly from an `artists` row.
pub struct RawArtist {
  pub artist_id:           String,
  pub created_at:          String,
  pub name:                String,
  pub city:                String,
  pub state:               String,
  pub phone:               Option<String>,
  pub genres:              String,
  pub image_link:          Option<String>,
  pub facebook_link:       Option<String>,
  pub website_link:        Option<String>,
  pub seeking_venue:       bool,
  pub seeking_description: Option<String>,
}

impl RawArtist {
  pub fn into_artist(self) -> Result<Artist> {
    Ok(Artist {
      artist_id:           decode_uuid(&self.artist_id)?,
      created_at:          decode_dt(&self.created_at)?,
      name:                self.name,
      city:                self.city,
      state:               self.state,
      phone:               self.phone,
      genres:              decode_genres(&self.genres)?,
      image_link:          self.image_link,
      facebook_link:       self.facebook_link,
      website_link:        self.website_link,
      seeking_venue:       self.seeking_venue,
      seeking_description: self.seeking_description,
    })
  }
}

/// A `shows` row joined with the counterpart artist.
pub struct RawVenueShow {
  pub show_id:           String,
  pub artist_id:         String,
  pub artist_name:       String,
  pub artist_image_link: Option<String>,
  pub start_time:        String,
}

impl RawVenueShow {
  pub fn into_venue_show(self) -> Result<VenueShow> {
    Ok(VenueShow {
      show_id:           decode_uuid(&self.show_id)?,
      artist_id:         decode_uuid(&self.artist_id)?,
      artist_name:       self.artist_name,
      artist_image_link: self.artist_image_link,
      start_time:        decode_dt(&self.start_time)?,
    })
  }
}

/// A `shows` row joined with the counterpart venue.
pub struct RawArtistShow {
  pub show_id:          String,
  pub venue_id:         String,
  pub venue_name:       String,
  pub venue_image_link: Option<String>,
  pub start_time:       String,
}

impl RawArtistShow {
  pub fn into_artist_show(self) -> Result<ArtistShow> {
    Ok(ArtistShow {
      show_id:          decode_uuid(&self.show_id)?,
      venue_id:         decode_uuid(&self.venue_id)?,
      venue_name:       self.venue_name,
      venue_image_link: self.venue_image_link,
      start_time:       decode_dt(&self.start_time)?,
    })
  }
}

/// A `shows` row joined with both counterparts.
pub struct RawShowListing {
  pub show_id:           String,
  pub venue_id:          String,
  pub venue_name:        String,
  pub artist_id:         String,
  pub artist_name:       String,
  pub artist_image_link: Option<String>,
  pub start_time:        String,
}

impl RawShowListing {
  pub fn into_listing(self) -> Result<ShowListing> {
    Ok(ShowListing {
      show_id:           decode_uuid(&self.show_id)?,
      venue_id:          decode_uuid(&self.venue_id)?,
      venue_name:        self.venue_name,
      artist_id:         decode_uuid(&self.artist_id)?,
      artist_name:       self.artist_name,
      artist_image_link: self.artist_image_link,
      start_time:        decode_dt(&self.start_time)?,
    })
  }
}
