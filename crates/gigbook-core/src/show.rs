//! Show — a scheduled pairing of one artist at one venue at a start time.
//!
//! Shows are immutable once created. Whether a show is "past" or "upcoming"
//! is never stored; it is derived on every read by comparing `start_time` to
//! an evaluation instant supplied by the caller (see [`crate::views`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted show record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Show {
  pub show_id:    Uuid,
  pub venue_id:   Uuid,
  pub artist_id:  Uuid,
  pub start_time: DateTime<Utc>,
}

/// Input to [`crate::store::BookingStore::add_show`].
/// `show_id` is always assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewShow {
  pub venue_id:   Uuid,
  pub artist_id:  Uuid,
  pub start_time: DateTime<Utc>,
}

// ─── Joined read rows ────────────────────────────────────────────────────────

/// A show row as it appears on a venue's detail page: joined with the
/// counterpart artist's name and image link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueShow {
  pub show_id:           Uuid,
  pub artist_id:         Uuid,
  pub artist_name:       String,
  pub artist_image_link: Option<String>,
  pub start_time:        DateTime<Utc>,
}

/// A show row as it appears on an artist's detail page: joined with the
/// counterpart venue's name and image link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistShow {
  pub show_id:          Uuid,
  pub venue_id:         Uuid,
  pub venue_name:       String,
  pub venue_image_link: Option<String>,
  pub start_time:       DateTime<Utc>,
}

/// A show row on the global listing page, joined with both counterparts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowListing {
  pub show_id:           Uuid,
  pub venue_id:          Uuid,
  pub venue_name:        String,
  pub artist_id:         Uuid,
  pub artist_name:       String,
  pub artist_image_link: Option<String>,
  pub start_time:        DateTime<Utc>,
}

// ─── Scheduled ───────────────────────────────────────────────────────────────

/// Anything that occupies a slot on the calendar. Implemented by every show
/// row shape so [`crate::views::partition_shows`] works on all of them.
pub trait Scheduled {
  fn starts_at(&self) -> DateTime<Utc>;
}

impl Scheduled for Show {
  fn starts_at(&self) -> DateTime<Utc> { self.start_time }
}

impl Scheduled for VenueShow {
  fn starts_at(&self) -> DateTime<Utc> { self.start_time }
}

impl Scheduled for ArtistShow {
  fn starts_at(&self) -> DateTime<Utc> { self.start_time }
}

impl Scheduled for ShowListing {
  fn starts_at(&self) -> DateTime<Utc> { self.start_time }
}
