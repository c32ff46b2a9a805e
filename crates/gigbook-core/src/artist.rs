//! Artist — a performer who plays shows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted artist record. Same lifecycle shape as
/// [`Venue`](crate::venue::Venue), minus the street address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
  pub artist_id:           Uuid,
  /// Server-assigned timestamp; never changes after creation.
  pub created_at:          DateTime<Utc>,
  pub name:                String,
  pub city:                String,
  pub state:               String,
  pub phone:               Option<String>,
  /// Free-text genre labels. No vocabulary is enforced.
  pub genres:              Vec<String>,
  pub image_link:          Option<String>,
  pub facebook_link:       Option<String>,
  pub website_link:        Option<String>,
  pub seeking_venue:       bool,
  pub seeking_description: Option<String>,
}

/// The submitted field set for creating or fully replacing an artist.
/// `artist_id` and `created_at` are always assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewArtist {
  pub name:                String,
  pub city:                String,
  pub state:               String,
  #[serde(default)]
  pub phone:               Option<String>,
  #[serde(default)]
  pub genres:              Vec<String>,
  #[serde(default)]
  pub image_link:          Option<String>,
  #[serde(default)]
  pub facebook_link:       Option<String>,
  #[serde(default)]
  pub website_link:        Option<String>,
  #[serde(default)]
  pub seeking_venue:       bool,
  #[serde(default)]
  pub seeking_description: Option<String>,
}
