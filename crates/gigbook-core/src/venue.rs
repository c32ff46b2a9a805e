//! Venue — a place that hosts shows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted venue record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
  pub venue_id:            Uuid,
  /// Server-assigned timestamp; never changes after creation.
  pub created_at:          DateTime<Utc>,
  pub name:                String,
  pub address:             String,
  pub city:                String,
  pub state:               String,
  pub phone:               Option<String>,
  /// Free-text genre labels. No vocabulary is enforced.
  pub genres:              Vec<String>,
  pub image_link:          Option<String>,
  pub facebook_link:       Option<String>,
  pub website_link:        Option<String>,
  pub seeking_talent:      bool,
  pub seeking_description: Option<String>,
}

/// The submitted field set for creating or fully replacing a venue.
/// `venue_id` and `created_at` are always assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewVenue {
  pub name:                String,
  pub address:             String,
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
  pub seeking_talent:      bool,
  #[serde(default)]
  pub seeking_description: Option<String>,
}
