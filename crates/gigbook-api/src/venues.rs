//! Handlers for `/venues` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/venues` | Locale groups with upcoming counts |
//! | `POST`   | `/venues/search` | Body: `{"term":"..."}` |
//! | `GET`    | `/venues/:id` | Detail with partitioned shows; 404 if missing |
//! | `POST`   | `/venues/create` | Body: full field set |
//! | `POST`   | `/venues/:id/edit` | Full-field replace |
//! | `DELETE` | `/venues/:id` | 409 while shows reference the venue |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use chrono::Utc;
use gigbook_core::{
  show::VenueShow,
  store::{BookingStore, DeleteOutcome},
  venue::{NewVenue, Venue},
  views::{LocaleGroup, locale_groups, partition_shows},
};
use serde::Serialize;
use uuid::Uuid;

use crate::{SearchBody, SearchResponse, error::ApiError};

// ─── Responses ────────────────────────────────────────────────────────────────

/// A venue's full field set plus its shows partitioned around request time.
#[derive(Debug, Serialize)]
pub struct VenueDetail {
  #[serde(flatten)]
  pub venue:                Venue,
  pub upcoming_shows:       Vec<VenueShow>,
  pub past_shows:           Vec<VenueShow>,
  pub upcoming_shows_count: usize,
  pub past_shows_count:     usize,
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /venues`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<LocaleGroup>>, ApiError>
where
  S: BookingStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let venues = store
    .list_venues()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  let shows = store
    .list_shows()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  Ok(Json(locale_groups(&venues, &shows, Utc::now())))
}

// ─── Search ───────────────────────────────────────────────────────────────────

/// `POST /venues/search` — body: `{"term":"..."}`
pub async fn search<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<SearchBody>,
) -> Result<Json<SearchResponse<Venue>>, ApiError>
where
  S: BookingStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let data = store
    .search_venues(&body.term)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  Ok(Json(SearchResponse { count: data.len(), data }))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /venues/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<VenueDetail>, ApiError>
where
  S: BookingStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let venue = store
    .get_venue(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("venue {id} not found")))?;

  let shows = store
    .shows_for_venue(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  let partition = partition_shows(shows, Utc::now());

  Ok(Json(VenueDetail {
    venue,
    upcoming_shows_count: partition.upcoming_count(),
    past_shows_count: partition.past_count(),
    upcoming_shows: partition.upcoming,
    past_shows: partition.past,
  }))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /venues/create` — body: full field set
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewVenue>,
) -> Result<impl IntoResponse, ApiError>
where
  S: BookingStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let venue = store
    .add_venue(body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  tracing::info!(venue_id = %venue.venue_id, name = %venue.name, "venue created");
  Ok((StatusCode::CREATED, Json(venue)))
}

// ─── Edit ─────────────────────────────────────────────────────────────────────

/// `POST /venues/:id/edit` — replaces the full field set, last-commit-wins.
pub async fn edit<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Json(body): Json<NewVenue>,
) -> Result<Json<Venue>, ApiError>
where
  S: BookingStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let venue = store
    .update_venue(id, body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("venue {id} not found")))?;

  Ok(Json(venue))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /venues/:id`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError>
where
  S: BookingStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  match store
    .delete_venue(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
  {
    DeleteOutcome::Deleted => {
      tracing::info!(venue_id = %id, "venue deleted");
      Ok(StatusCode::NO_CONTENT)
    }
    DeleteOutcome::NotFound => {
      Err(ApiError::NotFound(format!("venue {id} not found")))
    }
    DeleteOutcome::InUse { show_count } => Err(ApiError::Conflict(format!(
      "venue {id} still has {show_count} referencing show(s)"
    ))),
  }
}
