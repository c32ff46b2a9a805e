//! Handlers for `/artists` endpoints — the mirror of [`crate::venues`].
//!
//! The one difference besides field names: `GET /artists` is a flat listing
//! with full field sets, not a locale grouping.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use chrono::Utc;
use gigbook_core::{
  artist::{Artist, NewArtist},
  show::ArtistShow,
  store::{BookingStore, DeleteOutcome},
  views::partition_shows,
};
use serde::Serialize;
use uuid::Uuid;

use crate::{SearchBody, SearchResponse, error::ApiError};

/// An artist's full field set plus its shows partitioned around request time.
#[derive(Debug, Serialize)]
pub struct ArtistDetail {
  #[serde(flatten)]
  pub artist:               Artist,
  pub upcoming_shows:       Vec<ArtistShow>,
  pub past_shows:           Vec<ArtistShow>,
  pub upcoming_shows_count: usize,
  pub past_shows_count:     usize,
}

/// `GET /artists`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Artist>>, ApiError>
where
  S: BookingStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let artists = store
    .list_artists()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(artists))
}

/// `POST /artists/search` — body: `{"term":"..."}`
pub async fn search<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<SearchBody>,
) -> Result<Json<SearchResponse<Artist>>, ApiError>
where
  S: BookingStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let data = store
    .search_artists(&body.term)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  Ok(Json(SearchResponse { count: data.len(), data }))
}

/// `GET /artists/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<ArtistDetail>, ApiError>
where
  S: BookingStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let artist = store
    .get_artist(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("artist {id} not found")))?;

  let shows = store
    .shows_for_artist(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  let partition = partition_shows(shows, Utc::now());

  Ok(Json(ArtistDetail {
    artist,
    upcoming_shows_count: partition.upcoming_count(),
    past_shows_count: partition.past_count(),
    upcoming_shows: partition.upcoming,
    past_shows: partition.past,
  }))
}

/// `POST /artists/create` — body: full field set
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewArtist>,
) -> Result<impl IntoResponse, ApiError>
where
  S: BookingStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let artist = store
    .add_artist(body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  tracing::info!(artist_id = %artist.artist_id, name = %artist.name, "artist created");
  Ok((StatusCode::CREATED, Json(artist)))
}

/// `POST /artists/:id/edit` — replaces the full field set, last-commit-wins.
pub async fn edit<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Json(body): Json<NewArtist>,
) -> Result<Json<Artist>, ApiError>
where
  S: BookingStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let artist = store
    .update_artist(id, body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("artist {id} not found")))?;

  Ok(Json(artist))
}

/// `DELETE /artists/:id`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError>
where
  S: BookingStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  match store
    .delete_artist(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
  {
    DeleteOutcome::Deleted => {
      tracing::info!(artist_id = %id, "artist deleted");
      Ok(StatusCode::NO_CONTENT)
    }
    DeleteOutcome::NotFound => {
      Err(ApiError::NotFound(format!("artist {id} not found")))
    }
    DeleteOutcome::InUse { show_count } => Err(ApiError::Conflict(format!(
      "artist {id} still has {show_count} referencing show(s)"
    ))),
  }
}
