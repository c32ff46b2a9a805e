//! Handlers for `/shows` endpoints.
//!
//! Shows are immutable: there is no edit or delete surface for them.

use std::sync::Arc;

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use gigbook_core::{
  show::{NewShow, ShowListing},
  store::{AddShowOutcome, BookingStore},
};

use crate::error::ApiError;

/// `GET /shows` — all shows joined with both counterparts, newest first.
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<ShowListing>>, ApiError>
where
  S: BookingStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let listings = store
    .list_shows()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(listings))
}

/// `POST /shows/create` — body: `{"venue_id":..,"artist_id":..,"start_time":..}`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewShow>,
) -> Result<impl IntoResponse, ApiError>
where
  S: BookingStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  match store
    .add_show(body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
  {
    AddShowOutcome::Added(show) => {
      tracing::info!(show_id = %show.show_id, "show created");
      Ok((StatusCode::CREATED, Json(show)))
    }
    AddShowOutcome::VenueNotFound(id) => {
      Err(ApiError::NotFound(format!("venue {id} not found")))
    }
    AddShowOutcome::ArtistNotFound(id) => {
      Err(ApiError::NotFound(format!("artist {id} not found")))
    }
  }
}
