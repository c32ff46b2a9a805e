//! JSON HTTP surface for the Gigbook booking ledger.
//!
//! Exposes an axum [`Router`] backed by any
//! [`BookingStore`](gigbook_core::store::BookingStore). Auth, TLS, and
//! transport concerns are the caller's responsibility.

pub mod artists;
pub mod error;
pub mod shows;
pub mod venues;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Json, Router,
  routing::{get, post},
};
use gigbook_core::store::BookingStore;
use serde::{Deserialize, Serialize};
use serde_json::json;

pub use error::ApiError;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and the
/// `GIGBOOK_`-prefixed environment.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
}

// ─── Shared request/response shapes ──────────────────────────────────────────

/// Body of the `POST /{venues,artists}/search` endpoints.
#[derive(Debug, Deserialize)]
pub struct SearchBody {
  pub term: String,
}

/// Search results plus their match count.
#[derive(Debug, Serialize)]
pub struct SearchResponse<T> {
  pub count: usize,
  pub data:  Vec<T>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn router<S>(store: Arc<S>) -> Router<()>
where
  S: BookingStore + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/", get(home))
    // Venues
    .route("/venues", get(venues::list::<S>))
    .route("/venues/search", post(venues::search::<S>))
    .route("/venues/create", post(venues::create::<S>))
    .route(
      "/venues/{id}",
      get(venues::get_one::<S>).delete(venues::delete_one::<S>),
    )
    .route("/venues/{id}/edit", post(venues::edit::<S>))
    // Artists
    .route("/artists", get(artists::list::<S>))
    .route("/artists/search", post(artists::search::<S>))
    .route("/artists/create", post(artists::create::<S>))
    .route(
      "/artists/{id}",
      get(artists::get_one::<S>).delete(artists::delete_one::<S>),
    )
    .route("/artists/{id}/edit", post(artists::edit::<S>))
    // Shows
    .route("/shows", get(shows::list::<S>))
    .route("/shows/create", post(shows::create::<S>))
    .fallback(not_found)
    .with_state(store)
}

/// `GET /` — service banner.
async fn home() -> Json<serde_json::Value> {
  Json(json!({
    "service": env!("CARGO_PKG_NAME"),
    "version": env!("CARGO_PKG_VERSION"),
  }))
}

/// Unknown routes get the themed JSON 404 body instead of an empty response.
async fn not_found() -> ApiError {
  ApiError::NotFound("no such route".to_owned())
}

// ─── Integration tests ────────────────────────────────────────────────────────
