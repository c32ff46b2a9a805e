//! The `BookingStore` trait and its outcome types.
//!
//! The trait is implemented by storage backends (e.g. `gigbook-store-sqlite`).
//! The HTTP layer depends on this abstraction, not on any concrete backend.
//!
//! Domain-level failure modes (missing record, deletion denied) are expressed
//! in the outcome types below, so `Self::Error` is reserved for genuine
//! infrastructure faults. Handlers map outcomes to response codes without
//! inspecting backend error internals.

use std::future::Future;

use uuid::Uuid;

use crate::{
  artist::{Artist, NewArtist},
  show::{ArtistShow, NewShow, Show, ShowListing, VenueShow},
  venue::{NewVenue, Venue},
};

// ─── Outcome types ───────────────────────────────────────────────────────────

/// Result of a delete request. Deletion is denied while shows still reference
/// the record; the caller decides how to surface that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
  Deleted,
  NotFound,
  /// The record is referenced by this many shows and was left untouched.
  InUse { show_count: usize },
}

/// Result of creating a show: both referenced records must already exist.
#[derive(Debug, Clone)]
pub enum AddShowOutcome {
  Added(Show),
  VenueNotFound(Uuid),
  ArtistNotFound(Uuid),
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a Gigbook storage backend.
///
/// Each write runs in its own transaction: it commits whole or rolls back
/// whole, and the record set is otherwise untouched. There is no optimistic
/// concurrency — concurrent edits to the same record are last-commit-wins.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait BookingStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Venues ────────────────────────────────────────────────────────────

  /// Create and persist a venue from a submitted field set.
  fn add_venue(
    &self,
    input: NewVenue,
  ) -> impl Future<Output = Result<Venue, Self::Error>> + Send + '_;

  /// Retrieve a venue by id. Returns `None` if not found.
  fn get_venue(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Venue>, Self::Error>> + Send + '_;

  /// List all venues.
  fn list_venues(
    &self,
  ) -> impl Future<Output = Result<Vec<Venue>, Self::Error>> + Send + '_;

  /// Replace a venue's full field set. Returns `None` if the id has no row.
  fn update_venue(
    &self,
    id: Uuid,
    input: NewVenue,
  ) -> impl Future<Output = Result<Option<Venue>, Self::Error>> + Send + '_;

  /// Delete a venue by id. Denied while shows reference it.
  fn delete_venue(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<DeleteOutcome, Self::Error>> + Send + '_;

  /// All venues whose name contains `term`, case-insensitively.
  fn search_venues<'a>(
    &'a self,
    term: &'a str,
  ) -> impl Future<Output = Result<Vec<Venue>, Self::Error>> + Send + 'a;

  // ── Artists ───────────────────────────────────────────────────────────

  /// Create and persist an artist from a submitted field set.
  fn add_artist(
    &self,
    input: NewArtist,
  ) -> impl Future<Output = Result<Artist, Self::Error>> + Send + '_;

  /// Retrieve an artist by id. Returns `None` if not found.
  fn get_artist(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Artist>, Self::Error>> + Send + '_;

  /// List all artists.
  fn list_artists(
    &self,
  ) -> impl Future<Output = Result<Vec<Artist>, Self::Error>> + Send + '_;

  /// Replace an artist's full field set. Returns `None` if the id has no row.
  fn update_artist(
    &self,
    id: Uuid,
    input: NewArtist,
  ) -> impl Future<Output = Result<Option<Artist>, Self::Error>> + Send + '_;

  /// Delete an artist by id. Denied while shows reference it.
  fn delete_artist(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<DeleteOutcome, Self::Error>> + Send + '_;

  /// All artists whose name contains `term`, case-insensitively.
  fn search_artists<'a>(
    &'a self,
    term: &'a str,
  ) -> impl Future<Output = Result<Vec<Artist>, Self::Error>> + Send + 'a;

  // ── Shows ─────────────────────────────────────────────────────────────

  /// Create a show referencing an existing venue and artist. Shows are
  /// immutable after creation.
  fn add_show(
    &self,
    input: NewShow,
  ) -> impl Future<Output = Result<AddShowOutcome, Self::Error>> + Send + '_;

  /// All shows joined with both counterparts, newest `start_time` first.
  fn list_shows(
    &self,
  ) -> impl Future<Output = Result<Vec<ShowListing>, Self::Error>> + Send + '_;

  /// A venue's shows joined with each artist's name and image link.
  fn shows_for_venue(
    &self,
    venue_id: Uuid,
  ) -> impl Future<Output = Result<Vec<VenueShow>, Self::Error>> + Send + '_;

  /// An artist's shows joined with each venue's name and image link.
  fn shows_for_artist(
    &self,
    artist_id: Uuid,
  ) -> impl Future<Output = Result<Vec<ArtistShow>, Self::Error>> + Send + '_;
}
