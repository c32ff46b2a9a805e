//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::{Duration, Utc};
use gigbook_core::{
  artist::NewArtist,
  show::NewShow,
  store::{AddShowOutcome, BookingStore, DeleteOutcome},
  venue::NewVenue,
};
use uuid::Uuid;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn new_venue(name: &str) -> NewVenue {
  NewVenue {
    name:                name.to_owned(),
    address:             "123 Sixth St".to_owned(),
    city:                "Austin".to_owned(),
    state:               "TX".to_owned(),
    phone:               Some("512-555-0199".to_owned()),
    genres:              vec!["Jazz".to_owned(), "Blues".to_owned()],
    image_link:          Some("https://img.example/v.jpg".to_owned()),
    facebook_link:       None,
    website_link:        Some("https://venue.example".to_owned()),
    seeking_talent:      true,
    seeking_description: Some("Always booking".to_owned()),
  }
}

fn new_artist(name: &str) -> NewArtist {
  NewArtist {
    name:                name.to_owned(),
    city:                "Portland".to_owned(),
    state:               "OR".to_owned(),
    phone:               None,
    genres:              vec!["Folk".to_owned()],
    image_link:          Some("https://img.example/a.jpg".to_owned()),
    facebook_link:       None,
    website_link:        None,
    seeking_venue:       false,
    seeking_description: None,
  }
}

// ─── Venues ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_venue_then_get_returns_submitted_fields() {
  let s = store().await;

  let created = s.add_venue(new_venue("The Dive")).await.unwrap();
  let fetched = s.get_venue(created.venue_id).await.unwrap().unwrap();

  assert_eq!(fetched.venue_id, created.venue_id);
  assert_eq!(fetched.name, "The Dive");
  assert_eq!(fetched.address, "123 Sixth St");
  assert_eq!(fetched.city, "Austin");
  assert_eq!(fetched.state, "TX");
  assert_eq!(fetched.phone.as_deref(), Some("512-555-0199"));
  assert_eq!(fetched.genres, &["Jazz", "Blues"]);
  assert!(fetched.seeking_talent);
  assert_eq!(fetched.seeking_description.as_deref(), Some("Always booking"));
}

#[tokio::test]
async fn get_venue_missing_returns_none() {
  let s = store().await;
  assert!(s.get_venue(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn list_venues_returns_all() {
  let s = store().await;
  s.add_venue(new_venue("A")).await.unwrap();
  s.add_venue(new_venue("B")).await.unwrap();

  let all = s.list_venues().await.unwrap();
  assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn update_venue_replaces_full_field_set() {
  let s = store().await;
  let created = s.add_venue(new_venue("Old Name")).await.unwrap();

  let mut fields = new_venue("New Name");
  fields.city = "Dallas".to_owned();
  fields.seeking_talent = false;

  let updated = s
    .update_venue(created.venue_id, fields)
    .await
    .unwrap()
    .unwrap();
  assert_eq!(updated.name, "New Name");
  assert_eq!(updated.created_at, created.created_at);

  let fetched = s.get_venue(created.venue_id).await.unwrap().unwrap();
  assert_eq!(fetched.name, "New Name");
  assert_eq!(fetched.city, "Dallas");
  assert!(!fetched.seeking_talent);
}

#[tokio::test]
async fn update_missing_venue_returns_none() {
  let s = store().await;
  let result = s.update_venue(Uuid::new_v4(), new_venue("X")).await.unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn delete_venue_removes_row() {
  let s = store().await;
  let created = s.add_venue(new_venue("Doomed")).await.unwrap();

  let outcome = s.delete_venue(created.venue_id).await.unwrap();
  assert_eq!(outcome, DeleteOutcome::Deleted);
  assert!(s.get_venue(created.venue_id).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_missing_venue_reports_not_found_and_alters_nothing() {
  let s = store().await;
  s.add_venue(new_venue("Bystander")).await.unwrap();

  let outcome = s.delete_venue(Uuid::new_v4()).await.unwrap();
  assert_eq!(outcome, DeleteOutcome::NotFound);
  assert_eq!(s.list_venues().await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_venue_with_shows_is_denied() {
  let s = store().await;
  let venue  = s.add_venue(new_venue("Busy Hall")).await.unwrap();
  let artist = s.add_artist(new_artist("Headliner")).await.unwrap();

  let outcome = s
    .add_show(NewShow {
      venue_id:   venue.venue_id,
      artist_id:  artist.artist_id,
      start_time: Utc::now() + Duration::days(7),
    })
    .await
    .unwrap();
  assert!(matches!(outcome, AddShowOutcome::Added(_)));

  let outcome = s.delete_venue(venue.venue_id).await.unwrap();
  assert_eq!(outcome, DeleteOutcome::InUse { show_count: 1 });
  assert!(s.get_venue(venue.venue_id).await.unwrap().is_some());
}

// The original implementation searched venues case-sensitively and artists
// case-insensitively; the mismatch was unintentional. Both kinds now match
// case-insensitively, and these two tests pin that down.
#[tokio::test]
async fn search_venues_matches_regardless_of_case() {
  let s = store().await;
  s.add_venue(new_venue("The Musical Hop")).await.unwrap();
  s.add_venue(new_venue("Park Square")).await.unwrap();

  let hits = s.search_venues("musical").await.unwrap();
  assert_eq!(hits.len(), 1);
  assert_eq!(hits[0].name, "The Musical Hop");
}

#[tokio::test]
async fn search_artists_matches_regardless_of_case() {
  let s = store().await;
  s.add_artist(new_artist("Guns N Petals")).await.unwrap();
  s.add_artist(new_artist("The Wild Sax Band")).await.unwrap();

  let hits = s.search_artists("GUNS").await.unwrap();
  assert_eq!(hits.len(), 1);
  assert_eq!(hits[0].name, "Guns N Petals");
}

#[tokio::test]
async fn search_with_no_match_returns_empty() {
  let s = store().await;
  s.add_venue(new_venue("The Dive")).await.unwrap();
  assert!(s.search_venues("zzz").await.unwrap().is_empty());
}

// ─── Artists ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_artist_then_get_returns_submitted_fields() {
  let s = store().await;

  let created = s.add_artist(new_artist("Ava")).await.unwrap();
  let fetched = s.get_artist(created.artist_id).await.unwrap().unwrap();

  assert_eq!(fetched.artist_id, created.artist_id);
  assert_eq!(fetched.name, "Ava");
  assert_eq!(fetched.genres, &["Folk"]);
  assert!(!fetched.seeking_venue);
}

#[tokio::test]
async fn update_artist_replaces_full_field_set() {
  let s = store().await;
  let created = s.add_artist(new_artist("Before")).await.unwrap();

  let mut fields = new_artist("After");
  fields.seeking_venue = true;

  let updated = s
    .update_artist(created.artist_id, fields)
    .await
    .unwrap()
    .unwrap();
  assert_eq!(updated.name, "After");
  assert!(updated.seeking_venue);
}

#[tokio::test]
async fn delete_artist_with_shows_is_denied() {
  let s = store().await;
  let venue  = s.add_venue(new_venue("Hall")).await.unwrap();
  let artist = s.add_artist(new_artist("Booked")).await.unwrap();

  s.add_show(NewShow {
    venue_id:   venue.venue_id,
    artist_id:  artist.artist_id,
    start_time: Utc::now() - Duration::days(1),
  })
  .await
  .unwrap();

  let outcome = s.delete_artist(artist.artist_id).await.unwrap();
  assert_eq!(outcome, DeleteOutcome::InUse { show_count: 1 });
}

// ─── Shows ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_show_requires_existing_venue() {
  let s = store().await;
  let artist = s.add_artist(new_artist("Orphan")).await.unwrap();
  let ghost  = Uuid::new_v4();

  let outcome = s
    .add_show(NewShow {
      venue_id:   ghost,
      artist_id:  artist.artist_id,
      start_time: Utc::now(),
    })
    .await
    .unwrap();

  assert!(matches!(outcome, AddShowOutcome::VenueNotFound(id) if id == ghost));
  assert!(s.list_shows().await.unwrap().is_empty());
}

#[tokio::test]
async fn add_show_requires_existing_artist() {
  let s = store().await;
  let venue = s.add_venue(new_venue("Hall")).await.unwrap();
  let ghost = Uuid::new_v4();

  let outcome = s
    .add_show(NewShow {
      venue_id:   venue.venue_id,
      artist_id:  ghost,
      start_time: Utc::now(),
    })
    .await
    .unwrap();

  assert!(matches!(outcome, AddShowOutcome::ArtistNotFound(id) if id == ghost));
}

#[tokio::test]
async fn list_shows_is_newest_first_and_joined() {
  let s = store().await;
  let venue  = s.add_venue(new_venue("Hall")).await.unwrap();
  let artist = s.add_artist(new_artist("Band")).await.unwrap();
  let base   = Utc::now();

  for days in [1, 3, 2] {
    s.add_show(NewShow {
      venue_id:   venue.venue_id,
      artist_id:  artist.artist_id,
      start_time: base + Duration::days(days),
    })
    .await
    .unwrap();
  }

  let listings = s.list_shows().await.unwrap();
  assert_eq!(listings.len(), 3);
  assert!(listings.windows(2).all(|w| w[0].start_time >= w[1].start_time));
  assert_eq!(listings[0].venue_name, "Hall");
  assert_eq!(listings[0].artist_name, "Band");
  assert_eq!(
    listings[0].artist_image_link.as_deref(),
    Some("https://img.example/a.jpg")
  );
}

#[tokio::test]
async fn shows_for_venue_carries_artist_counterpart() {
  let s = store().await;
  let venue  = s.add_venue(new_venue("Hall")).await.unwrap();
  let artist = s.add_artist(new_artist("Band")).await.unwrap();

  s.add_show(NewShow {
    venue_id:   venue.venue_id,
    artist_id:  artist.artist_id,
    start_time: Utc::now(),
  })
  .await
  .unwrap();

  let rows = s.shows_for_venue(venue.venue_id).await.unwrap();
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0].artist_id, artist.artist_id);
  assert_eq!(rows[0].artist_name, "Band");
}

#[tokio::test]
async fn shows_for_artist_carries_venue_counterpart() {
  let s = store().await;
  let venue  = s.add_venue(new_venue("Hall")).await.unwrap();
  let artist = s.add_artist(new_artist("Band")).await.unwrap();

  s.add_show(NewShow {
    venue_id:   venue.venue_id,
    artist_id:  artist.artist_id,
    start_time: Utc::now(),
  })
  .await
  .unwrap();

  let rows = s.shows_for_artist(artist.artist_id).await.unwrap();
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0].venue_id, venue.venue_id);
  assert_eq!(rows[0].venue_name, "Hall");
  assert_eq!(
    rows[0].venue_image_link.as_deref(),
    Some("https://img.example/v.jpg")
  );
}

#[tokio::test]
async fn shows_for_unknown_venue_is_empty() {
  let s = store().await;
  assert!(s.shows_for_venue(Uuid::new_v4()).await.unwrap().is_empty());
}
