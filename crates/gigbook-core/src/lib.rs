//! Core types and trait definitions for the Gigbook booking ledger.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod artist;
pub mod show;
pub mod store;
pub mod venue;
pub mod views;

pub use artist::{Artist, NewArtist};
pub use show::{ArtistShow, NewShow, Scheduled, Show, ShowListing, VenueShow};
pub use venue::{NewVenue, Venue};
