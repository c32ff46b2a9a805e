//! View assembly — locale grouping and past/upcoming show partitioning.
//!
//! These are pure functions: the evaluation instant is an explicit argument,
//! never read from a global clock, so callers (and tests) control time.
//! Nothing here is cached or persisted; every page render recomputes.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
  show::{Scheduled, ShowListing},
  venue::Venue,
};

// ─── Locale grouping ─────────────────────────────────────────────────────────

/// One venue's entry inside a locale group.
#[derive(Debug, Clone, Serialize)]
pub struct VenueSummary {
  pub venue_id:       Uuid,
  pub name:           String,
  /// Shows with `start_time` strictly after the evaluation instant.
  pub upcoming_count: usize,
}

/// All venues sharing one `(city, state)` pair.
#[derive(Debug, Clone, Serialize)]
pub struct LocaleGroup {
  pub city:   String,
  pub state:  String,
  pub venues: Vec<VenueSummary>,
}

/// Group venues by their `(city, state)` pair, annotating each with its
/// upcoming-show count.
///
/// Every venue lands in exactly one group. The output order is deterministic:
/// groups ascend by `(city, state)`, venues within a group ascend by name.
pub fn locale_groups(
  venues: &[Venue],
  shows:  &[ShowListing],
  now:    DateTime<Utc>,
) -> Vec<LocaleGroup> {
  let mut groups: BTreeMap<(String, String), Vec<VenueSummary>> =
    BTreeMap::new();

  for venue in venues {
    let upcoming_count = shows
      .iter()
      .filter(|s| s.venue_id == venue.venue_id && s.start_time > now)
      .count();

    groups
      .entry((venue.city.clone(), venue.state.clone()))
      .or_default()
      .push(VenueSummary {
        venue_id: venue.venue_id,
        name: venue.name.clone(),
        upcoming_count,
      });
  }

  groups
    .into_iter()
    .map(|((city, state), mut venues)| {
      venues.sort_by(|a, b| a.name.cmp(&b.name));
      LocaleGroup { city, state, venues }
    })
    .collect()
}

// ─── Show partitioning ───────────────────────────────────────────────────────

/// A set of show rows split around an evaluation instant.
#[derive(Debug, Clone, Serialize)]
pub struct ShowPartition<T> {
  /// `start_time` strictly after the instant.
  pub upcoming: Vec<T>,
  /// `start_time` at or before the instant.
  pub past:     Vec<T>,
}

impl<T> ShowPartition<T> {
  pub fn upcoming_count(&self) -> usize { self.upcoming.len() }

  pub fn past_count(&self) -> usize { self.past.len() }
}

/// Partition show rows into upcoming and past relative to `now`.
///
/// A show starting exactly at `now` is past — "upcoming" means strictly
/// after. Relative input order is preserved within each half.
pub fn partition_shows<T: Scheduled>(
  shows: impl IntoIterator<Item = T>,
  now:   DateTime<Utc>,
) -> ShowPartition<T> {
  let (upcoming, past) = shows.into_iter().partition(|s| s.starts_at() > now);
  ShowPartition { upcoming, past }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
