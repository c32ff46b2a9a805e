//! Error type for `gigbook-store-sqlite`.
//!
//! Domain-level failure modes (missing record, deletion denied) are not
//! errors here — they travel in the outcome types of
//! [`gigbook_core::store`]. This enum covers infrastructure faults only.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
