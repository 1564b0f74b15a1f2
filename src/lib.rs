//! Swiss-system tournament bookkeeping on top of SQLite.
//!
//! Events, players and match results live in the database; standings and
//! next-round pairings are derived from them on every call. All operations
//! go through a [`TournamentStore`] handle, [`SqliteStore`] being the one
//! backed by a real database.

pub mod db;
pub mod error;
pub mod import;
pub mod pairing;
pub mod render;
pub mod store;

pub use db::SqliteStore;
pub use error::{Result, TournamentError};
pub use pairing::{pair_standings, swiss_pairings, Pairing};
pub use store::{EventId, Match, MatchId, PlayerId, Standing, TournamentStore};
