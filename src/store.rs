use chrono::{NaiveDateTime, Utc};
use serde::Serialize;

use crate::error::Result;

pub type EventId = i64;
pub type PlayerId = i64;
pub type MatchId = i64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
	pub id: MatchId,
	pub player1: PlayerId,
	pub player2: PlayerId,
	pub winner: PlayerId,
	pub event_id: EventId,
	pub played_at: NaiveDateTime,
}

impl Match {
	pub fn loser(&self) -> PlayerId {
		if self.winner == self.player1 {
			self.player2
		} else {
			self.player1
		}
	}
}

/// One row of an event's standings, aggregated from its match log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
	pub player_id: PlayerId,
	pub name: String,
	pub wins: u32,
	pub matches_played: u32,
}

/// Handle to wherever events, players and matches are kept.
///
/// Every operation is a single statement against the backing store and
/// commits on its own. Implementations hold no tournament state of their own.
pub trait TournamentStore {
	/// Adds an event, failing with `DuplicateKey` if the name is taken.
	fn create_event(&self, name: &str) -> Result<EventId>;

	/// Looks up an event by name, failing with `NotFound` if there is none.
	fn event_id(&self, name: &str) -> Result<EventId>;

	/// Registers a player for an event. Names need not be unique.
	fn register_player(&self, name: &str, event_id: EventId) -> Result<PlayerId>;

	fn count_players(&self, event_id: EventId) -> Result<usize>;

	/// Records the outcome of a single match, stamped with the current time.
	fn record_match(
		&self,
		winner: PlayerId,
		loser: PlayerId,
		event_id: EventId,
	) -> Result<MatchId> {
		self.record_match_at(winner, loser, event_id, Utc::now().naive_utc())
	}

	fn record_match_at(
		&self,
		winner: PlayerId,
		loser: PlayerId,
		event_id: EventId,
		played_at: NaiveDateTime,
	) -> Result<MatchId>;

	/// Match log of an event, oldest first.
	fn matches(&self, event_id: EventId) -> Result<Vec<Match>>;

	/// Players of an event with their win records, most wins first.
	///
	/// Players with equal wins are ordered by id. Players that have not
	/// played yet are included with zero wins and zero matches.
	fn standings(&self, event_id: EventId) -> Result<Vec<Standing>>;

	/// Removes every event, along with their players and matches.
	fn delete_events(&self) -> Result<usize>;

	/// Removes every player, along with their matches.
	fn delete_players(&self) -> Result<usize>;

	fn delete_matches(&self) -> Result<usize>;
}
