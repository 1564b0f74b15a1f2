use std::path::Path;

use chrono::NaiveDateTime;
use log::{debug, info};
use rusqlite::{params, Connection};

use crate::error::{Result, TournamentError};
use crate::store::{EventId, Match, MatchId, PlayerId, Standing, TournamentStore};

pub fn create_schema(conn: &mut Connection) -> rusqlite::Result<()> {
	let tx = conn.transaction()?;

	tx.execute(
		"CREATE TABLE IF NOT EXISTS events (
			id   INTEGER PRIMARY KEY AUTOINCREMENT,
			name TEXT    NOT NULL
						 UNIQUE
						 CHECK (name <> '')
		);",
		[],
	)?;

	tx.execute(
		"CREATE TABLE IF NOT EXISTS players (
			id       INTEGER PRIMARY KEY AUTOINCREMENT,
			name     TEXT    NOT NULL,
			event_id INTEGER NOT NULL
							 REFERENCES events (id) ON DELETE CASCADE,
			UNIQUE (id, event_id)
		);",
		[],
	)?;

	tx.execute(
		"CREATE TABLE IF NOT EXISTS matches (
			id        INTEGER PRIMARY KEY AUTOINCREMENT,
			player1   INTEGER NOT NULL,
			player2   INTEGER NOT NULL,
			winner    INTEGER NOT NULL,
			event_id  INTEGER NOT NULL,
			played_at TEXT    NOT NULL,
			CHECK (player1 <> player2),
			CHECK (winner IN (player1, player2)),
			FOREIGN KEY (player1, event_id)
				REFERENCES players (id, event_id) ON DELETE CASCADE,
			FOREIGN KEY (player2, event_id)
				REFERENCES players (id, event_id) ON DELETE CASCADE
		);",
		[],
	)?;

	tx.execute(
		"CREATE VIEW IF NOT EXISTS player_standings AS
			SELECT players.id       AS player_id,
				   players.name     AS name,
				   players.event_id AS event_id,
				   COUNT(CASE WHEN matches.winner = players.id THEN 1 END) AS wins,
				   COUNT(matches.id) AS matches_played
			  FROM players
			  LEFT JOIN matches
				ON matches.player1 = players.id
				OR matches.player2 = players.id
			 GROUP BY players.id;",
		[],
	)?;

	tx.commit()
}

/// SQLite-backed tournament store owning a single connection.
pub struct SqliteStore {
	conn: Connection,
}

impl SqliteStore {
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		debug!("opening tournament database at {}", path.display());
		Self::init(Connection::open(path).map_err(TournamentError::ConnectionFailure)?)
	}

	pub fn open_in_memory() -> Result<Self> {
		Self::init(Connection::open_in_memory().map_err(TournamentError::ConnectionFailure)?)
	}

	fn init(mut conn: Connection) -> Result<Self> {
		conn.execute_batch("PRAGMA foreign_keys = ON;")?;
		create_schema(&mut conn)?;

		Ok(Self { conn })
	}
}

impl TournamentStore for SqliteStore {
	fn create_event(&self, name: &str) -> Result<EventId> {
		let mut stmt = self.conn.prepare("INSERT INTO events (name) VALUES (?1);")?;
		stmt.execute([name])?;

		let id = self.conn.last_insert_rowid();
		debug!("created event {id} ({name})");
		Ok(id)
	}

	fn event_id(&self, name: &str) -> Result<EventId> {
		let mut stmt = self.conn.prepare("SELECT id FROM events WHERE name = ?1;")?;
		let mut result = stmt.query_map([name], |row| row.get::<usize, EventId>(0))?;

		let id: Option<EventId> = match result.next() {
			Some(x) => Some(x?),
			None => None,
		};

		id.ok_or_else(|| TournamentError::NotFound(format!("event {name:?}")))
	}

	fn register_player(&self, name: &str, event_id: EventId) -> Result<PlayerId> {
		let mut stmt = self
			.conn
			.prepare("INSERT INTO players (name, event_id) VALUES (?1, ?2);")?;
		stmt.execute(params![name, event_id]).map_err(|e| match TournamentError::from(e) {
			TournamentError::ConstraintViolation(_) => {
				TournamentError::NotFound(format!("event {event_id}"))
			}
			other => other,
		})?;

		let id = self.conn.last_insert_rowid();
		debug!("registered player {id} ({name}) for event {event_id}");
		Ok(id)
	}

	fn count_players(&self, event_id: EventId) -> Result<usize> {
		let count = self.conn.query_row(
			"SELECT COUNT(*) FROM players WHERE event_id = ?1;",
			[event_id],
			|row| row.get::<usize, usize>(0),
		)?;

		Ok(count)
	}

	fn record_match_at(
		&self,
		winner: PlayerId,
		loser: PlayerId,
		event_id: EventId,
		played_at: NaiveDateTime,
	) -> Result<MatchId> {
		let mut stmt = self.conn.prepare(
			"INSERT INTO matches (player1, player2, winner, event_id, played_at)
			 VALUES (?1, ?2, ?1, ?3, ?4);",
		)?;
		stmt.execute(params![winner, loser, event_id, played_at])?;

		let id = self.conn.last_insert_rowid();
		debug!("recorded match {id}: {winner} beat {loser} in event {event_id}");
		Ok(id)
	}

	fn matches(&self, event_id: EventId) -> Result<Vec<Match>> {
		let mut stmt = self.conn.prepare(
			"SELECT id, player1, player2, winner, event_id, played_at
			   FROM matches
			  WHERE event_id = ?1
			  ORDER BY id;",
		)?;

		let matches = stmt
			.query_map([event_id], |row| {
				Ok(Match {
					id: row.get(0)?,
					player1: row.get(1)?,
					player2: row.get(2)?,
					winner: row.get(3)?,
					event_id: row.get(4)?,
					played_at: row.get(5)?,
				})
			})?
			.collect::<rusqlite::Result<Vec<_>>>()?;

		Ok(matches)
	}

	fn standings(&self, event_id: EventId) -> Result<Vec<Standing>> {
		let mut stmt = self.conn.prepare(
			"SELECT player_id, name, wins, matches_played
			   FROM player_standings
			  WHERE event_id = ?1
			  ORDER BY wins DESC, player_id ASC;",
		)?;

		let standings = stmt
			.query_map([event_id], |row| {
				Ok(Standing {
					player_id: row.get(0)?,
					name: row.get(1)?,
					wins: row.get(2)?,
					matches_played: row.get(3)?,
				})
			})?
			.collect::<rusqlite::Result<Vec<_>>>()?;

		Ok(standings)
	}

	fn delete_events(&self) -> Result<usize> {
		let removed = self.conn.execute("DELETE FROM events;", [])?;
		info!("deleted {removed} events");
		Ok(removed)
	}

	fn delete_players(&self) -> Result<usize> {
		let removed = self.conn.execute("DELETE FROM players;", [])?;
		info!("deleted {removed} players");
		Ok(removed)
	}

	fn delete_matches(&self) -> Result<usize> {
		let removed = self.conn.execute("DELETE FROM matches;", [])?;
		info!("deleted {removed} matches");
		Ok(removed)
	}
}
