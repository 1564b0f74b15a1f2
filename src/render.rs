use std::io::Write;

use crate::error::Result;
use crate::pairing::swiss_pairings;
use crate::store::{EventId, TournamentStore};

pub fn standings_string<S>(store: &S, event_id: EventId) -> Result<String>
where
	S: TournamentStore + ?Sized,
{
	let mut string = String::from("# Standings\n```");

	for (rank, standing) in store.standings(event_id)?.iter().enumerate() {
		string.push_str(&format!(
			"\n{}: {} (#{}) — {}/{}",
			rank + 1,
			standing.name,
			standing.player_id,
			standing.wins,
			standing.matches_played
		));
	}

	string.push_str("\n```\n");

	Ok(string)
}

/// Writes the standings as CSV with a `player_id,name,wins,matches_played` header.
pub fn write_standings_csv<S, W>(store: &S, event_id: EventId, out: W) -> Result<()>
where
	S: TournamentStore + ?Sized,
	W: Write,
{
	let mut wtr = csv::Writer::from_writer(out);
	for standing in store.standings(event_id)? {
		wtr.serialize(standing)?;
	}
	wtr.flush().map_err(csv::Error::from)?;

	Ok(())
}

pub fn pairings_string<S>(store: &S, event_id: EventId) -> Result<String>
where
	S: TournamentStore + ?Sized,
{
	let mut string = String::from("# Next round\n```");

	for (table, pairing) in swiss_pairings(store, event_id)?.iter().enumerate() {
		string.push_str(&format!(
			"\n{}: {} (#{}) vs {} (#{})",
			table + 1,
			pairing.name1,
			pairing.id1,
			pairing.name2,
			pairing.id2
		));
	}

	string.push_str("\n```\n");

	Ok(string)
}

pub fn history_string<S>(store: &S, event_id: EventId) -> Result<String>
where
	S: TournamentStore + ?Sized,
{
	let mut string = String::from("# Matches\n```");

	for m in store.matches(event_id)? {
		string.push_str(&format!(
			"\n{}: #{} beat #{}",
			m.played_at.format("%Y-%m-%d %H:%M"),
			m.winner,
			m.loser()
		));
	}

	string.push_str("\n```\n");

	Ok(string)
}

#[cfg(test)]
mod tests {
	use chrono::NaiveDate;

	use super::*;
	use crate::db::SqliteStore;
	use crate::store::PlayerId;

	/// Four players after one round: Applejack and Twilight Sparkle won.
	fn after_one_round() -> (SqliteStore, EventId, [PlayerId; 4]) {
		let store = SqliteStore::open_in_memory().unwrap();
		let event = store.create_event("Friendship Cup").unwrap();
		let ids = ["Twilight Sparkle", "Fluttershy", "Applejack", "Pinkie Pie"]
			.map(|name| store.register_player(name, event).unwrap());
		let evening = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
		store
			.record_match_at(ids[2], ids[1], event, evening.and_hms_opt(19, 0, 0).unwrap())
			.unwrap();
		store
			.record_match_at(ids[0], ids[3], event, evening.and_hms_opt(19, 45, 0).unwrap())
			.unwrap();
		(store, event, ids)
	}

	#[test]
	fn standings_text_ranks_by_wins_then_id() {
		let (store, event, _) = after_one_round();

		assert_eq!(
			standings_string(&store, event).unwrap(),
			"# Standings\n```\n\
			 1: Twilight Sparkle (#1) — 1/1\n\
			 2: Applejack (#3) — 1/1\n\
			 3: Fluttershy (#2) — 0/1\n\
			 4: Pinkie Pie (#4) — 0/1\n\
			 ```\n"
		);
	}

	#[test]
	fn standings_csv_has_a_header_row() {
		let (store, event, _) = after_one_round();
		let mut out = Vec::new();
		write_standings_csv(&store, event, &mut out).unwrap();

		assert_eq!(
			String::from_utf8(out).unwrap(),
			"player_id,name,wins,matches_played\n\
			 1,Twilight Sparkle,1,1\n\
			 3,Applejack,1,1\n\
			 2,Fluttershy,0,1\n\
			 4,Pinkie Pie,0,1\n"
		);
	}

	#[test]
	fn pairings_text_lists_one_table_per_pair() {
		let (store, event, _) = after_one_round();

		assert_eq!(
			pairings_string(&store, event).unwrap(),
			"# Next round\n```\n\
			 1: Twilight Sparkle (#1) vs Applejack (#3)\n\
			 2: Fluttershy (#2) vs Pinkie Pie (#4)\n\
			 ```\n"
		);
	}

	#[test]
	fn history_text_lists_matches_oldest_first() {
		let (store, event, _) = after_one_round();

		assert_eq!(
			history_string(&store, event).unwrap(),
			"# Matches\n```\n\
			 2024-03-09 19:00: #3 beat #2\n\
			 2024-03-09 19:45: #1 beat #4\n\
			 ```\n"
		);
	}

	#[test]
	fn empty_event_renders_an_empty_block() {
		let store = SqliteStore::open_in_memory().unwrap();
		let event = store.create_event("Friendship Cup").unwrap();

		assert_eq!(standings_string(&store, event).unwrap(), "# Standings\n```\n```\n");
	}
}
