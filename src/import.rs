use std::io;

use chrono::{NaiveDateTime, Utc};
use log::info;
use serde::Deserialize;

use crate::error::Result;
use crate::store::{EventId, PlayerId, TournamentStore};

/// One line of a match results file: `winner,loser[,date]`.
#[derive(Debug, Deserialize)]
pub struct MatchRecord {
	pub winner: PlayerId,
	pub loser: PlayerId,
	#[serde(default)]
	pub date: Option<NaiveDateTime>,
}

/// Records every match listed in a CSV file with a header row.
///
/// Rows without a date are stamped with the current time. Loading stops at
/// the first bad row; matches recorded before it are kept.
pub fn load_matches<S, R>(store: &S, event_id: EventId, reader: R) -> Result<usize>
where
	S: TournamentStore + ?Sized,
	R: io::Read,
{
	let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
	let mut count = 0;

	for record in rdr.deserialize() {
		let record: MatchRecord = record?;
		let played_at = record.date.unwrap_or_else(|| Utc::now().naive_utc());
		store.record_match_at(record.winner, record.loser, event_id, played_at)?;
		count += 1;
	}

	info!("loaded {count} matches into event {event_id}");
	Ok(count)
}
