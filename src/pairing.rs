use log::debug;

use crate::error::{Result, TournamentError};
use crate::store::{EventId, PlayerId, Standing, TournamentStore};

/// Two players meeting in the next round, in standings order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
	pub id1: PlayerId,
	pub name1: String,
	pub id2: PlayerId,
	pub name2: String,
}

/// Pairs adjacent players of already ordered standings: first with second,
/// third with fourth, and so on.
///
/// There is no bye, so an odd number of players is rejected. Earlier
/// meetings between the same two players are not taken into account.
pub fn pair_standings(standings: &[Standing]) -> Result<Vec<Pairing>> {
	if standings.len() % 2 != 0 {
		return Err(TournamentError::OddPlayerCount(standings.len()));
	}

	Ok(standings
		.chunks_exact(2)
		.map(|pair| Pairing {
			id1: pair[0].player_id,
			name1: pair[0].name.clone(),
			id2: pair[1].player_id,
			name2: pair[1].name.clone(),
		})
		.collect())
}

/// Pairings for the next round of an event, built from its current standings.
pub fn swiss_pairings<S>(store: &S, event_id: EventId) -> Result<Vec<Pairing>>
where
	S: TournamentStore + ?Sized,
{
	let standings = store.standings(event_id)?;
	let pairings = pair_standings(&standings)?;
	debug!("paired {} players of event {event_id}", standings.len());

	Ok(pairings)
}
