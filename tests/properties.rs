//! Property-based tests for registration counts, standings and pairings.

use proptest::prelude::*;
use swiss_tournament::{pair_standings, SqliteStore, Standing, TournamentStore};

// Strategy for an ordered list of standings with an even number of players
fn even_standings_strategy() -> impl Strategy<Value = Vec<Standing>> {
	(0usize..=16)
		.prop_flat_map(|half| prop::collection::vec(0u32..5, half * 2))
		.prop_map(|mut wins| {
			wins.sort_by(|a, b| b.cmp(a));
			wins.into_iter()
				.enumerate()
				.map(|(i, wins)| Standing {
					player_id: i as i64 + 1,
					name: format!("Player {}", i + 1),
					wins,
					matches_played: wins,
				})
				.collect()
		})
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(32))]

	#[test]
	fn count_matches_registrations(n in 0usize..40) {
		let store = SqliteStore::open_in_memory().unwrap();
		let event = store.create_event("Open").unwrap();
		for i in 0..n {
			store.register_player(&format!("Player {i}"), event).unwrap();
		}

		prop_assert_eq!(store.count_players(event).unwrap(), n);

		store.delete_players().unwrap();
		prop_assert_eq!(store.count_players(event).unwrap(), 0);
	}

	#[test]
	fn every_player_is_paired_once_with_a_neighbour(standings in even_standings_strategy()) {
		let pairings = pair_standings(&standings).unwrap();
		prop_assert_eq!(pairings.len(), standings.len() / 2);

		for (i, pairing) in pairings.iter().enumerate() {
			prop_assert_eq!(pairing.id1, standings[2 * i].player_id);
			prop_assert_eq!(pairing.id2, standings[2 * i + 1].player_id);
			prop_assert!(standings[2 * i].wins >= standings[2 * i + 1].wins);
		}
	}

	#[test]
	fn standings_follow_the_match_log(
		results in prop::collection::vec((0usize..6, 0usize..6), 0..20)
	) {
		let store = SqliteStore::open_in_memory().unwrap();
		let event = store.create_event("Open").unwrap();
		let ids: Vec<_> = (0..6)
			.map(|i| store.register_player(&format!("Player {i}"), event).unwrap())
			.collect();

		let mut wins = [0u32; 6];
		let mut played = [0u32; 6];
		for (winner, loser) in results.into_iter().filter(|(w, l)| w != l) {
			store.record_match(ids[winner], ids[loser], event).unwrap();
			wins[winner] += 1;
			played[winner] += 1;
			played[loser] += 1;
		}

		let standings = store.standings(event).unwrap();
		prop_assert_eq!(standings.len(), 6);
		for pair in standings.windows(2) {
			prop_assert!(pair[0].wins >= pair[1].wins);
		}
		for standing in standings {
			let i = ids.iter().position(|&id| id == standing.player_id).unwrap();
			prop_assert_eq!(standing.wins, wins[i]);
			prop_assert_eq!(standing.matches_played, played[i]);
		}
	}
}
