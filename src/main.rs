mod cli;

use std::{
	fs::File,
	io::{self, Write},
};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, Format, Table};
use log::info;
use swiss_tournament::{import, render, SqliteStore, TournamentStore};

fn main() -> Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let cli = Cli::parse();

	let store = SqliteStore::open(&cli.database)
		.with_context(|| format!("could not open {}", cli.database.display()))?;

	let mut out = match cli.output.as_deref() {
		Some(path) => Box::new(
			File::create(path).with_context(|| format!("could not create {}", path.display()))?,
		) as Box<dyn Write>,
		None => Box::new(io::stdout()) as Box<dyn Write>,
	};

	match cli.command {
		Commands::CreateEvent { name } => {
			let id = store.create_event(&name)?;
			info!("created event {name:?}");
			writeln!(out, "{id}")?;
		}
		Commands::Register { event, name } => {
			let event_id = store.event_id(&event)?;
			let id = store.register_player(&name, event_id)?;
			writeln!(out, "{id}")?;
		}
		Commands::Count { event } => {
			let event_id = store.event_id(&event)?;
			writeln!(out, "{}", store.count_players(event_id)?)?;
		}
		Commands::Report { event, winner, loser } => {
			let event_id = store.event_id(&event)?;
			let id = store.record_match(winner, loser, event_id)?;
			writeln!(out, "{id}")?;
		}
		Commands::Load { event, matches } => {
			let event_id = store.event_id(&event)?;
			let file = File::open(&matches)
				.with_context(|| format!("could not read {}", matches.display()))?;
			let count = import::load_matches(&store, event_id, file)?;
			writeln!(out, "{count}")?;
		}
		Commands::Standings { event, format } => {
			let event_id = store.event_id(&event)?;
			match format {
				Format::Text => {
					out.write_all(render::standings_string(&store, event_id)?.as_bytes())?
				}
				Format::Csv => render::write_standings_csv(&store, event_id, &mut out)?,
			}
		}
		Commands::Pairings { event } => {
			let event_id = store.event_id(&event)?;
			out.write_all(render::pairings_string(&store, event_id)?.as_bytes())?;
		}
		Commands::History { event } => {
			let event_id = store.event_id(&event)?;
			out.write_all(render::history_string(&store, event_id)?.as_bytes())?;
		}
		Commands::Clear { what } => {
			let removed = match what {
				Table::Events => store.delete_events()?,
				Table::Players => store.delete_players()?,
				Table::Matches => store.delete_matches()?,
			};
			writeln!(out, "{removed}")?;
		}
	}

	Ok(())
}
