use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use swiss_tournament::PlayerId;

#[derive(Parser)]
#[command(author, version, about = "Run a Swiss-system tournament", long_about = None)]
pub struct Cli {
	#[arg(long, value_name = "FILE", env = "TOURNAMENT_DB", default_value = "tournament.db")]
	pub database: PathBuf,

	#[arg(short, long, value_name = "FILE")]
	pub output: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
	CreateEvent {
		name: String,
	},
	Register {
		event: String,
		name: String,
	},
	Count {
		event: String,
	},
	Report {
		event: String,
		winner: PlayerId,
		loser: PlayerId,
	},
	Load {
		event: String,
		#[arg(value_name = "FILE")]
		matches: PathBuf,
	},
	Standings {
		event: String,
		#[arg(long, value_enum, default_value_t = Format::Text)]
		format: Format,
	},
	Pairings {
		event: String,
	},
	History {
		event: String,
	},
	Clear {
		#[arg(value_enum)]
		what: Table,
	},
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Format {
	Text,
	Csv,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Table {
	Events,
	Players,
	Matches,
}
