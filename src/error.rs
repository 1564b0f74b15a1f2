use rusqlite::{ffi, ErrorCode};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TournamentError>;

#[derive(Debug, Error)]
pub enum TournamentError {
	/// The database could not be opened or is held by another connection.
	#[error("could not reach the tournament database: {0}")]
	ConnectionFailure(#[source] rusqlite::Error),

	#[error("{0} not found")]
	NotFound(String),

	/// A unique constraint rejected the write, e.g. a second event with the same name.
	#[error("duplicate key: {0}")]
	DuplicateKey(String),

	/// A check or foreign key constraint rejected the write.
	#[error("constraint violation: {0}")]
	ConstraintViolation(String),

	#[error("cannot pair an odd number of players ({0}), byes are not supported")]
	OddPlayerCount(usize),

	#[error("malformed match file: {0}")]
	Csv(#[from] csv::Error),

	#[error("database error: {0}")]
	Database(rusqlite::Error),
}

impl From<rusqlite::Error> for TournamentError {
	fn from(err: rusqlite::Error) -> Self {
		let (code, extended_code, detail) = match &err {
			rusqlite::Error::SqliteFailure(e, msg) => (
				e.code,
				e.extended_code,
				msg.clone().unwrap_or_else(|| e.to_string()),
			),
			rusqlite::Error::QueryReturnedNoRows => return Self::NotFound("row".to_owned()),
			_ => return Self::Database(err),
		};

		match code {
			ErrorCode::ConstraintViolation => match extended_code {
				ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
					Self::DuplicateKey(detail)
				}
				_ => Self::ConstraintViolation(detail),
			},
			ErrorCode::CannotOpen
			| ErrorCode::NotADatabase
			| ErrorCode::PermissionDenied
			| ErrorCode::DatabaseBusy
			| ErrorCode::DatabaseLocked => Self::ConnectionFailure(err),
			_ => Self::Database(err),
		}
	}
}
