//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the durable key-value slot contract and its SQLite backing.
//! - Encode/decode the full geotification sequence as one preferences blob.
//!
//! # Invariants
//! - Every save replaces the entire blob; there are no partial writes.
//! - Read paths reject undecodable persisted state (`InvalidData`) instead
//!   of masking it; degrading to an empty sequence is a store-layer policy.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod geotification_repo;
pub mod preferences_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for preference-slot persistence.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
