//! Storage backends for the planet catalog.
//!
//! # Public Types
//!
//! - [`PlanetRepository`]: Repository trait every backend implements
//! - [`MemoryRepository`]: Volatile in-memory table
//! - [`LogRepository`]: Durable log-structured table (feature `persistence`)
//! - [`StorageError`]: Backend-level errors, translated by the service

#[cfg(feature = "persistence")]
mod log;
mod memory;
mod table;


#[cfg(feature = "persistence")]
pub use log::LogRepository;
pub use memory::MemoryRepository;

use thiserror::Error;

use crate::filter::Predicate;
use crate::planet::{NewPlanet, Planet};

/// Result type alias for repository operations.
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Errors reported by storage backends.
#[derive(Error, Debug)]
pub enum StorageError {
    /// A unique column already holds the value.
    #[error("Unique constraint violated on '{column}': '{value}'")]
    UniqueViolation {
        /// Constrained column.
        column: &'static str,
        /// Offending value.
        value: String,
    },

    /// No row has the requested id.
    #[error("Row {0} not found")]
    RowNotFound(u64),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The on-disk log cannot be replayed.
    #[error("Log corrupted: {0}")]
    Corrupted(String),

    /// A row could not be encoded or decoded.
    #[error("Encoding error: {0}")]
    Encoding(String),
}

/// Persistence contract consumed by the service layer.
///
/// Implementations must make the name uniqueness check and the insert atomic
/// with respect to concurrent `save` calls.
pub trait PlanetRepository: Send + Sync {
    /// Inserts a planet and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// [`StorageError::UniqueViolation`] if the name is taken.
    fn save(&self, planet: NewPlanet) -> StorageResult<Planet>;

    /// Looks a planet up by id.
    fn find_by_id(&self, id: u64) -> StorageResult<Option<Planet>>;

    /// Looks a planet up by exact name.
    fn find_by_name(&self, name: &str) -> StorageResult<Option<Planet>>;

    /// Returns every planet matching `predicate`, in ascending id order.
    fn find_all(&self, predicate: &Predicate) -> StorageResult<Vec<Planet>>;

    /// Deletes a planet.
    ///
    /// # Errors
    ///
    /// [`StorageError::RowNotFound`] if no planet has that id.
    fn delete_by_id(&self, id: u64) -> StorageResult<()>;

    /// Number of stored planets.
    fn count(&self) -> StorageResult<usize>;
}
