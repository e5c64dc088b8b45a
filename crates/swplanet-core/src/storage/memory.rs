//! Volatile in-memory repository.

use parking_lot::RwLock;

use super::table::Table;
use super::{PlanetRepository, StorageResult};
use crate::filter::Predicate;
use crate::planet::{NewPlanet, Planet};

/// Repository that keeps every planet in memory.
///
/// Contents are lost when the value is dropped. Useful for tests and for
/// running the server without a data directory.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    table: RwLock<Table>,
}

impl MemoryRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlanetRepository for MemoryRepository {
    fn save(&self, planet: NewPlanet) -> StorageResult<Planet> {
        self.table.write().insert(planet)
    }

    fn find_by_id(&self, id: u64) -> StorageResult<Option<Planet>> {
        Ok(self.table.read().get(id).cloned())
    }

    fn find_by_name(&self, name: &str) -> StorageResult<Option<Planet>> {
        Ok(self.table.read().get_by_name(name).cloned())
    }

    fn find_all(&self, predicate: &Predicate) -> StorageResult<Vec<Planet>> {
        Ok(self.table.read().scan(predicate))
    }

    fn delete_by_id(&self, id: u64) -> StorageResult<()> {
        self.table.write().remove(id).map(|_| ())
    }

    fn count(&self) -> StorageResult<usize> {
        Ok(self.table.read().len())
    }
}
