//! In-memory planet table shared by the storage backends.

use std::collections::{BTreeMap, HashMap};

use super::{StorageError, StorageResult};
use crate::filter::Predicate;
use crate::planet::{NewPlanet, Planet};

/// Rows keyed by id, plus a unique index on `name`.
///
/// Ids come from a monotonic sequence starting at 1 and are never reused,
/// even after deletes.
#[derive(Debug)]
pub(crate) struct Table {
    rows: BTreeMap<u64, Planet>,
    names: HashMap<String, u64>,
    next_id: u64,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            names: HashMap::new(),
            next_id: 1,
        }
    }
}

impl Table {
    /// Checks the unique index and returns the id the row would get.
    pub(crate) fn reserve(&self, planet: &NewPlanet) -> StorageResult<u64> {
        if self.names.contains_key(&planet.name) {
            return Err(StorageError::UniqueViolation {
                column: "name",
                value: planet.name.clone(),
            });
        }
        Ok(self.next_id)
    }

    /// Inserts a new row, assigning the next id.
    pub(crate) fn insert(&mut self, planet: NewPlanet) -> StorageResult<Planet> {
        let id = self.reserve(&planet)?;
        let planet = planet.with_id(id);
        self.put(planet.clone());
        Ok(planet)
    }

    /// Writes a row with a known id, advancing the sequence past it.
    ///
    /// Used on log replay, where uniqueness was checked at write time.
    pub(crate) fn put(&mut self, planet: Planet) {
        self.next_id = self.next_id.max(planet.id.saturating_add(1));
        if let Some(previous) = self.rows.get(&planet.id) {
            self.names.remove(&previous.name);
        }
        self.names.insert(planet.name.clone(), planet.id);
        self.rows.insert(planet.id, planet);
    }

    /// Removes a row.
    pub(crate) fn remove(&mut self, id: u64) -> StorageResult<Planet> {
        let planet = self.rows.remove(&id).ok_or(StorageError::RowNotFound(id))?;
        self.names.remove(&planet.name);
        Ok(planet)
    }

    pub(crate) fn contains(&self, id: u64) -> bool {
        self.rows.contains_key(&id)
    }

    pub(crate) fn get(&self, id: u64) -> Option<&Planet> {
        self.rows.get(&id)
    }

    pub(crate) fn get_by_name(&self, name: &str) -> Option<&Planet> {
        self.names.get(name).and_then(|id| self.rows.get(id))
    }

    /// Rows matching `predicate`, in ascending id order.
    pub(crate) fn scan(&self, predicate: &Predicate) -> Vec<Planet> {
        self.rows
            .values()
            .filter(|planet| predicate.matches(planet))
            .cloned()
            .collect()
    }

    pub(crate) fn rows(&self) -> impl Iterator<Item = &Planet> {
        self.rows.values()
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Moves the sequence forward, never backward.
    pub(crate) fn advance_sequence(&mut self, next_id: u64) {
        self.next_id = self.next_id.max(next_id);
    }
}
