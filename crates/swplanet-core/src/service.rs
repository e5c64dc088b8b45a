//! Planet service: validation, filtering and error translation.
//!
//! The service is the only layer that talks to a [`PlanetRepository`]. It
//! checks request shape before anything reaches storage, builds listing
//! predicates with the configured [`Matcher`], and converts
//! [`StorageError`](crate::storage::StorageError)s into [`Error`] kinds.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::filter::{Matcher, PlanetTemplate};
use crate::planet::{NewPlanet, Planet};
use crate::storage::PlanetRepository;

/// Stateless orchestration over a repository.
#[derive(Clone)]
pub struct PlanetService {
    repository: Arc<dyn PlanetRepository>,
    matcher: Matcher,
}

impl PlanetService {
    /// Creates a service with exact matching on every field.
    #[must_use]
    pub fn new(repository: Arc<dyn PlanetRepository>) -> Self {
        Self::with_matcher(repository, Matcher::default())
    }

    /// Creates a service using `matcher` for listings.
    #[must_use]
    pub fn with_matcher(repository: Arc<dyn PlanetRepository>, matcher: Matcher) -> Self {
        Self {
            repository,
            matcher,
        }
    }

    /// Matcher used for listings.
    #[must_use]
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Persists a new planet.
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`] if `name` is empty
    /// - [`Error::Conflict`] if a planet with the same name exists
    pub fn create(&self, planet: NewPlanet) -> Result<Planet> {
        if planet.name.is_empty() {
            tracing::warn!("Rejected planet with empty name");
            return Err(Error::Validation("name must not be empty".to_string()));
        }

        match self.repository.save(planet) {
            Ok(planet) => {
                tracing::info!(id = planet.id, name = %planet.name, "Created planet");
                Ok(planet)
            }
            Err(e) => {
                let err = Error::from(e);
                tracing::warn!(error = %err, "Failed to create planet");
                Err(err)
            }
        }
    }

    /// Looks a planet up by id.
    pub fn get(&self, id: u64) -> Result<Option<Planet>> {
        tracing::debug!(id, "Get planet");
        Ok(self.repository.find_by_id(id)?)
    }

    /// Looks a planet up by exact name.
    pub fn get_by_name(&self, name: &str) -> Result<Option<Planet>> {
        tracing::debug!(name, "Get planet by name");
        Ok(self.repository.find_by_name(name)?)
    }

    /// Lists planets matching the given terrain and climate.
    ///
    /// `None` and empty strings place no constraint on their field.
    pub fn list(&self, terrain: Option<&str>, climate: Option<&str>) -> Result<Vec<Planet>> {
        let template = PlanetTemplate::new(climate.map(str::to_owned), terrain.map(str::to_owned));
        self.list_by_template(&template)
    }

    /// Lists planets matching a template.
    pub fn list_by_template(&self, template: &PlanetTemplate) -> Result<Vec<Planet>> {
        let predicate = self.matcher.predicate(template);
        let planets = self.repository.find_all(&predicate)?;
        tracing::debug!(
            conditions = predicate.conditions().len(),
            results = planets.len(),
            "Listed planets"
        );
        Ok(planets)
    }

    /// Deletes a planet.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no planet has that id.
    pub fn remove(&self, id: u64) -> Result<()> {
        self.repository.delete_by_id(id)?;
        tracing::info!(id, "Removed planet");
        Ok(())
    }

    /// Number of stored planets.
    pub fn count(&self) -> Result<usize> {
        Ok(self.repository.count()?)
    }
}
