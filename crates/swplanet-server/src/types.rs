//! Request/Response types for the SWPlanet REST API.
//!
//! This module contains the data transfer objects used by the API handlers.

use serde::{Deserialize, Serialize};
use swplanet_core::{NewPlanet, Planet, PlanetTemplate};
use utoipa::{IntoParams, ToSchema};

// ============================================================================
// Planet Types
// ============================================================================

/// Request to create a planet.
///
/// Every field is optional at the wire level so that a missing `name` is
/// reported as a validation error instead of a body parse error.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreatePlanetRequest {
    /// Unique, non-empty planet name.
    #[schema(example = "Tatooine")]
    pub name: Option<String>,
    /// Climate description.
    #[schema(example = "arid")]
    pub climate: Option<String>,
    /// Terrain description.
    #[schema(example = "desert")]
    pub terrain: Option<String>,
}

impl From<CreatePlanetRequest> for NewPlanet {
    fn from(req: CreatePlanetRequest) -> Self {
        NewPlanet::new(
            req.name.unwrap_or_default(),
            req.climate.unwrap_or_default(),
            req.terrain.unwrap_or_default(),
        )
    }
}

/// A stored planet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PlanetResponse {
    /// Planet ID.
    #[schema(example = 1)]
    pub id: u64,
    /// Planet name.
    #[schema(example = "Tatooine")]
    pub name: String,
    /// Climate description.
    #[schema(example = "arid")]
    pub climate: String,
    /// Terrain description.
    #[schema(example = "desert")]
    pub terrain: String,
}

impl From<Planet> for PlanetResponse {
    fn from(planet: Planet) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            climate: planet.climate,
            terrain: planet.terrain,
        }
    }
}

/// Listing filters.
///
/// Omitted or empty parameters place no constraint on their field.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPlanetsParams {
    /// Only planets with exactly this terrain.
    #[param(example = "desert")]
    pub terrain: Option<String>,
    /// Only planets with exactly this climate.
    #[param(example = "arid")]
    pub climate: Option<String>,
}

impl From<ListPlanetsParams> for PlanetTemplate {
    fn from(params: ListPlanetsParams) -> Self {
        PlanetTemplate::new(params.climate, params.terrain)
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
    /// Stable error code (e.g., "SWP-002").
    #[schema(example = "SWP-002")]
    pub code: String,
}
