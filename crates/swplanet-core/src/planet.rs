//! Planet entity types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A persisted catalog record.
///
/// `id` is assigned by the repository on insert and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    /// Repository-assigned identifier.
    pub id: u64,
    /// Unique, non-empty name.
    pub name: String,
    /// Climate description, may be empty.
    #[serde(default)]
    pub climate: String,
    /// Terrain description, may be empty.
    #[serde(default)]
    pub terrain: String,
}

impl Planet {
    /// Returns the value of a filterable field.
    #[must_use]
    pub fn field(&self, field: PlanetField) -> &str {
        match field {
            PlanetField::Climate => &self.climate,
            PlanetField::Terrain => &self.terrain,
        }
    }
}

/// A planet that has not been persisted yet, so it has no id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewPlanet {
    /// Unique, non-empty name.
    pub name: String,
    /// Climate description, may be empty.
    #[serde(default)]
    pub climate: String,
    /// Terrain description, may be empty.
    #[serde(default)]
    pub terrain: String,
}

impl NewPlanet {
    /// Creates a new unsaved planet.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        climate: impl Into<String>,
        terrain: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            climate: climate.into(),
            terrain: terrain.into(),
        }
    }

    /// Attaches a repository-assigned id.
    #[must_use]
    pub fn with_id(self, id: u64) -> Planet {
        Planet {
            id,
            name: self.name,
            climate: self.climate,
            terrain: self.terrain,
        }
    }
}

/// Fields a listing may filter on.
///
/// Declaration order is the order conditions are emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanetField {
    /// `climate` column.
    Climate,
    /// `terrain` column.
    Terrain,
}

impl PlanetField {
    /// All filterable fields, in emission order.
    pub const ALL: [PlanetField; 2] = [PlanetField::Climate, PlanetField::Terrain];

    /// Column name as exposed in the API and in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Climate => "climate",
            Self::Terrain => "terrain",
        }
    }
}

impl fmt::Display for PlanetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
