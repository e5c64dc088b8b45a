//! Sparse filter templates.

use serde::{Deserialize, Serialize};

use crate::planet::PlanetField;

/// Listing constraints expressed as a partially populated planet.
///
/// Only `climate` and `terrain` can be constrained; id and name lookups go
/// through dedicated repository calls. A field is present iff it is `Some`
/// and non-empty. Whitespace is not trimmed, so `Some(" ")` is present.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanetTemplate {
    /// Expected climate.
    pub climate: Option<String>,
    /// Expected terrain.
    pub terrain: Option<String>,
}

impl PlanetTemplate {
    /// Creates a template from optional field values.
    #[must_use]
    pub fn new(climate: Option<String>, terrain: Option<String>) -> Self {
        Self { climate, terrain }
    }

    /// Returns the raw value of a field, present or not.
    #[must_use]
    pub fn raw(&self, field: PlanetField) -> Option<&str> {
        match field {
            PlanetField::Climate => self.climate.as_deref(),
            PlanetField::Terrain => self.terrain.as_deref(),
        }
    }

    /// Returns the value of a field if it counts as a constraint.
    #[must_use]
    pub fn get(&self, field: PlanetField) -> Option<&str> {
        self.raw(field).filter(|value| !value.is_empty())
    }

    /// Present fields in emission order.
    pub fn present_fields(&self) -> impl Iterator<Item = (PlanetField, &str)> + '_ {
        PlanetField::ALL
            .into_iter()
            .filter_map(move |field| self.get(field).map(|value| (field, value)))
    }

    /// Returns true if no field is present.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.present_fields().next().is_none()
    }
}
