//! Predicate construction from templates.

use serde::{Deserialize, Serialize};

use super::{Condition, MatchMode, PlanetTemplate, Predicate};
use crate::planet::PlanetField;

/// Builds predicates from templates.
///
/// Holds one [`MatchMode`] per filterable field. The default matcher uses
/// [`MatchMode::Exact`] for every field and never changes the case of either
/// side, so case sensitivity is whatever the stored bytes say.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Matcher {
    /// Mode used for `climate` conditions.
    pub climate: MatchMode,
    /// Mode used for `terrain` conditions.
    pub terrain: MatchMode,
}

impl Matcher {
    /// Creates a matcher with exact matching on every field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy using `mode` for `field`.
    #[must_use]
    pub fn with_mode(mut self, field: PlanetField, mode: MatchMode) -> Self {
        match field {
            PlanetField::Climate => self.climate = mode,
            PlanetField::Terrain => self.terrain = mode,
        }
        self
    }

    /// Mode used for `field`.
    #[must_use]
    pub fn mode(&self, field: PlanetField) -> MatchMode {
        match field {
            PlanetField::Climate => self.climate,
            PlanetField::Terrain => self.terrain,
        }
    }

    /// Builds the predicate for a template.
    ///
    /// Emits one condition per present field, climate before terrain. A
    /// template with no present field yields [`Predicate::all`].
    #[must_use]
    pub fn predicate(&self, template: &PlanetTemplate) -> Predicate {
        template
            .present_fields()
            .fold(Predicate::all(), |predicate, (field, value)| {
                predicate.and(Condition::new(field, self.mode(field), value))
            })
    }
}
