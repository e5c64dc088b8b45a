//! Predicate evaluation against stored planets.

use super::{Condition, MatchMode, Predicate};
use crate::planet::Planet;

impl MatchMode {
    /// Compares a stored value with an expected one.
    #[must_use]
    pub fn compare(self, stored: &str, expected: &str) -> bool {
        match self {
            Self::Exact => stored == expected,
            Self::ExactIgnoreCase => stored.to_lowercase() == expected.to_lowercase(),
            Self::Contains => stored.contains(expected),
            Self::ContainsIgnoreCase => stored
                .to_lowercase()
                .contains(expected.to_lowercase().as_str()),
        }
    }
}

impl Condition {
    /// Evaluates the condition against a planet.
    #[must_use]
    pub fn matches(&self, planet: &Planet) -> bool {
        self.mode.compare(planet.field(self.field), &self.value)
    }
}

impl Predicate {
    /// Evaluates the conjunction against a planet.
    ///
    /// Returns `true` for every planet when there are no conditions.
    #[must_use]
    pub fn matches(&self, planet: &Planet) -> bool {
        self.conditions().iter().all(|c| c.matches(planet))
    }
}
