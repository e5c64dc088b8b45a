//! Template-based filtering for planet listings.
//!
//! A listing request arrives as a sparse [`PlanetTemplate`]. The [`Matcher`]
//! turns it into a [`Predicate`]: one [`Condition`] per populated field,
//! AND-combined. Repositories execute the predicate with
//! [`Predicate::matches`].
//!
//! ## Usage
//!
//! ```rust
//! use swplanet_core::filter::{Matcher, PlanetTemplate};
//! use swplanet_core::NewPlanet;
//!
//! let template = PlanetTemplate::new(Some("arid".into()), None);
//! let predicate = Matcher::default().predicate(&template);
//!
//! let tatooine = NewPlanet::new("Tatooine", "arid", "desert").with_id(1);
//! let hoth = NewPlanet::new("Hoth", "frozen", "tundra").with_id(3);
//! assert!(predicate.matches(&tatooine));
//! assert!(!predicate.matches(&hoth));
//! ```

mod matcher;
mod matching;
mod template;

pub use matcher::Matcher;
pub use template::PlanetTemplate;

use serde::{Deserialize, Serialize};

use crate::planet::PlanetField;

/// How a condition compares a stored value with the expected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Byte-for-byte equality (default).
    #[default]
    Exact,
    /// Equality after lowercasing both sides.
    ExactIgnoreCase,
    /// Stored value contains the expected value.
    Contains,
    /// Substring match after lowercasing both sides.
    ContainsIgnoreCase,
}

/// A single field-level condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// Field the condition reads.
    pub field: PlanetField,
    /// Comparison mode.
    pub mode: MatchMode,
    /// Expected value.
    pub value: String,
}

impl Condition {
    /// Creates a condition with an explicit comparison mode.
    #[must_use]
    pub fn new(field: PlanetField, mode: MatchMode, value: impl Into<String>) -> Self {
        Self {
            field,
            mode,
            value: value.into(),
        }
    }

    /// Creates an exact equality condition.
    #[must_use]
    pub fn eq(field: PlanetField, value: impl Into<String>) -> Self {
        Self::new(field, MatchMode::Exact, value)
    }
}

/// Conjunction of field conditions.
///
/// An empty predicate matches every planet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Predicate {
    conditions: Vec<Condition>,
}

impl Predicate {
    /// Predicate with no conditions.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Appends a condition to the conjunction.
    #[must_use]
    pub fn and(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Conditions in emission order.
    #[must_use]
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Returns true if the predicate places no constraint on results.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.conditions.is_empty()
    }
}
