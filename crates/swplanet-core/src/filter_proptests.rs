//! Property-based tests for template filtering.

use proptest::prelude::*;

use crate::filter::{Matcher, PlanetTemplate, Predicate};
use crate::planet::{NewPlanet, Planet, PlanetField};
use crate::storage::{MemoryRepository, PlanetRepository};

/// Small alphabets so random templates actually hit stored values.
fn climate_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["arid", "temperate", "frozen", "Arid", ""]).prop_map(String::from)
}

fn terrain_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["desert", "grasslands", "tundra", "Desert", ""])
        .prop_map(String::from)
}

fn catalog_strategy() -> impl Strategy<Value = Vec<Planet>> {
    prop::collection::vec((climate_strategy(), terrain_strategy()), 0..=24).prop_map(|rows| {
        rows.into_iter()
            .zip(1u64..)
            .map(|((climate, terrain), id)| {
                NewPlanet::new(format!("planet-{id}"), climate, terrain).with_id(id)
            })
            .collect()
    })
}

fn optional_value(values: Vec<&'static str>) -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(values).prop_map(String::from))
}

fn filter(catalog: &[Planet], predicate: &Predicate) -> Vec<u64> {
    catalog
        .iter()
        .filter(|p| predicate.matches(p))
        .map(|p| p.id)
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: an unconstrained template returns the whole catalog.
    #[test]
    fn prop_unconstrained_returns_everything(catalog in catalog_strategy()) {
        let predicate = Matcher::default().predicate(&PlanetTemplate::default());
        prop_assert_eq!(filter(&catalog, &predicate).len(), catalog.len());
    }

    /// Property: one present field selects exactly the equal values.
    #[test]
    fn prop_single_field_is_exact_equality(
        catalog in catalog_strategy(),
        climate in prop::sample::select(vec!["arid", "temperate", "frozen", "Arid"]),
    ) {
        let template = PlanetTemplate::new(Some(climate.to_string()), None);
        let predicate = Matcher::default().predicate(&template);

        let expected: Vec<u64> = catalog
            .iter()
            .filter(|p| p.climate == climate)
            .map(|p| p.id)
            .collect();
        prop_assert_eq!(filter(&catalog, &predicate), expected);
    }

    /// Property: two fields give the intersection of the single-field results.
    #[test]
    fn prop_two_fields_intersect(
        catalog in catalog_strategy(),
        climate in optional_value(vec!["arid", "temperate", "frozen", ""]),
        terrain in optional_value(vec!["desert", "grasslands", "tundra", ""]),
    ) {
        let matcher = Matcher::default();
        let both = matcher.predicate(&PlanetTemplate::new(climate.clone(), terrain.clone()));
        let by_climate = matcher.predicate(&PlanetTemplate::new(climate, None));
        let by_terrain = matcher.predicate(&PlanetTemplate::new(None, terrain));

        let climate_ids = filter(&catalog, &by_climate);
        let terrain_ids = filter(&catalog, &by_terrain);
        let intersection: Vec<u64> = climate_ids
            .into_iter()
            .filter(|id| terrain_ids.contains(id))
            .collect();

        prop_assert_eq!(filter(&catalog, &both), intersection);
    }

    /// Property: a predicate never contains more conditions than fields.
    #[test]
    fn prop_condition_count_equals_present_fields(
        climate in optional_value(vec!["arid", ""]),
        terrain in optional_value(vec!["desert", ""]),
    ) {
        let template = PlanetTemplate::new(climate, terrain);
        let predicate = Matcher::default().predicate(&template);

        prop_assert_eq!(predicate.conditions().len(), template.present_fields().count());
        prop_assert!(predicate.conditions().len() <= PlanetField::ALL.len());
    }

    /// Property: the repository returns what in-memory evaluation returns.
    #[test]
    fn prop_repository_agrees_with_predicate(
        catalog in catalog_strategy(),
        climate in optional_value(vec!["arid", "frozen"]),
        terrain in optional_value(vec!["desert", "tundra"]),
    ) {
        let repo = MemoryRepository::new();
        for planet in &catalog {
            let stored = repo
                .save(NewPlanet::new(planet.name.clone(), planet.climate.clone(), planet.terrain.clone()))
                .expect("save");
            prop_assert_eq!(stored.id, planet.id);
        }

        let predicate = Matcher::default().predicate(&PlanetTemplate::new(climate, terrain));
        let found: Vec<u64> = repo
            .find_all(&predicate)
            .expect("find_all")
            .into_iter()
            .map(|p| p.id)
            .collect();

        prop_assert_eq!(found, filter(&catalog, &predicate));
    }
}
