//! HTTP handlers for the SWPlanet REST API.
//!
//! - `health`: Health check endpoint
//! - `planets`: Planet CRUD and filtered listing

pub mod health;
pub mod planets;

pub use health::health_check;
pub use planets::{create_planet, delete_planet, get_planet, get_planet_by_name, list_planets};
