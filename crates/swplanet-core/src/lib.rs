//! # `SWPlanet` Core
//!
//! Planet catalog engine: entities, template-based filtering, repositories
//! and the service layer the REST server sits on.
//!
//! ## Features
//!
//! - **Template filtering**: sparse templates become AND-combined predicates
//! - **Exact by default**: substring and case-insensitive modes are opt-in
//! - **Two backends**: in-memory table or durable append-only log
//! - **Declared errors**: storage faults surface as validation, conflict or
//!   not-found kinds with stable codes
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use swplanet_core::{MemoryRepository, NewPlanet, PlanetService};
//!
//! let service = PlanetService::new(Arc::new(MemoryRepository::new()));
//! let tatooine = service.create(NewPlanet::new("Tatooine", "arid", "desert"))?;
//!
//! let found = service.list(Some("desert"), None)?;
//! assert_eq!(found, vec![tatooine]);
//! # Ok::<(), swplanet_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::manual_let_else)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod error;
pub mod filter;
#[cfg(test)]
mod filter_proptests;
pub mod planet;
pub mod service;
pub mod storage;

pub use config::{ConfigError, StorageMode, SwPlanetConfig};
pub use error::{Error, Result};
pub use filter::{Condition, MatchMode, Matcher, PlanetTemplate, Predicate};
pub use planet::{NewPlanet, Planet, PlanetField};
pub use service::PlanetService;
#[cfg(feature = "persistence")]
pub use storage::LogRepository;
pub use storage::{MemoryRepository, PlanetRepository, StorageError};
