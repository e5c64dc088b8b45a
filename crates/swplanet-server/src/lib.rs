#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::unused_async)]
#![allow(clippy::needless_for_each)]
//! `SWPlanet` Server - REST API library for the planet catalog.
//!
//! This module provides the HTTP handlers, types and router for the
//! `SWPlanet` REST API.
//!
//! ## OpenAPI Documentation
//!
//! The API is documented using OpenAPI 3.0. Access the interactive documentation at:
//! - Swagger UI: `GET /swagger-ui`
//! - OpenAPI JSON: `GET /api-docs/openapi.json`

mod error;
mod handlers;
mod types;

use axum::{routing::get, Router};
use std::sync::Arc;
use swplanet_core::{
    LogRepository, MemoryRepository, PlanetRepository, PlanetService, StorageMode, SwPlanetConfig,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use error::ApiError;
pub use types::*;

// Re-export handlers for routing
pub use handlers::{
    create_planet, delete_planet, get_planet, get_planet_by_name, health_check, list_planets,
};

// ============================================================================
// OpenAPI Documentation
// ============================================================================

/// SWPlanet API Documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "SWPlanet API",
        version = "0.1.0",
        description = "Planet catalog service. Create, look up, filter and delete planets.",
        license(name = "MIT")
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "planets", description = "Planet management and filtered listing")
    ),
    paths(
        handlers::health::health_check,
        handlers::planets::create_planet,
        handlers::planets::get_planet,
        handlers::planets::get_planet_by_name,
        handlers::planets::list_planets,
        handlers::planets::delete_planet
    ),
    components(
        schemas(
            CreatePlanetRequest,
            PlanetResponse,
            ErrorResponse
        )
    )
)]
pub struct ApiDoc;

// ============================================================================
// Application State
// ============================================================================

/// Application state shared across handlers.
pub struct AppState {
    /// Planet service.
    pub service: PlanetService,
    /// Backend the service runs on, reported by `/health`.
    pub storage_mode: StorageMode,
}

impl AppState {
    /// Builds the state over an in-memory repository.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            service: PlanetService::new(Arc::new(MemoryRepository::new())),
            storage_mode: StorageMode::Memory,
        }
    }

    /// Builds the state described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the log repository cannot be opened.
    pub fn from_config(config: &SwPlanetConfig) -> swplanet_core::Result<Self> {
        let repository: Arc<dyn PlanetRepository> = match config.storage.storage_mode {
            StorageMode::Log => Arc::new(LogRepository::open(&config.storage.data_dir)?),
            StorageMode::Memory => Arc::new(MemoryRepository::new()),
        };

        Ok(Self {
            service: PlanetService::with_matcher(repository, config.filter),
            storage_mode: config.storage.storage_mode,
        })
    }
}

// ============================================================================
// Router
// ============================================================================

/// Builds the API router with its state.
pub fn api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/planets", get(list_planets).post(create_planet))
        .route("/planets/{id}", get(get_planet).delete(delete_planet))
        .route("/planets/name/{name}", get(get_planet_by_name))
        .with_state(state)
}

/// Builds the API router merged with the Swagger UI.
pub fn app(state: Arc<AppState>) -> Router {
    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi());

    api_router(state).merge(swagger_ui)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use swplanet_core::{NewPlanet, PlanetTemplate};
    use utoipa::OpenApi;

    #[test]
    fn test_openapi_spec_generation() {
        let openapi = ApiDoc::openapi();
        let json = openapi.to_json().expect("Failed to serialize OpenAPI spec");
        assert!(!json.is_empty(), "OpenAPI spec should not be empty");
        assert!(json.contains("SWPlanet API"), "Should contain API title");
        assert!(json.contains("0.1.0"), "Should contain version");
    }

    #[test]
    fn test_openapi_has_all_endpoints() {
        let openapi = ApiDoc::openapi();
        let json = openapi.to_json().expect("Failed to serialize OpenAPI spec");
        assert!(json.contains("/health"), "Should document /health");
        assert!(json.contains("\"/planets\""), "Should document /planets");
        assert!(
            json.contains(r"/planets/{id}"),
            "Should document planets by id"
        );
        assert!(
            json.contains(r"/planets/name/{name}"),
            "Should document planets by name"
        );
    }

    #[test]
    fn test_openapi_documents_list_filters() {
        let openapi = ApiDoc::openapi();
        let json = openapi.to_json().expect("Failed to serialize OpenAPI spec");
        assert!(json.contains("terrain"), "Should document terrain filter");
        assert!(json.contains("climate"), "Should document climate filter");
    }

    #[test]
    fn test_openapi_has_schemas() {
        let openapi = ApiDoc::openapi();
        let json = openapi.to_json().expect("Failed to serialize OpenAPI spec");
        assert!(json.contains("CreatePlanetRequest"));
        assert!(json.contains("PlanetResponse"));
        assert!(json.contains("ErrorResponse"));
    }

    #[test]
    fn test_create_planet_request_missing_fields() {
        let req: CreatePlanetRequest = serde_json::from_str("{}").unwrap();
        let planet = NewPlanet::from(req);
        assert_eq!(planet, NewPlanet::default());
    }

    #[test]
    fn test_create_planet_request_full() {
        let json = r#"{"name": "Hoth", "climate": "frozen", "terrain": "tundra"}"#;
        let req: CreatePlanetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(NewPlanet::from(req), NewPlanet::new("Hoth", "frozen", "tundra"));
    }

    #[test]
    fn test_list_params_into_template() {
        let params = ListPlanetsParams {
            terrain: Some("desert".to_string()),
            climate: None,
        };
        let template = PlanetTemplate::from(params);
        assert_eq!(template.terrain.as_deref(), Some("desert"));
        assert_eq!(template.climate, None);
    }

    #[test]
    fn test_planet_response_serialize() {
        let resp = PlanetResponse::from(NewPlanet::new("Tatooine", "arid", "desert").with_id(1));
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"id\":1"));
        assert!(json.contains("\"name\":\"Tatooine\""));
        assert!(json.contains("\"climate\":\"arid\""));
        assert!(json.contains("\"terrain\":\"desert\""));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse {
            error: "Test error".to_string(),
            code: "SWP-001".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"error\":\"Test error\""));
        assert!(json.contains("\"code\":\"SWP-001\""));
    }

    #[test]
    fn test_api_error_status_mapping() {
        use axum::http::StatusCode;
        use swplanet_core::Error;

        assert_eq!(
            ApiError(Error::Validation("x".into())).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError(Error::Conflict("x".into())).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(ApiError(Error::NotFound(1)).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError(Error::Storage("x".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_failed_blocking_task_is_internal_error() {
        use axum::http::StatusCode;

        let join_error = tokio::task::spawn_blocking(|| {
            panic!("service call panicked");
        })
        .await
        .expect_err("task should panic");

        let err = ApiError::from(join_error);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.0.code(), "SWP-004");
    }

    #[test]
    fn test_app_state_from_memory_config() {
        let mut config = SwPlanetConfig::default();
        config.storage.storage_mode = StorageMode::Memory;

        let state = AppState::from_config(&config).expect("state");

        assert_eq!(state.storage_mode, StorageMode::Memory);
        assert_eq!(state.service.count().expect("count"), 0);
    }

    #[test]
    fn test_app_state_from_log_config() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let mut config = SwPlanetConfig::default();
        config.storage.data_dir = dir.path().to_string_lossy().into_owned();

        let state = AppState::from_config(&config).expect("state");

        assert_eq!(state.storage_mode, StorageMode::Log);
        assert!(dir.path().join("planets.log").exists());
    }
}
