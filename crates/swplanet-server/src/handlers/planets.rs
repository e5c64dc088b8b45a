//! Planet CRUD and listing handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use swplanet_core::{Error, NewPlanet, PlanetService, PlanetTemplate};

use crate::error::{not_found, ApiError};
use crate::types::{CreatePlanetRequest, ErrorResponse, ListPlanetsParams, PlanetResponse};
use crate::AppState;

/// Runs a service call on the blocking pool.
///
/// Log-backed repositories write and sync files under their table lock.
async fn run_blocking<T, F>(state: &AppState, call: F) -> Result<T, ApiError>
where
    F: FnOnce(PlanetService) -> swplanet_core::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let service = state.service.clone();
    tokio::task::spawn_blocking(move || call(service))
        .await?
        .map_err(ApiError)
}

/// Create a planet.
#[utoipa::path(
    post,
    path = "/planets",
    tag = "planets",
    request_body = CreatePlanetRequest,
    responses(
        (status = 201, description = "Planet created", body = PlanetResponse),
        (status = 409, description = "A planet with this name exists", body = ErrorResponse),
        (status = 422, description = "Name is missing or empty", body = ErrorResponse)
    )
)]
pub async fn create_planet(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreatePlanetRequest>,
) -> impl IntoResponse {
    let planet = NewPlanet::from(req);
    match run_blocking(&state, move |service| service.create(planet)).await {
        Ok(planet) => (StatusCode::CREATED, Json(PlanetResponse::from(planet))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a planet by ID.
#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = "planets",
    params(
        ("id" = u64, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Planet found", body = PlanetResponse),
        (status = 404, description = "Planet not found", body = ErrorResponse)
    )
)]
pub async fn get_planet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> impl IntoResponse {
    match run_blocking(&state, move |service| service.get(id)).await {
        Ok(Some(planet)) => Json(PlanetResponse::from(planet)).into_response(),
        Ok(None) => not_found(format!("Planet {} not found", id)),
        Err(e) => e.into_response(),
    }
}

/// Get a planet by exact name.
#[utoipa::path(
    get,
    path = "/planets/name/{name}",
    tag = "planets",
    params(
        ("name" = String, Path, description = "Planet name, matched exactly")
    ),
    responses(
        (status = 200, description = "Planet found", body = PlanetResponse),
        (status = 404, description = "Planet not found", body = ErrorResponse)
    )
)]
pub async fn get_planet_by_name(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    let lookup = name.clone();
    match run_blocking(&state, move |service| service.get_by_name(&lookup)).await {
        Ok(Some(planet)) => Json(PlanetResponse::from(planet)).into_response(),
        Ok(None) => not_found(format!("Planet '{}' not found", name)),
        Err(e) => e.into_response(),
    }
}

/// List planets, optionally filtered by terrain and climate.
#[utoipa::path(
    get,
    path = "/planets",
    tag = "planets",
    params(ListPlanetsParams),
    responses(
        (status = 200, description = "Matching planets", body = [PlanetResponse])
    )
)]
pub async fn list_planets(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListPlanetsParams>,
) -> impl IntoResponse {
    let template = PlanetTemplate::from(params);
    match run_blocking(&state, move |service| service.list_by_template(&template)).await {
        Ok(planets) => Json(
            planets
                .into_iter()
                .map(PlanetResponse::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete a planet.
///
/// Deleting a missing planet still answers 204.
#[utoipa::path(
    delete,
    path = "/planets/{id}",
    tag = "planets",
    params(
        ("id" = u64, Path, description = "Planet ID")
    ),
    responses(
        (status = 204, description = "Planet deleted or already absent")
    )
)]
pub async fn delete_planet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> impl IntoResponse {
    match run_blocking(&state, move |service| service.remove(id)).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(ApiError(Error::NotFound(_))) => {
            tracing::debug!(id, "Delete of missing planet");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => e.into_response(),
    }
}
