use axum::{
    Json, Router,
    extract::State,
    routing::get,
};

use crate::{
    dto::catalog::PlanetList,
    error::AppResult,
    extract::ApiPath,
    models::Planet,
    response::ApiResponse,
    services::planet_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/planets", get(list_planets))
        .route("/planets/{id}", get(get_planet))
}

/// List every planet.
#[utoipa::path(
    get,
    path = "/planets",
    responses(
        (status = 200, description = "List planets", body = ApiResponse<PlanetList>)
    ),
    tag = "Planets"
)]
pub async fn list_planets(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<PlanetList>>> {
    let resp = planet_service::list_planets(&state).await?;
    Ok(Json(resp))
}

/// Get a planet by id.
#[utoipa::path(
    get,
    path = "/planets/{id}",
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Get planet", body = ApiResponse<Planet>),
        (status = 404, description = "Planet not found"),
    ),
    tag = "Planets"
)]
pub async fn get_planet(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<ApiResponse<Planet>>> {
    let resp = planet_service::get_planet(&state, id).await?;
    Ok(Json(resp))
}
