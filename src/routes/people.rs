use axum::{
    Json, Router,
    extract::State,
    routing::get,
};

use crate::{
    dto::catalog::CharacterList,
    error::AppResult,
    extract::ApiPath,
    models::Character,
    response::ApiResponse,
    services::people_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/people", get(list_people))
        .route("/people/{id}", get(get_person))
}

/// List every character.
#[utoipa::path(
    get,
    path = "/people",
    responses(
        (status = 200, description = "List characters", body = ApiResponse<CharacterList>)
    ),
    tag = "People"
)]
pub async fn list_people(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<CharacterList>>> {
    let resp = people_service::list_people(&state).await?;
    Ok(Json(resp))
}

/// Get a character by id.
#[utoipa::path(
    get,
    path = "/people/{id}",
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Get character", body = ApiResponse<Character>),
        (status = 404, description = "Character not found"),
    ),
    tag = "People"
)]
pub async fn get_person(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<ApiResponse<Character>>> {
    let resp = people_service::get_person(&state, id).await?;
    Ok(Json(resp))
}
