use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    error::AppResult,
    extract::ApiPath,
    middleware::auth::AuthUser,
    models::Favorite,
    response::ApiResponse,
    services::favorite_service::{self, FavoriteTarget},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/favorite/people/{id}",
            get(get_favorite_character)
                .post(add_favorite_character)
                .delete(remove_favorite_character),
        )
        .route("/favorite/planets/{id}", get(get_favorite_planet))
        .route(
            "/favorite/planet/{id}",
            post(add_favorite_planet).delete(remove_favorite_planet),
        )
}

/// Get the current user's favorite for a character.
#[utoipa::path(
    get,
    path = "/favorite/people/{id}",
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Favorite character", body = ApiResponse<Favorite>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Favorite character not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Favorites"
)]
pub async fn get_favorite_character(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<ApiResponse<Favorite>>> {
    let resp = favorite_service::get_favorite(&state, &user, FavoriteTarget::Character(id)).await?;
    Ok(Json(resp))
}

/// Get the current user's favorite for a planet.
#[utoipa::path(
    get,
    path = "/favorite/planets/{id}",
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Favorite planet", body = ApiResponse<Favorite>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Favorite planet not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Favorites"
)]
pub async fn get_favorite_planet(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<ApiResponse<Favorite>>> {
    let resp = favorite_service::get_favorite(&state, &user, FavoriteTarget::Planet(id)).await?;
    Ok(Json(resp))
}

/// Add a planet to the current user's favorites.
#[utoipa::path(
    post,
    path = "/favorite/planet/{id}",
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 201, description = "Added to favorites", body = ApiResponse<Favorite>),
        (status = 400, description = "Planet is already a favorite"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User or planet not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Favorites"
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<(StatusCode, Json<ApiResponse<Favorite>>)> {
    let resp = favorite_service::add_favorite(&state, &user, FavoriteTarget::Planet(id)).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

/// Add a character to the current user's favorites.
#[utoipa::path(
    post,
    path = "/favorite/people/{id}",
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 201, description = "Added to favorites", body = ApiResponse<Favorite>),
        (status = 400, description = "Character is already a favorite"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User or character not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Favorites"
)]
pub async fn add_favorite_character(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<(StatusCode, Json<ApiResponse<Favorite>>)> {
    let resp =
        favorite_service::add_favorite(&state, &user, FavoriteTarget::Character(id)).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

/// Remove a planet from the current user's favorites.
#[utoipa::path(
    delete,
    path = "/favorite/planet/{id}",
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Favorite planet deleted", body = ApiResponse<serde_json::Value>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Favorite planet not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Favorites"
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp =
        favorite_service::remove_favorite(&state, &user, FavoriteTarget::Planet(id)).await?;
    Ok(Json(resp))
}

/// Remove a character from the current user's favorites.
#[utoipa::path(
    delete,
    path = "/favorite/people/{id}",
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Favorite character deleted", body = ApiResponse<serde_json::Value>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Favorite character not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Favorites"
)]
pub async fn remove_favorite_character(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp =
        favorite_service::remove_favorite(&state, &user, FavoriteTarget::Character(id)).await?;
    Ok(Json(resp))
}
