use std::sync::LazyLock;

use axum::Json;
use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};

use crate::{
    dto::sitemap::{RouteEntry, RouteList},
    response::{ApiResponse, Meta},
    routes::doc::ApiDoc,
};

const HTTP_METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

static ROUTES: LazyLock<Vec<RouteEntry>> = LazyLock::new(|| collect_routes(&ApiDoc::openapi()));

/// Flatten the documented paths into one entry per method, sorted by path.
pub fn collect_routes(doc: &OpenApiSpec) -> Vec<RouteEntry> {
    let Ok(value) = serde_json::to_value(doc) else {
        return Vec::new();
    };
    let Some(paths) = value.get("paths").and_then(|p| p.as_object()) else {
        return Vec::new();
    };

    let mut routes: Vec<RouteEntry> = paths
        .iter()
        .filter_map(|(path, item)| item.as_object().map(|ops| (path, ops)))
        .flat_map(|(path, ops)| {
            ops.iter()
                .filter(|(method, _)| HTTP_METHODS.contains(&method.as_str()))
                .map(move |(method, op)| RouteEntry {
                    path: path.clone(),
                    method: method.to_uppercase(),
                    summary: op
                        .get("summary")
                        .and_then(|s| s.as_str())
                        .map(str::to_string),
                })
        })
        .collect();
    routes.sort();
    routes
}

/// List every route this API serves.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "All routes", body = ApiResponse<RouteList>)
    ),
    tag = "Sitemap"
)]
pub async fn sitemap() -> Json<ApiResponse<RouteList>> {
    let items = ROUTES.clone();
    let meta = Meta::new(items.len() as i64);
    Json(ApiResponse::success("Routes", RouteList { items }, Some(meta)))
}
