use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, ToSchema)]
pub struct RouteEntry {
    pub path: String,
    pub method: String,
    pub summary: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct RouteList {
    #[schema(value_type = Vec<RouteEntry>)]
    pub items: Vec<RouteEntry>,
}
