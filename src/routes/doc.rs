use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{LoginRequest, LoginResponse},
        catalog::{CharacterList, PlanetList, UserList},
        favorites::FavoriteList,
        sitemap::{RouteEntry, RouteList},
    },
    models::{Character, Favorite, Planet, User},
    response::{ApiResponse, Meta},
    routes::{auth, favorites, health, people, planets, sitemap, users},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        sitemap::sitemap,
        health::health_check,
        auth::login,
        people::list_people,
        people::get_person,
        planets::list_planets,
        planets::get_planet,
        users::list_users,
        users::get_user,
        users::list_user_favorites,
        favorites::get_favorite_character,
        favorites::get_favorite_planet,
        favorites::add_favorite_planet,
        favorites::add_favorite_character,
        favorites::remove_favorite_planet,
        favorites::remove_favorite_character
    ),
    components(
        schemas(
            User,
            Character,
            Planet,
            Favorite,
            CharacterList,
            PlanetList,
            UserList,
            FavoriteList,
            RouteEntry,
            RouteList,
            LoginRequest,
            LoginResponse,
            health::HealthData,
            Meta,
            ApiResponse<Character>,
            ApiResponse<Planet>,
            ApiResponse<Favorite>,
            ApiResponse<CharacterList>,
            ApiResponse<PlanetList>,
            ApiResponse<UserList>,
            ApiResponse<FavoriteList>
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Sitemap", description = "Route listing"),
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Authentication endpoints"),
        (name = "People", description = "Character endpoints"),
        (name = "Planets", description = "Planet endpoints"),
        (name = "Users", description = "User endpoints"),
        (name = "Favorites", description = "Favorite endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
