#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
};
use serde_json::Value;
use starwars_favorites_api::{
    app::create_app,
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    entity::{characters, planets, users},
    services::auth_service::issue_token,
    state::AppState,
};
use tower::ServiceExt;

pub const LUKE: i32 = 1;
pub const LEIA: i32 = 2;
pub const SKYWALKER: i32 = 1;
pub const VADER: i32 = 2;
pub const TATOOINE: i32 = 1;
pub const HOTH: i32 = 2;

pub struct TestApp {
    pub app: Router,
    pub state: AppState,
}

impl TestApp {
    /// Fresh in-memory database with two users, two characters and two planets.
    pub async fn spawn() -> anyhow::Result<Self> {
        let config = AppConfig {
            database_url: "sqlite::memory:".into(),
            host: "127.0.0.1".into(),
            port: 0,
            jwt_secret: "test-secret".into(),
            jwt_ttl_hours: 1,
        };
        let orm = create_orm_conn(&config.database_url).await?;
        run_migrations(&orm).await?;

        for email in ["luke@rebellion.org", "leia@rebellion.org"] {
            users::ActiveModel {
                id: NotSet,
                email: Set(email.into()),
                password: Set("not-a-real-hash".into()),
                is_active: Set(true),
            }
            .insert(&orm)
            .await?;
        }

        for (name, description) in [
            ("Luke Skywalker", Some("Jedi Knight")),
            ("Darth Vader", None),
        ] {
            characters::ActiveModel {
                id: NotSet,
                name: Set(name.into()),
                description: Set(description.map(str::to_string)),
            }
            .insert(&orm)
            .await?;
        }

        for (name, climate, terrain) in [("Tatooine", "arid", "desert"), ("Hoth", "frozen", "tundra")] {
            planets::ActiveModel {
                id: NotSet,
                name: Set(name.into()),
                climate: Set(Some(climate.into())),
                terrain: Set(Some(terrain.into())),
            }
            .insert(&orm)
            .await?;
        }

        let state = AppState::new(orm, &config);
        let app = create_app(state.clone());
        Ok(Self { app, state })
    }

    pub fn token_for(&self, user_id: i32) -> String {
        issue_token(&self.state.jwt_secret, user_id, self.state.token_ttl).expect("token")
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None, None).await
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }
}
