mod common;

use axum::http::{Method, StatusCode};
use common::{HOTH, LEIA, LUKE, SKYWALKER, TATOOINE, TestApp, VADER};
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
};
use starwars_favorites_api::{entity::favorites, services::auth_service::hash_password};

#[tokio::test]
async fn adding_a_planet_twice_is_rejected() -> anyhow::Result<()> {
    let app = TestApp::spawn().await?;
    let token = app.token_for(LUKE);
    let uri = format!("/favorite/planet/{TATOOINE}");

    let (status, body) = app.send(Method::POST, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["user_id"], LUKE);
    assert_eq!(body["data"]["planet_id"], TATOOINE);
    assert!(body["data"]["character_id"].is_null());

    let (status, body) = app.send(Method::POST, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Planet is already a favorite");
    Ok(())
}

#[tokio::test]
async fn same_target_may_be_favorited_by_different_users() -> anyhow::Result<()> {
    let app = TestApp::spawn().await?;
    let uri = format!("/favorite/people/{VADER}");

    let (status, _) = app
        .send(Method::POST, &uri, Some(&app.token_for(LUKE)), None)
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = app
        .send(Method::POST, &uri, Some(&app.token_for(LEIA)), None)
        .await;
    assert_eq!(status, StatusCode::CREATED);
    Ok(())
}

#[tokio::test]
async fn deleting_a_character_favorite_twice() -> anyhow::Result<()> {
    let app = TestApp::spawn().await?;
    let token = app.token_for(LUKE);
    let uri = format!("/favorite/people/{SKYWALKER}");

    let (status, body) = app.send(Method::POST, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Added to favorites");

    let (status, body) = app.send(Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Favorite character deleted");

    let (status, body) = app.send(Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Favorite character not found");
    Ok(())
}

#[tokio::test]
async fn deleting_a_planet_favorite() -> anyhow::Result<()> {
    let app = TestApp::spawn().await?;
    let token = app.token_for(LUKE);

    let (status, _) = app
        .send(Method::DELETE, &format!("/favorite/planet/{HOTH}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    app.send(Method::POST, &format!("/favorite/planet/{HOTH}"), Some(&token), None)
        .await;
    let (status, body) = app
        .send(Method::DELETE, &format!("/favorite/planet/{HOTH}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Favorite planet deleted");
    Ok(())
}

#[tokio::test]
async fn user_favorites_conflate_missing_user_and_empty_list() -> anyhow::Result<()> {
    let app = TestApp::spawn().await?;

    let (status, body) = app.get("/users/999/favorites").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");

    let (status, body) = app.get(&format!("/users/{LUKE}/favorites")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No favorites found");

    let token = app.token_for(LUKE);
    app.send(Method::POST, &format!("/favorite/people/{VADER}"), Some(&token), None)
        .await;
    app.send(Method::POST, &format!("/favorite/planet/{HOTH}"), Some(&token), None)
        .await;

    let (status, body) = app.get(&format!("/users/{LUKE}/favorites")).await;
    assert_eq!(status, StatusCode::OK);
    let favorites = body["data"].as_array().expect("favorites");
    assert_eq!(favorites.len(), 2);
    assert_eq!(favorites[0]["character_id"], VADER);
    assert_eq!(favorites[1]["planet_id"], HOTH);

    // Other users' favorites stay separate.
    let (status, _) = app.get(&format!("/users/{LEIA}/favorites")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn added_favorite_reads_back_unchanged() -> anyhow::Result<()> {
    let app = TestApp::spawn().await?;
    let token = app.token_for(LUKE);

    let (status, created) = app
        .send(Method::POST, &format!("/favorite/planet/{TATOOINE}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, fetched) = app
        .send(Method::GET, &format!("/favorite/planets/{TATOOINE}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["data"], fetched["data"]);

    let (status, created) = app
        .send(Method::POST, &format!("/favorite/people/{SKYWALKER}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, fetched) = app
        .send(Method::GET, &format!("/favorite/people/{SKYWALKER}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["data"], fetched["data"]);
    Ok(())
}

#[tokio::test]
async fn favorites_are_scoped_to_the_caller() -> anyhow::Result<()> {
    let app = TestApp::spawn().await?;
    app.send(
        Method::POST,
        &format!("/favorite/planet/{HOTH}"),
        Some(&app.token_for(LUKE)),
        None,
    )
    .await;

    let (status, body) = app
        .send(
            Method::GET,
            &format!("/favorite/planets/{HOTH}"),
            Some(&app.token_for(LEIA)),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Favorite planet not found");
    Ok(())
}

#[tokio::test]
async fn adding_unknown_target_or_user_is_404() -> anyhow::Result<()> {
    let app = TestApp::spawn().await?;

    let (status, body) = app
        .send(Method::POST, "/favorite/planet/999", Some(&app.token_for(LUKE)), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Planet not found");

    let (status, body) = app
        .send(Method::POST, "/favorite/people/999", Some(&app.token_for(LUKE)), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Character not found");

    // A valid token for a user that does not exist.
    let (status, body) = app
        .send(
            Method::POST,
            &format!("/favorite/planet/{HOTH}"),
            Some(&app.token_for(404)),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");
    Ok(())
}

#[tokio::test]
async fn current_user_routes_require_a_token() -> anyhow::Result<()> {
    let app = TestApp::spawn().await?;
    let uri = format!("/favorite/planet/{TATOOINE}");

    let (status, _) = app.send(Method::POST, &uri, None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .send(Method::POST, &uri, Some("not.a.token"), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .send(Method::GET, &format!("/favorite/people/{SKYWALKER}"), None, None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn schema_requires_exactly_one_target() -> anyhow::Result<()> {
    let app = TestApp::spawn().await?;

    let neither = favorites::ActiveModel {
        id: NotSet,
        user_id: Set(LUKE),
        character_id: Set(None),
        planet_id: Set(None),
    }
    .insert(&app.state.orm)
    .await;
    assert!(neither.is_err());

    let both = favorites::ActiveModel {
        id: NotSet,
        user_id: Set(LUKE),
        character_id: Set(Some(SKYWALKER)),
        planet_id: Set(Some(TATOOINE)),
    }
    .insert(&app.state.orm)
    .await;
    assert!(both.is_err());
    Ok(())
}

#[tokio::test]
async fn login_issues_a_usable_token() -> anyhow::Result<()> {
    use sea_orm::{EntityTrait, IntoActiveModel};
    use starwars_favorites_api::entity::Users;

    let app = TestApp::spawn().await?;
    let luke = Users::find_by_id(LUKE)
        .one(&app.state.orm)
        .await?
        .expect("seeded user");
    let mut active = luke.into_active_model();
    active.password = Set(hash_password("use-the-force")?);
    active.update(&app.state.orm).await?;

    let (status, body) = app
        .send(
            Method::POST,
            "/auth/login",
            None,
            Some(serde_json::json!({ "email": "luke@rebellion.org", "password": "wrong" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid email or password");

    let (status, body) = app
        .send(
            Method::POST,
            "/auth/login",
            None,
            Some(serde_json::json!({ "email": "luke@rebellion.org", "password": "use-the-force" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["data"]["token"]
        .as_str()
        .and_then(|t| t.strip_prefix("Bearer "))
        .expect("bearer token")
        .to_string();

    let (status, _) = app
        .send(Method::POST, &format!("/favorite/people/{SKYWALKER}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::CREATED);
    Ok(())
}

#[tokio::test]
async fn malformed_requests_keep_the_json_envelope() -> anyhow::Result<()> {
    let app = TestApp::spawn().await?;

    let (status, body) = app
        .send(
            Method::POST,
            "/auth/login",
            None,
            Some(serde_json::json!({ "email": 1 })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["data"]["error"].is_string());

    let (status, body) = app
        .send(Method::POST, "/favorite/planet/abc", Some(&app.token_for(LUKE)), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Not Found");
    Ok(())
}
