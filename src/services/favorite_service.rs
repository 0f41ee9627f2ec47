use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    SqlErr,
    ActiveValue::{NotSet, Set},
    sea_query::SimpleExpr,
};

use crate::{
    dto::favorites::FavoriteList,
    entity::{
        Characters, Planets, Users,
        favorites::{ActiveModel, Column as FavCol, Entity as Favorites, Model as FavoriteModel},
    },
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::Favorite,
    response::{ApiResponse, Meta},
    state::AppState,
};

/// The thing a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    Character(i32),
    Planet(i32),
}

impl FavoriteTarget {
    fn label(&self) -> &'static str {
        match self {
            FavoriteTarget::Character(_) => "Character",
            FavoriteTarget::Planet(_) => "Planet",
        }
    }

    fn noun(&self) -> &'static str {
        match self {
            FavoriteTarget::Character(_) => "character",
            FavoriteTarget::Planet(_) => "planet",
        }
    }

    fn condition(&self) -> SimpleExpr {
        match *self {
            FavoriteTarget::Character(id) => FavCol::CharacterId.eq(id),
            FavoriteTarget::Planet(id) => FavCol::PlanetId.eq(id),
        }
    }

    fn missing_favorite(&self) -> AppError {
        AppError::not_found(format!("Favorite {} not found", self.noun()))
    }

    fn new_favorite(&self, user_id: i32) -> ActiveModel {
        let (character_id, planet_id) = match *self {
            FavoriteTarget::Character(id) => (Some(id), None),
            FavoriteTarget::Planet(id) => (None, Some(id)),
        };
        ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            character_id: Set(character_id),
            planet_id: Set(planet_id),
        }
    }

    async fn ensure_exists(&self, db: &DatabaseConnection) -> AppResult<()> {
        let found = match *self {
            FavoriteTarget::Character(id) => Characters::find_by_id(id).one(db).await?.is_some(),
            FavoriteTarget::Planet(id) => Planets::find_by_id(id).one(db).await?.is_some(),
        };
        if !found {
            return Err(AppError::not_found(format!("{} not found", self.label())));
        }
        Ok(())
    }
}

async fn find_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    target: FavoriteTarget,
) -> AppResult<Option<FavoriteModel>> {
    let favorite = Favorites::find()
        .filter(FavCol::UserId.eq(user_id))
        .filter(target.condition())
        .one(db)
        .await?;
    Ok(favorite)
}

/// An empty list is reported as 404, the same as an unknown user.
pub async fn list_user_favorites(
    state: &AppState,
    user_id: i32,
) -> AppResult<ApiResponse<FavoriteList>> {
    Users::find_by_id(user_id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    let items: Vec<Favorite> = Favorites::find()
        .filter(FavCol::UserId.eq(user_id))
        .order_by_asc(FavCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Favorite::from)
        .collect();

    if items.is_empty() {
        return Err(AppError::not_found("No favorites found"));
    }

    let meta = Meta::new(items.len() as i64);
    Ok(ApiResponse::success("Favorites", FavoriteList { items }, Some(meta)))
}

pub async fn get_favorite(
    state: &AppState,
    user: &AuthUser,
    target: FavoriteTarget,
) -> AppResult<ApiResponse<Favorite>> {
    let favorite = find_favorite(&state.orm, user.user_id, target)
        .await?
        .map(Favorite::from)
        .ok_or_else(|| target.missing_favorite())?;
    Ok(ApiResponse::success("Favorite", favorite, None))
}

pub async fn add_favorite(
    state: &AppState,
    user: &AuthUser,
    target: FavoriteTarget,
) -> AppResult<ApiResponse<Favorite>> {
    Users::find_by_id(user.user_id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;
    target.ensure_exists(&state.orm).await?;

    // The unique indexes on (user_id, character_id) and (user_id, planet_id)
    // reject duplicates, concurrent ones included.
    let favorite = target
        .new_favorite(user.user_id)
        .insert(&state.orm)
        .await
        .map_err(|err| match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                AppError::BadRequest(format!("{} is already a favorite", target.label()))
            }
            _ => AppError::from(err),
        })?;

    tracing::info!(
        user_id = user.user_id,
        favorite_id = favorite.id,
        favorite_target = ?target,
        "favorite added"
    );

    Ok(ApiResponse::success(
        "Added to favorites",
        Favorite::from(favorite),
        Some(Meta::empty()),
    ))
}

pub async fn remove_favorite(
    state: &AppState,
    user: &AuthUser,
    target: FavoriteTarget,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Favorites::delete_many()
        .filter(FavCol::UserId.eq(user.user_id))
        .filter(target.condition())
        .exec(&state.orm)
        .await?;

    if result.rows_affected == 0 {
        return Err(target.missing_favorite());
    }

    tracing::info!(user_id = user.user_id, favorite_target = ?target, "favorite removed");

    Ok(ApiResponse::message_only(format!(
        "Favorite {} deleted",
        target.noun()
    )))
}
