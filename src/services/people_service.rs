use sea_orm::{EntityTrait, QueryOrder};

use crate::{
    dto::catalog::CharacterList,
    entity::characters::{Column, Entity as Characters},
    error::{AppError, AppResult},
    models::Character,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_people(state: &AppState) -> AppResult<ApiResponse<CharacterList>> {
    let items: Vec<Character> = Characters::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Character::from)
        .collect();

    let meta = Meta::new(items.len() as i64);
    Ok(ApiResponse::success(
        "People",
        CharacterList { items },
        Some(meta),
    ))
}

pub async fn get_person(state: &AppState, id: i32) -> AppResult<ApiResponse<Character>> {
    let character = Characters::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(Character::from)
        .ok_or_else(|| AppError::not_found("Character not found"))?;
    Ok(ApiResponse::success("Character", character, None))
}
