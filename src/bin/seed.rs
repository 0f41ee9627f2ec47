use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    ActiveValue::{NotSet, Set},
};
use starwars_favorites_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    entity::{
        Characters, Planets, Users, characters, planets,
        users::{self, Column as UserCol},
    },
    services::auth_service::{hash_password, issue_token},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    let user_id = ensure_user(&orm, "luke@rebellion.org", "use-the-force").await?;
    ensure_user(&orm, "leia@rebellion.org", "help-me-obi-wan").await?;
    seed_characters(&orm).await?;
    seed_planets(&orm).await?;

    let state = AppState::new(orm, &config);
    let token = issue_token(&state.jwt_secret, user_id, state.token_ttl)?;
    println!("Seed completed. User ID: {user_id}");
    println!("Authorization: Bearer {token}");
    Ok(())
}

async fn ensure_user(orm: &DatabaseConnection, email: &str, password: &str) -> anyhow::Result<i32> {
    if let Some(existing) = Users::find()
        .filter(UserCol::Email.eq(email))
        .one(orm)
        .await?
    {
        println!("User {email} already exists");
        return Ok(existing.id);
    }

    let user = users::ActiveModel {
        id: NotSet,
        email: Set(email.to_string()),
        password: Set(hash_password(password)?),
        is_active: Set(true),
    }
    .insert(orm)
    .await?;

    println!("Created user {email}");
    Ok(user.id)
}

async fn seed_characters(orm: &DatabaseConnection) -> anyhow::Result<()> {
    if Characters::find().count(orm).await? > 0 {
        println!("Characters already seeded");
        return Ok(());
    }

    let people = [
        ("Luke Skywalker", "Farm boy from Tatooine turned Jedi Knight"),
        ("Leia Organa", "Princess of Alderaan and Rebel leader"),
        ("Han Solo", "Smuggler and captain of the Millennium Falcon"),
        ("Darth Vader", "Sith Lord and enforcer of the Empire"),
        ("Yoda", "Jedi Master in exile on Dagobah"),
    ];

    for (name, description) in people {
        characters::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            description: Set(Some(description.to_string())),
        }
        .insert(orm)
        .await?;
    }

    println!("Seeded characters");
    Ok(())
}

async fn seed_planets(orm: &DatabaseConnection) -> anyhow::Result<()> {
    if Planets::find().count(orm).await? > 0 {
        println!("Planets already seeded");
        return Ok(());
    }

    let rows = [
        ("Tatooine", "arid", "desert"),
        ("Alderaan", "temperate", "grasslands, mountains"),
        ("Hoth", "frozen", "tundra, ice caves"),
        ("Dagobah", "murky", "swamp, jungles"),
        ("Endor", "temperate", "forests, mountains, lakes"),
    ];

    for (name, climate, terrain) in rows {
        planets::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            climate: Set(Some(climate.to_string())),
            terrain: Set(Some(terrain.to_string())),
        }
        .insert(orm)
        .await?;
    }

    println!("Seeded planets");
    Ok(())
}
