use starwars_favorites_api::{
    config::database_url_from_env,
    db::{create_orm_conn, run_migrations},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let orm = create_orm_conn(&database_url_from_env()).await?;
    run_migrations(&orm).await?;
    println!("Migrations applied");
    Ok(())
}
