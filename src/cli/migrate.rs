use anyhow::Result;
use sqlx::migrate::MigrateDatabase;

use crate::config::Config;

/// Creates the database when missing, applies pending migrations and seeds
/// the default categories.
#[tracing::instrument(skip(config))]
pub async fn migrate(config: Config) -> Result<()> {
    tracing::info!("Running database migrations...");

    if !sqlx::Sqlite::database_exists(&config.database.url).await? {
        tracing::info!("Database does not exist, creating: {}", config.database.url);
        sqlx::Sqlite::create_database(&config.database.url).await?;
    }

    let pool = crate::db::create_pool(&config.database.url, 1).await?;

    recipebook_db::migrate(&pool).await?;
    recipebook_recipe::Command::new(pool.clone())
        .seed_default_categories()
        .await?;

    pool.close().await;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

/// Drops the database if it exists and recreates it.
#[tracing::instrument(skip(config))]
pub async fn reset(config: Config) -> Result<()> {
    tracing::info!("Resetting database...");

    if sqlx::Sqlite::database_exists(&config.database.url).await? {
        tracing::warn!("Dropping existing database: {}", config.database.url);
        sqlx::Sqlite::drop_database(&config.database.url).await?;
    } else {
        tracing::info!("Database does not exist, nothing to drop");
    }

    migrate(config).await?;

    tracing::info!("Database reset completed successfully");

    Ok(())
}
