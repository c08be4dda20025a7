use sqlx::SqlitePool;
use sqlx_migrator::{Info, Migrate, Migrator, Plan};

mod m0001;
pub mod table;

/// Owner id of the seeded categories every user can see.
pub const SYSTEM_OWNER: &str = "system";

pub fn migrator() -> Result<Migrator<sqlx::Sqlite>, sqlx_migrator::Error> {
    let mut migrator = Migrator::default();
    migrator.add_migrations(vec![Box::new(m0001::Migration)])?;

    Ok(migrator)
}

/// Applies every pending migration. Safe to call on an up-to-date database.
pub async fn migrate(pool: &SqlitePool) -> anyhow::Result<()> {
    let mut conn = pool.acquire().await?;
    migrator()?.run(&mut *conn, &Plan::apply_all()).await?;

    tracing::info!("database schema is up to date");

    Ok(())
}

#[cfg(test)]
mod tests {
    use sqlx::sqlite::SqliteConnectOptions;
    use std::str::FromStr;

    use super::*;

    async fn file_pool(dir: &temp_dir::TempDir) -> anyhow::Result<SqlitePool> {
        let path = dir.child("migrate.db");
        let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
            .create_if_missing(true);

        Ok(SqlitePool::connect_with(opts).await?)
    }

    #[tokio::test]
    async fn migrate_creates_every_table() -> anyhow::Result<()> {
        let dir = temp_dir::TempDir::new()?;
        let pool = file_pool(&dir).await?;

        migrate(&pool).await?;

        let tables: Vec<(String,)> =
            sqlx::query_as("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
                .fetch_all(&pool)
                .await?;
        let tables: Vec<String> = tables.into_iter().map(|(name,)| name).collect();

        for expected in [
            "category",
            "favorite",
            "recipe",
            "recipe_ingredient",
            "recipe_instruction",
            "recipe_tag",
            "tag",
        ] {
            assert!(tables.iter().any(|t| t == expected), "missing {expected}");
        }

        Ok(())
    }

    #[tokio::test]
    async fn migrate_twice_is_a_noop() -> anyhow::Result<()> {
        let dir = temp_dir::TempDir::new()?;
        let pool = file_pool(&dir).await?;

        migrate(&pool).await?;
        migrate(&pool).await?;

        Ok(())
    }

    #[tokio::test]
    async fn category_slug_is_unique_per_owner() -> anyhow::Result<()> {
        let dir = temp_dir::TempDir::new()?;
        let pool = file_pool(&dir).await?;
        migrate(&pool).await?;

        let insert = "INSERT INTO category (id, owner_id, name, slug, is_default, created_at) VALUES (?, ?, ?, ?, 0, 0)";

        sqlx::query(insert)
            .bind("a")
            .bind("john")
            .bind("Soups")
            .bind("soups")
            .execute(&pool)
            .await?;

        sqlx::query(insert)
            .bind("b")
            .bind("albert")
            .bind("Soups")
            .bind("soups")
            .execute(&pool)
            .await?;

        let duplicate = sqlx::query(insert)
            .bind("c")
            .bind("john")
            .bind("soups")
            .bind("soups")
            .execute(&pool)
            .await;

        assert!(duplicate.is_err());

        Ok(())
    }
}
