use std::{path::PathBuf, str::FromStr};

use recipebook_recipe::{Command, CreateInput, Ingredient, Query};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};

pub struct TestState {
    pub command: Command,
    pub query: Query,
}

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<TestState> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    recipebook_db::migrate(&pool).await?;

    let command = Command::new(pool.clone());
    command.seed_default_categories().await?;

    Ok(TestState {
        command,
        query: Query(pool),
    })
}

#[allow(dead_code)]
pub fn input(title: impl Into<String>) -> CreateInput {
    CreateInput {
        title: title.into(),
        description: "una receta de prueba".to_owned(),
        prep_time: "10 min".to_owned(),
        cook_time: "20 min".to_owned(),
        servings: 4,
        ingredients: vec![Ingredient::new("harina", "200 g"), Ingredient::new("huevo", "2")],
        instructions: vec!["Mezclar".to_owned(), "Hornear".to_owned()],
        ..Default::default()
    }
}

#[allow(dead_code)]
pub async fn create_recipe(
    command: &Command,
    owner_id: &str,
    title: impl Into<String>,
) -> anyhow::Result<String> {
    Ok(command.create(owner_id, input(title)).await?.id)
}

/// Rows of a child table still pointing at `recipe_id`.
#[allow(dead_code)]
pub async fn count_rows(pool: &SqlitePool, table: &str, recipe_id: &str) -> anyhow::Result<i64> {
    let (count,): (i64,) =
        sqlx::query_as(&format!("SELECT COUNT(*) FROM {table} WHERE recipe_id = ?"))
            .bind(recipe_id)
            .fetch_one(pool)
            .await?;

    Ok(count)
}
