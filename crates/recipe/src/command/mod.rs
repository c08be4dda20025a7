use recipebook_db::table::{RecipeIngredient, RecipeInstruction};
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqliteConnection, SqlitePool};

use crate::Ingredient;

mod create;
mod delete;
mod update;

pub use create::CreateInput;
pub use update::UpdateInput;

/// Write side of the recipe book. Every operation runs in a single
/// transaction on the write pool; reads that must observe the write go
/// through the same connection.
#[derive(Clone)]
pub struct Command {
    pub write_db: SqlitePool,
}

impl Command {
    pub fn new(write_db: SqlitePool) -> Self {
        Self { write_db }
    }
}

pub(crate) fn clean_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

pub(crate) fn clean_ingredients(ingredients: Vec<Ingredient>) -> Vec<Ingredient> {
    ingredients
        .into_iter()
        .map(|i| Ingredient::new(i.item.trim(), i.quantity.trim()))
        .filter(|i| !i.item.is_empty())
        .collect()
}

pub(crate) fn clean_lines(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .map(|l| l.trim().to_owned())
        .filter(|l| !l.is_empty())
        .collect()
}

pub(crate) async fn insert_ingredients(
    conn: &mut SqliteConnection,
    recipe_id: &str,
    ingredients: &[Ingredient],
) -> crate::Result<()> {
    if ingredients.is_empty() {
        return Ok(());
    }

    let mut statement = Query::insert()
        .into_table(RecipeIngredient::Table)
        .columns([
            RecipeIngredient::RecipeId,
            RecipeIngredient::Position,
            RecipeIngredient::Item,
            RecipeIngredient::Quantity,
        ])
        .to_owned();

    for (position, ingredient) in ingredients.iter().enumerate() {
        statement.values_panic([
            recipe_id.into(),
            (position as i64).into(),
            ingredient.item.to_owned().into(),
            ingredient.quantity.to_owned().into(),
        ]);
    }

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(&mut *conn).await?;

    Ok(())
}

pub(crate) async fn insert_instructions(
    conn: &mut SqliteConnection,
    recipe_id: &str,
    instructions: &[String],
) -> crate::Result<()> {
    if instructions.is_empty() {
        return Ok(());
    }

    let mut statement = Query::insert()
        .into_table(RecipeInstruction::Table)
        .columns([
            RecipeInstruction::RecipeId,
            RecipeInstruction::Position,
            RecipeInstruction::Body,
        ])
        .to_owned();

    for (position, body) in instructions.iter().enumerate() {
        statement.values_panic([
            recipe_id.into(),
            (position as i64).into(),
            body.to_owned().into(),
        ]);
    }

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(&mut *conn).await?;

    Ok(())
}
