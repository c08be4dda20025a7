use std::collections::HashMap;

use recipebook_db::table::{Recipe as RecipeTable, RecipeIngredient, RecipeInstruction, RecipeTag, Tag};
use sea_query::{Expr, ExprTrait, Order, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqliteConnection, SqlitePool, prelude::FromRow};

use crate::{Difficulty, Ingredient, Recipe};

mod category;
mod favorite;
mod recipe;
mod tag;

/// Read side of the recipe book.
#[derive(Clone)]
pub struct Query(pub SqlitePool);

#[derive(FromRow)]
struct RecipeRow {
    id: String,
    owner_id: String,
    title: String,
    description: String,
    prep_time: String,
    cook_time: String,
    servings: u16,
    difficulty: sqlx::types::Text<Difficulty>,
    category: Option<String>,
    temperature: Option<String>,
    image_url: Option<String>,
    rating: f64,
    favorites: i64,
    created_at: i64,
    updated_at: Option<i64>,
}

#[derive(FromRow)]
struct IngredientRow {
    recipe_id: String,
    item: String,
    quantity: String,
}

#[derive(FromRow)]
struct InstructionRow {
    recipe_id: String,
    body: String,
}

#[derive(FromRow)]
struct TagRow {
    recipe_id: String,
    name: String,
}

pub(crate) fn select_recipes() -> SelectStatement {
    sea_query::Query::select()
        .columns([
            (RecipeTable::Table, RecipeTable::Id),
            (RecipeTable::Table, RecipeTable::OwnerId),
            (RecipeTable::Table, RecipeTable::Title),
            (RecipeTable::Table, RecipeTable::Description),
            (RecipeTable::Table, RecipeTable::PrepTime),
            (RecipeTable::Table, RecipeTable::CookTime),
            (RecipeTable::Table, RecipeTable::Servings),
            (RecipeTable::Table, RecipeTable::Difficulty),
            (RecipeTable::Table, RecipeTable::Category),
            (RecipeTable::Table, RecipeTable::Temperature),
            (RecipeTable::Table, RecipeTable::ImageUrl),
            (RecipeTable::Table, RecipeTable::Rating),
            (RecipeTable::Table, RecipeTable::Favorites),
            (RecipeTable::Table, RecipeTable::CreatedAt),
            (RecipeTable::Table, RecipeTable::UpdatedAt),
        ])
        .from(RecipeTable::Table)
        .to_owned()
}

/// Runs a recipe select and attaches ingredients, instructions and tags,
/// preserving the statement's row order.
pub(crate) async fn fetch_recipes(
    conn: &mut SqliteConnection,
    statement: SelectStatement,
) -> crate::Result<Vec<Recipe>> {
    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let rows = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
        .fetch_all(&mut *conn)
        .await?;

    if rows.is_empty() {
        return Ok(vec![]);
    }

    let ids: Vec<String> = rows.iter().map(|r| r.id.to_owned()).collect();

    let statement = sea_query::Query::select()
        .columns([
            RecipeIngredient::RecipeId,
            RecipeIngredient::Item,
            RecipeIngredient::Quantity,
        ])
        .from(RecipeIngredient::Table)
        .and_where(Expr::col(RecipeIngredient::RecipeId).is_in(ids.to_owned()))
        .order_by(RecipeIngredient::RecipeId, Order::Asc)
        .order_by(RecipeIngredient::Position, Order::Asc)
        .to_owned();
    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let mut ingredients: HashMap<String, Vec<Ingredient>> = HashMap::new();
    for row in sqlx::query_as_with::<_, IngredientRow, _>(&sql, values)
        .fetch_all(&mut *conn)
        .await?
    {
        ingredients
            .entry(row.recipe_id)
            .or_default()
            .push(Ingredient::new(row.item, row.quantity));
    }

    let statement = sea_query::Query::select()
        .columns([RecipeInstruction::RecipeId, RecipeInstruction::Body])
        .from(RecipeInstruction::Table)
        .and_where(Expr::col(RecipeInstruction::RecipeId).is_in(ids.to_owned()))
        .order_by(RecipeInstruction::RecipeId, Order::Asc)
        .order_by(RecipeInstruction::Position, Order::Asc)
        .to_owned();
    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let mut instructions: HashMap<String, Vec<String>> = HashMap::new();
    for row in sqlx::query_as_with::<_, InstructionRow, _>(&sql, values)
        .fetch_all(&mut *conn)
        .await?
    {
        instructions.entry(row.recipe_id).or_default().push(row.body);
    }

    let statement = sea_query::Query::select()
        .column((RecipeTag::Table, RecipeTag::RecipeId))
        .column((Tag::Table, Tag::Name))
        .from(RecipeTag::Table)
        .inner_join(
            Tag::Table,
            Expr::col((RecipeTag::Table, RecipeTag::TagId)).equals((Tag::Table, Tag::Id)),
        )
        .and_where(Expr::col((RecipeTag::Table, RecipeTag::RecipeId)).is_in(ids))
        .order_by((RecipeTag::Table, RecipeTag::RecipeId), Order::Asc)
        .order_by((RecipeTag::Table, RecipeTag::Position), Order::Asc)
        .to_owned();
    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let mut tags: HashMap<String, Vec<String>> = HashMap::new();
    for row in sqlx::query_as_with::<_, TagRow, _>(&sql, values)
        .fetch_all(&mut *conn)
        .await?
    {
        tags.entry(row.recipe_id).or_default().push(row.name);
    }

    Ok(rows
        .into_iter()
        .map(|row| Recipe {
            ingredients: ingredients.remove(&row.id).unwrap_or_default(),
            instructions: instructions.remove(&row.id).unwrap_or_default(),
            tags: tags.remove(&row.id).unwrap_or_default(),
            id: row.id,
            owner_id: row.owner_id,
            title: row.title,
            description: row.description,
            prep_time: row.prep_time,
            cook_time: row.cook_time,
            servings: row.servings,
            difficulty: row.difficulty.0,
            category: row.category,
            temperature: row.temperature,
            image_url: row.image_url,
            rating: row.rating,
            favorites: row.favorites,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
        .collect())
}

/// Single recipe lookup on an existing connection, so writers can read
/// their own uncommitted changes.
pub(crate) async fn find_in(
    conn: &mut SqliteConnection,
    owner_id: &str,
    id: &str,
) -> crate::Result<Option<Recipe>> {
    let statement = select_recipes()
        .and_where(Expr::col((RecipeTable::Table, RecipeTable::Id)).eq(id))
        .and_where(Expr::col((RecipeTable::Table, RecipeTable::OwnerId)).eq(owner_id))
        .limit(1)
        .to_owned();

    Ok(fetch_recipes(conn, statement).await?.into_iter().next())
}
