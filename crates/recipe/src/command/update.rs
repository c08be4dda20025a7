use recipebook_db::table::{
    Recipe as RecipeTable, RecipeIngredient, RecipeInstruction, RecipeTag,
};
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use validator::Validate;

use crate::{Difficulty, Error, Ingredient, Recipe, normalize_tags, query, slugify, tag};

/// Partial update. Absent fields are left untouched; list fields replace
/// the stored list wholesale when present. An empty `category`,
/// `temperature` or `imageUrl` clears the value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInput {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    #[validate(length(max = 50))]
    pub prep_time: Option<String>,
    #[validate(length(max = 50))]
    pub cook_time: Option<String>,
    #[validate(range(min = 1, max = 100))]
    pub servings: Option<u16>,
    pub difficulty: Option<Difficulty>,
    pub category: Option<String>,
    pub temperature: Option<String>,
    pub ingredients: Option<Vec<Ingredient>>,
    pub instructions: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub image_url: Option<String>,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: Option<f64>,
}

impl super::Command {
    #[tracing::instrument(skip(self, input))]
    pub async fn update(
        &self,
        owner_id: &str,
        id: &str,
        input: UpdateInput,
    ) -> crate::Result<Recipe> {
        let trim = |v: Option<String>| v.map(|v| v.trim().to_owned());
        let input = UpdateInput {
            title: trim(input.title),
            description: trim(input.description),
            prep_time: trim(input.prep_time),
            cook_time: trim(input.cook_time),
            ..input
        };

        input.validate()?;

        let mut tx = self.write_db.begin().await?;

        if query::find_in(&mut tx, owner_id, id).await?.is_none() {
            return Err(Error::NotFound);
        }

        let mut statement = Query::update()
            .table(RecipeTable::Table)
            .value(RecipeTable::UpdatedAt, crate::now())
            .and_where(Expr::col(RecipeTable::Id).eq(id))
            .and_where(Expr::col(RecipeTable::OwnerId).eq(owner_id))
            .to_owned();

        if let Some(title) = input.title {
            statement.value(RecipeTable::Title, title);
        }
        if let Some(description) = input.description {
            statement.value(RecipeTable::Description, description);
        }
        if let Some(prep_time) = input.prep_time {
            statement.value(RecipeTable::PrepTime, prep_time);
        }
        if let Some(cook_time) = input.cook_time {
            statement.value(RecipeTable::CookTime, cook_time);
        }
        if let Some(servings) = input.servings {
            statement.value(RecipeTable::Servings, servings as i64);
        }
        if let Some(difficulty) = input.difficulty {
            statement.value(RecipeTable::Difficulty, difficulty.to_string());
        }
        if let Some(category) = input.category {
            let slug = Some(slugify(&category)).filter(|s| !s.is_empty());
            statement.value(RecipeTable::Category, slug);
        }
        if let Some(temperature) = input.temperature {
            statement.value(RecipeTable::Temperature, super::clean_text(Some(temperature)));
        }
        if let Some(image_url) = input.image_url {
            statement.value(RecipeTable::ImageUrl, super::clean_text(Some(image_url)));
        }
        if let Some(rating) = input.rating {
            statement.value(RecipeTable::Rating, rating);
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        if let Some(ingredients) = input.ingredients {
            let statement = Query::delete()
                .from_table(RecipeIngredient::Table)
                .and_where(Expr::col(RecipeIngredient::RecipeId).eq(id))
                .to_owned();
            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            sqlx::query_with(&sql, values).execute(&mut *tx).await?;

            super::insert_ingredients(&mut tx, id, &super::clean_ingredients(ingredients)).await?;
        }

        if let Some(instructions) = input.instructions {
            let statement = Query::delete()
                .from_table(RecipeInstruction::Table)
                .and_where(Expr::col(RecipeInstruction::RecipeId).eq(id))
                .to_owned();
            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            sqlx::query_with(&sql, values).execute(&mut *tx).await?;

            super::insert_instructions(&mut tx, id, &super::clean_lines(instructions)).await?;
        }

        if let Some(tags) = input.tags {
            let statement = Query::delete()
                .from_table(RecipeTag::Table)
                .and_where(Expr::col(RecipeTag::RecipeId).eq(id))
                .to_owned();
            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            sqlx::query_with(&sql, values).execute(&mut *tx).await?;

            tag::link_tags(&mut tx, owner_id, id, &normalize_tags(&tags)).await?;
        }

        let recipe = query::find_in(&mut tx, owner_id, id)
            .await?
            .ok_or(Error::NotFound)?;

        tx.commit().await?;

        tracing::info!(recipe_id = %id, "recipe updated");

        Ok(recipe)
    }
}
