use recipebook_db::table::Recipe as RecipeTable;
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use ulid::Ulid;
use validator::Validate;

use crate::{Difficulty, Ingredient, Recipe, normalize_tags, slugify, tag};

fn default_servings() -> u16 {
    1
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInput {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub description: String,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub prep_time: String,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub cook_time: String,
    #[serde(default = "default_servings")]
    #[validate(range(min = 1, max = 100))]
    pub servings: u16,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub temperature: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
}

impl Default for CreateInput {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            prep_time: String::new(),
            cook_time: String::new(),
            servings: default_servings(),
            difficulty: Difficulty::default(),
            category: None,
            temperature: None,
            ingredients: vec![],
            instructions: vec![],
            tags: vec![],
            image_url: None,
            rating: 0.0,
        }
    }
}

impl super::Command {
    #[tracing::instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create(&self, owner_id: &str, input: CreateInput) -> crate::Result<Recipe> {
        let input = CreateInput {
            title: input.title.trim().to_owned(),
            description: input.description.trim().to_owned(),
            prep_time: input.prep_time.trim().to_owned(),
            cook_time: input.cook_time.trim().to_owned(),
            ingredients: super::clean_ingredients(input.ingredients),
            instructions: super::clean_lines(input.instructions),
            tags: normalize_tags(&input.tags),
            temperature: super::clean_text(input.temperature),
            image_url: super::clean_text(input.image_url),
            category: super::clean_text(input.category)
                .map(|c| slugify(&c))
                .filter(|c| !c.is_empty()),
            ..input
        };

        input.validate()?;

        let id = Ulid::new().to_string();
        let created_at = crate::now();

        let statement = Query::insert()
            .into_table(RecipeTable::Table)
            .columns([
                RecipeTable::Id,
                RecipeTable::OwnerId,
                RecipeTable::Title,
                RecipeTable::Description,
                RecipeTable::PrepTime,
                RecipeTable::CookTime,
                RecipeTable::Servings,
                RecipeTable::Difficulty,
                RecipeTable::Category,
                RecipeTable::Temperature,
                RecipeTable::ImageUrl,
                RecipeTable::Rating,
                RecipeTable::Favorites,
                RecipeTable::CreatedAt,
            ])
            .values_panic([
                id.to_owned().into(),
                owner_id.into(),
                input.title.to_owned().into(),
                input.description.to_owned().into(),
                input.prep_time.to_owned().into(),
                input.cook_time.to_owned().into(),
                (input.servings as i64).into(),
                input.difficulty.to_string().into(),
                input.category.to_owned().into(),
                input.temperature.to_owned().into(),
                input.image_url.to_owned().into(),
                input.rating.into(),
                0i64.into(),
                created_at.into(),
            ])
            .to_owned();

        let mut tx = self.write_db.begin().await?;

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        super::insert_ingredients(&mut tx, &id, &input.ingredients).await?;
        super::insert_instructions(&mut tx, &id, &input.instructions).await?;
        tag::link_tags(&mut tx, owner_id, &id, &input.tags).await?;

        tx.commit().await?;

        tracing::info!(recipe_id = %id, "recipe created");

        Ok(Recipe {
            id,
            owner_id: owner_id.to_owned(),
            title: input.title,
            description: input.description,
            prep_time: input.prep_time,
            cook_time: input.cook_time,
            servings: input.servings,
            difficulty: input.difficulty,
            category: input.category,
            temperature: input.temperature,
            ingredients: input.ingredients,
            instructions: input.instructions,
            tags: input.tags,
            image_url: input.image_url,
            rating: input.rating,
            favorites: 0,
            created_at,
            updated_at: None,
        })
    }
}
