use recipebook_db::table::Recipe as RecipeTable;
use sea_query::{Expr, ExprTrait, Order};

use crate::{Recipe, RecipeFilter};

impl super::Query {
    pub async fn find(&self, owner_id: &str, id: &str) -> crate::Result<Option<Recipe>> {
        let mut conn = self.0.acquire().await?;

        super::find_in(&mut conn, owner_id, id).await
    }

    /// Newest first. Owner, category, difficulty and rating are narrowed in
    /// SQL; text search, tags and total time run on the loaded rows.
    pub async fn filter(&self, owner_id: &str, filter: &RecipeFilter) -> crate::Result<Vec<Recipe>> {
        let mut statement = super::select_recipes()
            .and_where(Expr::col((RecipeTable::Table, RecipeTable::OwnerId)).eq(owner_id))
            .order_by((RecipeTable::Table, RecipeTable::CreatedAt), Order::Desc)
            .order_by((RecipeTable::Table, RecipeTable::Id), Order::Desc)
            .to_owned();

        if let Some(category) = filter.category_slug() {
            statement.and_where(Expr::col((RecipeTable::Table, RecipeTable::Category)).eq(category));
        }

        if let Some(difficulty) = filter.difficulty {
            statement.and_where(
                Expr::col((RecipeTable::Table, RecipeTable::Difficulty)).eq(difficulty.to_string()),
            );
        }

        if let Some(min_rating) = filter.min_rating {
            statement.and_where(Expr::col((RecipeTable::Table, RecipeTable::Rating)).gte(min_rating));
        }

        let mut conn = self.0.acquire().await?;
        let recipes = super::fetch_recipes(&mut conn, statement).await?;

        Ok(filter.apply(recipes))
    }
}
