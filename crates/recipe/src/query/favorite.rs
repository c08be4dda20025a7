use recipebook_db::table::{Favorite, Recipe as RecipeTable};
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::Recipe;

impl super::Query {
    /// Recipes the user marked as favorite, most recently marked first.
    pub async fn favorites(&self, user_id: &str) -> crate::Result<Vec<Recipe>> {
        let statement = super::select_recipes()
            .inner_join(
                Favorite::Table,
                Expr::col((Favorite::Table, Favorite::RecipeId))
                    .equals((RecipeTable::Table, RecipeTable::Id)),
            )
            .and_where(Expr::col((Favorite::Table, Favorite::UserId)).eq(user_id))
            .order_by((Favorite::Table, Favorite::CreatedAt), Order::Desc)
            .order_by((RecipeTable::Table, RecipeTable::Id), Order::Desc)
            .to_owned();

        let mut conn = self.0.acquire().await?;

        super::fetch_recipes(&mut conn, statement).await
    }

    pub async fn is_favorite(&self, user_id: &str, recipe_id: &str) -> crate::Result<bool> {
        let (sql, values) = sea_query::Query::select()
            .column(Favorite::RecipeId)
            .from(Favorite::Table)
            .and_where(Expr::col(Favorite::UserId).eq(user_id))
            .and_where(Expr::col(Favorite::RecipeId).eq(recipe_id))
            .limit(1)
            .build_sqlx(SqliteQueryBuilder);

        let row = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_optional(&self.0)
            .await?;

        Ok(row.is_some())
    }
}
