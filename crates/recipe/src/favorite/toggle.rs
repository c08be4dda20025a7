use recipebook_db::table::{Favorite, Recipe as RecipeTable};
use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::{Error, FavoriteState};

impl crate::Command {
    /// Flips the user's favorite mark on a recipe and keeps the recipe's
    /// favorite counter in step. The counter never drops below zero.
    #[tracing::instrument(skip(self))]
    pub async fn toggle_favorite(
        &self,
        user_id: &str,
        recipe_id: &str,
    ) -> crate::Result<FavoriteState> {
        let mut tx = self.write_db.begin().await?;

        let (sql, values) = sea_query::Query::select()
            .column(RecipeTable::Id)
            .from(RecipeTable::Table)
            .and_where(Expr::col(RecipeTable::Id).eq(recipe_id))
            .and_where(Expr::col(RecipeTable::OwnerId).eq(user_id))
            .build_sqlx(SqliteQueryBuilder);

        if sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_optional(&mut *tx)
            .await?
            .is_none()
        {
            return Err(Error::NotFound);
        }

        let (sql, values) = sea_query::Query::delete()
            .from_table(Favorite::Table)
            .and_where(Expr::col(Favorite::RecipeId).eq(recipe_id))
            .and_where(Expr::col(Favorite::UserId).eq(user_id))
            .build_sqlx(SqliteQueryBuilder);

        let removed = sqlx::query_with(&sql, values)
            .execute(&mut *tx)
            .await?
            .rows_affected()
            > 0;

        let mut update = sea_query::Query::update()
            .table(RecipeTable::Table)
            .and_where(Expr::col(RecipeTable::Id).eq(recipe_id))
            .to_owned();

        if removed {
            update
                .value(RecipeTable::Favorites, Expr::col(RecipeTable::Favorites).sub(1))
                .and_where(Expr::col(RecipeTable::Favorites).gt(0));
        } else {
            let (sql, values) = sea_query::Query::insert()
                .into_table(Favorite::Table)
                .columns([Favorite::RecipeId, Favorite::UserId, Favorite::CreatedAt])
                .values_panic([recipe_id.into(), user_id.into(), crate::now().into()])
                .build_sqlx(SqliteQueryBuilder);

            sqlx::query_with(&sql, values).execute(&mut *tx).await?;

            update.value(RecipeTable::Favorites, Expr::col(RecipeTable::Favorites).add(1));
        }

        let (sql, values) = update.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        let (sql, values) = sea_query::Query::select()
            .column(RecipeTable::Favorites)
            .from(RecipeTable::Table)
            .and_where(Expr::col(RecipeTable::Id).eq(recipe_id))
            .build_sqlx(SqliteQueryBuilder);

        let (favorites,) = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        let state = FavoriteState {
            favorited: !removed,
            favorites,
        };

        tracing::info!(favorited = state.favorited, favorites, "favorite toggled");

        Ok(state)
    }
}
