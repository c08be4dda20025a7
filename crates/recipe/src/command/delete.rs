use recipebook_db::table::{
    Favorite, Recipe as RecipeTable, RecipeIngredient, RecipeInstruction, RecipeTag,
};
use sea_query::{DeleteStatement, Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::Error;

impl super::Command {
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, owner_id: &str, id: &str) -> crate::Result<()> {
        let mut tx = self.write_db.begin().await?;

        let statement = Query::delete()
            .from_table(RecipeTable::Table)
            .and_where(Expr::col(RecipeTable::Id).eq(id))
            .and_where(Expr::col(RecipeTable::OwnerId).eq(owner_id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound);
        }

        let children: [DeleteStatement; 4] = [
            Query::delete()
                .from_table(RecipeIngredient::Table)
                .and_where(Expr::col(RecipeIngredient::RecipeId).eq(id))
                .to_owned(),
            Query::delete()
                .from_table(RecipeInstruction::Table)
                .and_where(Expr::col(RecipeInstruction::RecipeId).eq(id))
                .to_owned(),
            Query::delete()
                .from_table(RecipeTag::Table)
                .and_where(Expr::col(RecipeTag::RecipeId).eq(id))
                .to_owned(),
            Query::delete()
                .from_table(Favorite::Table)
                .and_where(Expr::col(Favorite::RecipeId).eq(id))
                .to_owned(),
        ];

        for statement in children {
            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        }

        tx.commit().await?;

        tracing::info!(recipe_id = %id, "recipe deleted");

        Ok(())
    }
}
