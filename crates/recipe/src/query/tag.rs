use recipebook_db::table::{Recipe as RecipeTable, RecipeTag, Tag};
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

impl super::Query {
    /// Names of the owner's tags used on at least one of their recipes.
    pub async fn tags(&self, owner_id: &str) -> crate::Result<Vec<String>> {
        let (sql, values) = sea_query::Query::select()
            .distinct()
            .column((Tag::Table, Tag::Name))
            .from(Tag::Table)
            .inner_join(
                RecipeTag::Table,
                Expr::col((RecipeTag::Table, RecipeTag::TagId)).equals((Tag::Table, Tag::Id)),
            )
            .inner_join(
                RecipeTable::Table,
                Expr::col((RecipeTable::Table, RecipeTable::Id))
                    .equals((RecipeTag::Table, RecipeTag::RecipeId)),
            )
            .and_where(Expr::col((Tag::Table, Tag::OwnerId)).eq(owner_id))
            .and_where(Expr::col((RecipeTable::Table, RecipeTable::OwnerId)).eq(owner_id))
            .order_by((Tag::Table, Tag::Name), Order::Asc)
            .build_sqlx(SqliteQueryBuilder);

        let rows = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        Ok(rows.into_iter().map(|(name,)| name).collect())
    }
}
