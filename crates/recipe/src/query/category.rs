use recipebook_db::{SYSTEM_OWNER, table::Category as CategoryTable};
use sea_query::{Expr, ExprTrait, Order, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::Category;

pub(crate) fn select_categories(owner_id: &str) -> SelectStatement {
    sea_query::Query::select()
        .columns([
            CategoryTable::Name,
            CategoryTable::Slug,
            CategoryTable::IsDefault,
        ])
        .from(CategoryTable::Table)
        .and_where(Expr::col(CategoryTable::OwnerId).is_in([SYSTEM_OWNER, owner_id]))
        .to_owned()
}

impl super::Query {
    /// Seeded categories first, then the owner's own, each group by name.
    pub async fn categories(&self, owner_id: &str) -> crate::Result<Vec<Category>> {
        let (sql, values) = select_categories(owner_id)
            .order_by(CategoryTable::IsDefault, Order::Desc)
            .order_by(CategoryTable::Name, Order::Asc)
            .build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, Category, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    pub async fn category(&self, owner_id: &str, slug: &str) -> crate::Result<Option<Category>> {
        let (sql, values) = select_categories(owner_id)
            .and_where(Expr::col(CategoryTable::Slug).eq(slug))
            .order_by(CategoryTable::IsDefault, Order::Desc)
            .limit(1)
            .build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, Category, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?)
    }
}
