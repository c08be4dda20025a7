use recipebook_db::table::Category as CategoryTable;
use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::{Error, slugify};

impl crate::Command {
    /// Removes one of the user's categories, looked up by the slug of
    /// `slug` so names are accepted too. Recipes filed under it keep their
    /// category slug.
    #[tracing::instrument(skip(self))]
    pub async fn delete_category(&self, owner_id: &str, slug: &str) -> crate::Result<()> {
        let slug = slugify(slug);
        if slug.is_empty() {
            return Err(Error::NotFound);
        }

        let mut tx = self.write_db.begin().await?;

        let Some(category) = super::find_visible(&mut tx, owner_id, &slug).await? else {
            return Err(Error::NotFound);
        };

        if category.is_default {
            return Err(Error::Forbidden(format!(
                "default category '{slug}' cannot be deleted"
            )));
        }

        let (sql, values) = sea_query::Query::delete()
            .from_table(CategoryTable::Table)
            .and_where(Expr::col(CategoryTable::OwnerId).eq(owner_id))
            .and_where(Expr::col(CategoryTable::Slug).eq(slug.as_str()))
            .build_sqlx(SqliteQueryBuilder);

        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        tx.commit().await?;

        tracing::info!(%slug, "category deleted");

        Ok(())
    }
}
