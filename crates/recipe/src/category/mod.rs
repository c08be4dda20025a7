use recipebook_db::{SYSTEM_OWNER, table::Category as CategoryTable};
use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::SqliteConnection;

use crate::Category;

mod create;
mod delete;
mod ensure;
mod seed;

pub use create::CreateCategoryInput;

/// Categories seeded on init, visible to every user and never deletable.
pub const DEFAULT_CATEGORIES: [&str; 7] = [
    "Desayunos",
    "Entradas",
    "Platos principales",
    "Sopas",
    "Ensaladas",
    "Postres",
    "Bebidas",
];

async fn find_visible(
    conn: &mut SqliteConnection,
    owner_id: &str,
    slug: &str,
) -> crate::Result<Option<Category>> {
    let (sql, values) = sea_query::Query::select()
        .columns([
            CategoryTable::Name,
            CategoryTable::Slug,
            CategoryTable::IsDefault,
        ])
        .from(CategoryTable::Table)
        .and_where(Expr::col(CategoryTable::OwnerId).is_in([SYSTEM_OWNER, owner_id]))
        .and_where(Expr::col(CategoryTable::Slug).eq(slug))
        .limit(1)
        .build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, Category, _>(&sql, values)
        .fetch_optional(&mut *conn)
        .await?)
}

/// Inserts a category row. With `ignore_existing` an existing
/// `(owner, slug)` pair is left untouched; otherwise it fails with a unique
/// violation.
async fn insert(
    conn: &mut SqliteConnection,
    owner_id: &str,
    name: &str,
    slug: &str,
    is_default: bool,
    ignore_existing: bool,
) -> Result<(), sqlx::Error> {
    let mut statement = sea_query::Query::insert()
        .into_table(CategoryTable::Table)
        .columns([
            CategoryTable::Id,
            CategoryTable::OwnerId,
            CategoryTable::Name,
            CategoryTable::Slug,
            CategoryTable::IsDefault,
            CategoryTable::CreatedAt,
        ])
        .values_panic([
            ulid::Ulid::new().to_string().into(),
            owner_id.into(),
            name.into(),
            slug.into(),
            is_default.into(),
            crate::now().into(),
        ])
        .to_owned();

    if ignore_existing {
        statement.on_conflict(
            sea_query::OnConflict::columns([CategoryTable::OwnerId, CategoryTable::Slug])
                .do_nothing()
                .to_owned(),
        );
    }

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(&mut *conn).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
    use std::str::FromStr;

    async fn pool(dir: &temp_dir::TempDir) -> SqlitePool {
        let url = format!("sqlite:{}", dir.child("db.sqlite3").to_str().unwrap());
        let opts = SqliteConnectOptions::from_str(&url)
            .unwrap()
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(opts).await.unwrap();
        recipebook_db::migrate(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn duplicate_insert_fails_unless_ignored() {
        let dir = temp_dir::TempDir::new().unwrap();
        let pool = pool(&dir).await;
        let mut conn = pool.acquire().await.unwrap();

        super::insert(&mut conn, "ana", "Tapas", "tapas", false, false)
            .await
            .unwrap();

        let err = super::insert(&mut conn, "ana", "TAPAS", "tapas", false, false)
            .await
            .unwrap_err();
        assert!(matches!(err, sqlx::Error::Database(e) if e.is_unique_violation()));

        super::insert(&mut conn, "ana", "TAPAS", "tapas", false, true)
            .await
            .unwrap();

        let (count, name): (i64, String) =
            sqlx::query_as("SELECT COUNT(*), MIN(name) FROM category WHERE slug = 'tapas'")
                .fetch_one(&mut *conn)
                .await
                .unwrap();
        assert_eq!(count, 1);
        assert_eq!(name, "Tapas");
    }
}
