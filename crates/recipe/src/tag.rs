use recipebook_db::table::{RecipeTag, Tag};
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::SqliteConnection;
use ulid::Ulid;

use crate::slugify;

/// Links `tags` to a recipe in the given order, creating each of the
/// owner's tags the first time its slug is seen. Callers pass already
/// normalized names.
pub(crate) async fn link_tags(
    conn: &mut SqliteConnection,
    owner_id: &str,
    recipe_id: &str,
    tags: &[String],
) -> crate::Result<()> {
    for (position, name) in tags.iter().enumerate() {
        let tag_id = find_or_create(conn, owner_id, name).await?;

        let statement = Query::insert()
            .into_table(RecipeTag::Table)
            .columns([RecipeTag::RecipeId, RecipeTag::TagId, RecipeTag::Position])
            .values_panic([recipe_id.into(), tag_id.into(), (position as i64).into()])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *conn).await?;
    }

    Ok(())
}

async fn find_or_create(
    conn: &mut SqliteConnection,
    owner_id: &str,
    name: &str,
) -> crate::Result<String> {
    let slug = slugify(name);

    let statement = Query::select()
        .column(Tag::Id)
        .from(Tag::Table)
        .and_where(Expr::col(Tag::OwnerId).eq(owner_id))
        .and_where(Expr::col(Tag::Slug).eq(slug.to_owned()))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let existing = sqlx::query_as_with::<_, (String,), _>(&sql, values)
        .fetch_optional(&mut *conn)
        .await?;

    if let Some((id,)) = existing {
        return Ok(id);
    }

    let id = Ulid::new().to_string();
    let statement = Query::insert()
        .into_table(Tag::Table)
        .columns([Tag::Id, Tag::OwnerId, Tag::Name, Tag::Slug, Tag::CreatedAt])
        .values_panic([
            id.to_owned().into(),
            owner_id.into(),
            name.into(),
            slug.into(),
            crate::now().into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(&mut *conn).await?;

    tracing::debug!(tag = %name, "tag created");

    Ok(id)
}
