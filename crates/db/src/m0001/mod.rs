use sqlx_migrator::vec_box;

/// Implements `sqlx_migrator::Operation` for a unit struct from a pair of
/// sea-query statement builders.
macro_rules! operation {
    ($name:ident, $up:path, $down:path) => {
        pub struct $name;

        #[async_trait::async_trait]
        impl sqlx_migrator::Operation<sqlx::Sqlite> for $name {
            async fn up(
                &self,
                connection: &mut sqlx::SqliteConnection,
            ) -> Result<(), sqlx_migrator::Error> {
                let statement = $up().to_string(sea_query::SqliteQueryBuilder);
                sqlx::query(&statement).execute(connection).await?;

                Ok(())
            }

            async fn down(
                &self,
                connection: &mut sqlx::SqliteConnection,
            ) -> Result<(), sqlx_migrator::Error> {
                let statement = $down().to_string(sea_query::SqliteQueryBuilder);
                sqlx::query(&statement).execute(connection).await?;

                Ok(())
            }
        }
    };
}

pub(crate) use operation;

mod category;
mod favorite;
mod recipe;
mod recipe_ingredient;
mod recipe_instruction;
mod recipe_tag;
mod tag;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "recipebook",
    "m0001",
    vec_box![],
    vec_box![
        recipe::CreateTable,
        recipe::CreateIdx1,
        recipe::CreateIdx2,
        recipe_ingredient::CreateTable,
        recipe_ingredient::CreateIdx1,
        recipe_instruction::CreateTable,
        recipe_instruction::CreateIdx1,
        tag::CreateTable,
        tag::CreateUk1,
        recipe_tag::CreateTable,
        recipe_tag::CreateUk1,
        category::CreateTable,
        category::CreateUk1,
        favorite::CreateTable,
        favorite::CreateUk1,
        favorite::CreateIdx1
    ]
);
