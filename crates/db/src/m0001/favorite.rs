use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use super::operation;
use crate::table::Favorite;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Favorite::Table)
        .col(
            ColumnDef::new(Favorite::RecipeId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(
            ColumnDef::new(Favorite::UserId)
                .string()
                .not_null()
                .string_len(64),
        )
        .col(ColumnDef::new(Favorite::CreatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Favorite::Table).to_owned()
}

operation!(CreateTable, create_table, drop_table);

fn create_uk_1() -> IndexCreateStatement {
    Index::create()
        .name("uk_favorite_recipe_user")
        .table(Favorite::Table)
        .unique()
        .col(Favorite::RecipeId)
        .col(Favorite::UserId)
        .to_owned()
}

fn drop_uk_1() -> IndexDropStatement {
    Index::drop()
        .name("uk_favorite_recipe_user")
        .table(Favorite::Table)
        .to_owned()
}

operation!(CreateUk1, create_uk_1, drop_uk_1);

fn create_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_favorite_user")
        .table(Favorite::Table)
        .col(Favorite::UserId)
        .col(Favorite::CreatedAt)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_favorite_user")
        .table(Favorite::Table)
        .to_owned()
}

operation!(CreateIdx1, create_idx_1, drop_idx_1);
