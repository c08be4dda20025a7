use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use super::operation;
use crate::table::Recipe;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Recipe::Table)
        .col(
            ColumnDef::new(Recipe::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(Recipe::OwnerId)
                .string()
                .not_null()
                .string_len(64),
        )
        .col(
            ColumnDef::new(Recipe::Title)
                .string()
                .not_null()
                .string_len(200),
        )
        .col(
            ColumnDef::new(Recipe::Description)
                .string()
                .not_null()
                .string_len(2000)
                .default(""),
        )
        .col(
            ColumnDef::new(Recipe::PrepTime)
                .string()
                .not_null()
                .string_len(50)
                .default(""),
        )
        .col(
            ColumnDef::new(Recipe::CookTime)
                .string()
                .not_null()
                .string_len(50)
                .default(""),
        )
        .col(
            ColumnDef::new(Recipe::Servings)
                .integer()
                .not_null()
                .default(1),
        )
        .col(
            ColumnDef::new(Recipe::Difficulty)
                .string()
                .not_null()
                .string_len(10),
        )
        .col(ColumnDef::new(Recipe::Category).string().null().string_len(100))
        .col(
            ColumnDef::new(Recipe::Temperature)
                .string()
                .null()
                .string_len(50),
        )
        .col(ColumnDef::new(Recipe::ImageUrl).string().null())
        .col(
            ColumnDef::new(Recipe::Rating)
                .double()
                .not_null()
                .default(0.0),
        )
        .col(
            ColumnDef::new(Recipe::Favorites)
                .integer()
                .not_null()
                .default(0),
        )
        .col(ColumnDef::new(Recipe::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(Recipe::UpdatedAt).big_integer().null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Recipe::Table).to_owned()
}

operation!(CreateTable, create_table, drop_table);

fn create_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_recipe_owner_created")
        .table(Recipe::Table)
        .col(Recipe::OwnerId)
        .col(Recipe::CreatedAt)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_recipe_owner_created")
        .table(Recipe::Table)
        .to_owned()
}

operation!(CreateIdx1, create_idx_1, drop_idx_1);

fn create_idx_2() -> IndexCreateStatement {
    Index::create()
        .name("idx_recipe_owner_category")
        .table(Recipe::Table)
        .col(Recipe::OwnerId)
        .col(Recipe::Category)
        .to_owned()
}

fn drop_idx_2() -> IndexDropStatement {
    Index::drop()
        .name("idx_recipe_owner_category")
        .table(Recipe::Table)
        .to_owned()
}

operation!(CreateIdx2, create_idx_2, drop_idx_2);
