use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use super::operation;
use crate::table::RecipeIngredient;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(RecipeIngredient::Table)
        .col(
            ColumnDef::new(RecipeIngredient::RecipeId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(
            ColumnDef::new(RecipeIngredient::Position)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(RecipeIngredient::Item)
                .string()
                .not_null()
                .string_len(200),
        )
        .col(
            ColumnDef::new(RecipeIngredient::Quantity)
                .string()
                .not_null()
                .string_len(100)
                .default(""),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(RecipeIngredient::Table).to_owned()
}

operation!(CreateTable, create_table, drop_table);

fn create_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_recipe_ingredient_recipe")
        .table(RecipeIngredient::Table)
        .col(RecipeIngredient::RecipeId)
        .col(RecipeIngredient::Position)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_recipe_ingredient_recipe")
        .table(RecipeIngredient::Table)
        .to_owned()
}

operation!(CreateIdx1, create_idx_1, drop_idx_1);
