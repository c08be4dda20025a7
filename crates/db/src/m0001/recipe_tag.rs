use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use super::operation;
use crate::table::RecipeTag;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(RecipeTag::Table)
        .col(
            ColumnDef::new(RecipeTag::RecipeId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(
            ColumnDef::new(RecipeTag::TagId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(ColumnDef::new(RecipeTag::Position).integer().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(RecipeTag::Table).to_owned()
}

operation!(CreateTable, create_table, drop_table);

fn create_uk_1() -> IndexCreateStatement {
    Index::create()
        .name("uk_recipe_tag")
        .table(RecipeTag::Table)
        .unique()
        .col(RecipeTag::RecipeId)
        .col(RecipeTag::TagId)
        .to_owned()
}

fn drop_uk_1() -> IndexDropStatement {
    Index::drop()
        .name("uk_recipe_tag")
        .table(RecipeTag::Table)
        .to_owned()
}

operation!(CreateUk1, create_uk_1, drop_uk_1);
