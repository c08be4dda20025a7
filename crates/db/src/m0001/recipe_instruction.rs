use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use super::operation;
use crate::table::RecipeInstruction;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(RecipeInstruction::Table)
        .col(
            ColumnDef::new(RecipeInstruction::RecipeId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(
            ColumnDef::new(RecipeInstruction::Position)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(RecipeInstruction::Body)
                .string()
                .not_null()
                .string_len(2000),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(RecipeInstruction::Table).to_owned()
}

operation!(CreateTable, create_table, drop_table);

fn create_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_recipe_instruction_recipe")
        .table(RecipeInstruction::Table)
        .col(RecipeInstruction::RecipeId)
        .col(RecipeInstruction::Position)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_recipe_instruction_recipe")
        .table(RecipeInstruction::Table)
        .to_owned()
}

operation!(CreateIdx1, create_idx_1, drop_idx_1);
