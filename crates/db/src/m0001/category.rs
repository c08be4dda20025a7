use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use super::operation;
use crate::table::Category;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Category::Table)
        .col(
            ColumnDef::new(Category::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(Category::OwnerId)
                .string()
                .not_null()
                .string_len(64),
        )
        .col(
            ColumnDef::new(Category::Name)
                .string()
                .not_null()
                .string_len(100),
        )
        .col(
            ColumnDef::new(Category::Slug)
                .string()
                .not_null()
                .string_len(100),
        )
        .col(
            ColumnDef::new(Category::IsDefault)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(ColumnDef::new(Category::CreatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Category::Table).to_owned()
}

operation!(CreateTable, create_table, drop_table);

fn create_uk_1() -> IndexCreateStatement {
    Index::create()
        .name("uk_category_owner_slug")
        .table(Category::Table)
        .unique()
        .col(Category::OwnerId)
        .col(Category::Slug)
        .to_owned()
}

fn drop_uk_1() -> IndexDropStatement {
    Index::drop()
        .name("uk_category_owner_slug")
        .table(Category::Table)
        .to_owned()
}

operation!(CreateUk1, create_uk_1, drop_uk_1);
