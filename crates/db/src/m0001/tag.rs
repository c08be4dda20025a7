use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use super::operation;
use crate::table::Tag;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Tag::Table)
        .col(
            ColumnDef::new(Tag::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(ColumnDef::new(Tag::OwnerId).string().not_null().string_len(64))
        .col(ColumnDef::new(Tag::Name).string().not_null().string_len(50))
        .col(ColumnDef::new(Tag::Slug).string().not_null().string_len(50))
        .col(ColumnDef::new(Tag::CreatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Tag::Table).to_owned()
}

operation!(CreateTable, create_table, drop_table);

fn create_uk_1() -> IndexCreateStatement {
    Index::create()
        .name("uk_tag_owner_id_slug")
        .table(Tag::Table)
        .unique()
        .col(Tag::OwnerId)
        .col(Tag::Slug)
        .to_owned()
}

fn drop_uk_1() -> IndexDropStatement {
    Index::drop().name("uk_tag_owner_id_slug").table(Tag::Table).to_owned()
}

operation!(CreateUk1, create_uk_1, drop_uk_1);
