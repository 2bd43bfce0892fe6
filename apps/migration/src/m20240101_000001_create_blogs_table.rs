use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Blogs::Table)
                    .if_not_exists()
                    .col(pk_auto(Blogs::Id))
                    .col(string_len(Blogs::Title, 200))
                    .col(string_len_uniq(Blogs::Slug, 200))
                    .col(string_len(Blogs::Category, 100))
                    .col(text(Blogs::Content))
                    .col(timestamp_with_time_zone(Blogs::DateCreated))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_blogs_category")
                    .table(Blogs::Table)
                    .col(Blogs::Category)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Blogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Blogs {
    Table,
    Id,
    Title,
    Slug,
    Category,
    Content,
    DateCreated,
}
