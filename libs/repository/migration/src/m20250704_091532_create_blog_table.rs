use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Blog::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Blog::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Blog::Title).string().not_null())
                    .col(
                        ColumnDef::new(Blog::ShortDescription)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Blog::LongDescription)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Blog::ImageUrl).string().not_null())
                    .col(ColumnDef::new(Blog::Category).string().not_null())
                    .col(ColumnDef::new(Blog::Date).string().not_null())
                    // Nullable: imported records may predate the column.
                    .col(ColumnDef::new(Blog::CreatedAt).date_time())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Blog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Blog {
    Table,
    Id,
    Title,
    ShortDescription,
    LongDescription,
    ImageUrl,
    Category,
    Date,
    CreatedAt,
}
