use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WishlistEntry::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WishlistEntry::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(WishlistEntry::UserSub)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WishlistEntry::BlogId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WishlistEntry::Title)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WishlistEntry::ShortDescription)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WishlistEntry::LongDescription)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WishlistEntry::ImageUrl)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WishlistEntry::Category)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WishlistEntry::Date)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WishlistEntry::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop().table(WishlistEntry::Table).to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum WishlistEntry {
    Table,
    Id,
    UserSub,
    BlogId,
    Title,
    ShortDescription,
    LongDescription,
    ImageUrl,
    Category,
    Date,
    CreatedAt,
}
