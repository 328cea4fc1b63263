use sea_orm_migration::prelude::*;

use crate::m20250711_083759_create_wishlist_entry_table::WishlistEntry;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(WishlistEntry::Table)
                    .name("idx_user_sub")
                    .col(WishlistEntry::UserSub)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .table(WishlistEntry::Table)
                    .name("idx_user_sub")
                    .to_owned(),
            )
            .await
    }
}
