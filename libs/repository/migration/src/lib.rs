pub use sea_orm_migration::prelude::*;

mod m20250704_091532_create_blog_table;
mod m20250704_092210_create_subscriber_table;
mod m20250711_083759_create_wishlist_entry_table;
mod m20250711_084512_create_user_table;
mod m20250802_101244_create_index_at_wishlist_entry;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250704_091532_create_blog_table::Migration),
            Box::new(m20250704_092210_create_subscriber_table::Migration),
            Box::new(m20250711_083759_create_wishlist_entry_table::Migration),
            Box::new(m20250711_084512_create_user_table::Migration),
            Box::new(
                m20250802_101244_create_index_at_wishlist_entry::Migration,
            ),
        ]
    }
}
