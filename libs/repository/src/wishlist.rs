use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::active_models::{prelude::*, *};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct WishlistRepository {
    db: DatabaseConnection,
}

impl WishlistRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<wishlist_entry::Model> for WishlistEntryEntity {
    fn from(value: wishlist_entry::Model) -> Self {
        Self {
            id: value.id,
            user_sub: value.user_sub,
            blog_id: value.blog_id,
            title: value.title,
            short_description: value.short_description,
            long_description: value.long_description,
            image_url: value.image_url,
            category: value.category,
            date: value.date,
            created_at: value.created_at.and_utc(),
        }
    }
}

impl WishlistRepository {
    pub async fn find_by_user(&self, user_sub: &str) -> anyhow::Result<Vec<WishlistEntryEntity>> {
        let entries = WishlistEntry::find()
            .filter(wishlist_entry::Column::UserSub.eq(user_sub))
            .order_by_desc(wishlist_entry::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(entries.into_iter().map(WishlistEntryEntity::from).collect())
    }

    pub async fn find_by_user_and_blog(
        &self,
        user_sub: &str,
        blog_id: &str,
    ) -> anyhow::Result<Option<WishlistEntryEntity>> {
        let entry = WishlistEntry::find()
            .filter(wishlist_entry::Column::UserSub.eq(user_sub))
            .filter(wishlist_entry::Column::BlogId.eq(blog_id))
            .one(&self.db)
            .await?;

        Ok(entry.map(WishlistEntryEntity::from))
    }

    pub async fn save(&self, entry: WishlistEntryEntity) -> anyhow::Result<String> {
        let id = if entry.id.is_empty() {
            Uuid::new_v4().to_string()
        } else {
            entry.id.clone()
        };

        let created_at = if entry.created_at == DateTime::<Utc>::default() {
            Utc::now().naive_utc()
        } else {
            entry.created_at.naive_utc()
        };

        let model = wishlist_entry::ActiveModel {
            id: ActiveValue::Set(id.clone()),
            user_sub: ActiveValue::Set(entry.user_sub),
            blog_id: ActiveValue::Set(entry.blog_id),
            title: ActiveValue::Set(entry.title),
            short_description: ActiveValue::Set(entry.short_description),
            long_description: ActiveValue::Set(entry.long_description),
            image_url: ActiveValue::Set(entry.image_url),
            category: ActiveValue::Set(entry.category),
            date: ActiveValue::Set(entry.date),
            created_at: ActiveValue::Set(created_at),
        };

        WishlistEntry::insert(model).exec(&self.db).await?;

        Ok(id)
    }

    /// Deletes one saved entry. Filtering on the owner as well keeps users
    /// from removing entries that are not theirs.
    pub async fn delete(&self, user_sub: &str, id: &str) -> anyhow::Result<u64> {
        let result = WishlistEntry::delete_many()
            .filter(wishlist_entry::Column::Id.eq(id))
            .filter(wishlist_entry::Column::UserSub.eq(user_sub))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Counts saved entries per blog across all users.
    pub async fn count_by_blog(&self) -> anyhow::Result<HashMap<String, u64>> {
        let entries = WishlistEntry::find().all(&self.db).await?;

        let mut counts = HashMap::new();
        for entry in entries {
            *counts.entry(entry.blog_id).or_insert(0) += 1;
        }

        Ok(counts)
    }
}
