use chrono::{DateTime, Utc};
use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// A saved record sent back in the blog wire shape. `_id` is the entry
/// id, not the blog id, so deletes round trip.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WishlistBlogResp {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub short_description: String,
    pub long_description: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    pub category: String,
    pub date: String,
    pub created_at: DateTime<Utc>,
}

impl From<WishlistEntryEntity> for WishlistBlogResp {
    fn from(value: WishlistEntryEntity) -> Self {
        Self {
            id: value.id,
            title: value.title,
            short_description: value.short_description,
            long_description: value.long_description,
            image_url: value.image_url,
            category: value.category,
            date: value.date,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertedResp {
    pub inserted_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeletedResp {
    pub deleted_count: u64,
}

#[cfg(test)]
mod test {
    use entity::prelude::*;

    use crate::wishlist::response::WishlistBlogResp;

    #[test]
    fn test_the_entry_id_rides_in_the_id_slot() {
        // Arrange
        let entry = WishlistEntryEntity {
            id: "entry-1".to_string(),
            blog_id: "blog-9".to_string(),
            title: "Intro to React Hooks".to_string(),
            ..Default::default()
        };

        // Act
        let json = serde_json::to_value(WishlistBlogResp::from(entry)).unwrap();

        // Assert
        assert_eq!(json["_id"], "entry-1");
        assert!(json.get("blogId").is_none());
    }
}
