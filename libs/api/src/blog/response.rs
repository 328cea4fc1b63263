use chrono::{DateTime, Utc};
use entity::prelude::*;
use ranking::text;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogResp {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub short_description: String,
    pub long_description: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    pub category: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<BlogEntity> for BlogResp {
    fn from(value: BlogEntity) -> Self {
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
pub struct FeaturedBlogResp {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub short_description: String,
    pub long_description: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    pub category: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    pub word_count: u64,
}

impl From<BlogEntity> for FeaturedBlogResp {
    fn from(value: BlogEntity) -> Self {
        let word_count = text::word_count(&value.long_description) as u64;

        Self {
            id: value.id,
            title: value.title,
            short_description: value.short_description,
            long_description: value.long_description,
            image_url: value.image_url,
            category: value.category,
            date: value.date,
            created_at: value.created_at,
            word_count,
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
pub struct ModifiedResp {
    pub modified_count: u64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeletedResp {
    pub deleted_count: u64,
}

#[cfg(test)]
mod test {
    use chrono::{TimeZone, Utc};
    use entity::prelude::*;

    use crate::blog::response::{BlogResp, FeaturedBlogResp};

    #[test]
    fn test_blog_resp_keeps_the_deployed_field_names() {
        // Arrange
        let blog = BlogEntity {
            id: "b-1".to_string(),
            title: "Intro to React Hooks".to_string(),
            short_description: "Hooks in five minutes".to_string(),
            long_description: "useState and useEffect explained".to_string(),
            image_url: "https://example.com/hooks.png".to_string(),
            category: "Technology".to_string(),
            date: "2025-07-01".to_string(),
            created_at: Some(Utc.with_ymd_and_hms(2025, 7, 1, 8, 30, 0).unwrap()),
        };

        // Act
        let json = serde_json::to_value(BlogResp::from(blog)).unwrap();

        // Assert
        assert_eq!(json["_id"], "b-1");
        assert_eq!(json["shortDescription"], "Hooks in five minutes");
        assert_eq!(json["imageURL"], "https://example.com/hooks.png");
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn test_missing_created_at_is_omitted() {
        // Arrange
        let blog = BlogEntity {
            id: "b-2".to_string(),
            ..Default::default()
        };

        // Act
        let json = serde_json::to_value(BlogResp::from(blog)).unwrap();

        // Assert
        assert!(json.get("createdAt").is_none());
    }

    #[test]
    fn test_featured_resp_counts_words() {
        // Arrange
        let blog = BlogEntity {
            id: "b-3".to_string(),
            long_description: "one two three".to_string(),
            ..Default::default()
        };

        // Act
        let resp = FeaturedBlogResp::from(blog);

        // Assert
        assert_eq!(resp.word_count, 3);
    }
}
