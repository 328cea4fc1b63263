use chrono::{DateTime, Utc};
use ranking::recommend::Recommendation;
use serde::Serialize;
use utoipa::ToSchema;

/// A recommended record in the blog wire shape, `category` rewritten
/// to the derived topic the way the recommendations page shows it.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResp {
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
    pub recommendation_score: f64,
    pub difficulty: String,
    pub reading_time: u32,
    pub engagement_score: u64,
}

impl From<Recommendation> for RecommendationResp {
    fn from(value: Recommendation) -> Self {
        Self {
            id: value.blog.id,
            title: value.blog.title,
            short_description: value.blog.short_description,
            long_description: value.blog.long_description,
            image_url: value.blog.image_url,
            category: value.topic.label().to_string(),
            date: value.blog.date,
            created_at: value.blog.created_at,
            recommendation_score: value.score,
            difficulty: value.difficulty.label().to_string(),
            reading_time: value.reading_time_mins,
            engagement_score: value.engagement_pct,
        }
    }
}
