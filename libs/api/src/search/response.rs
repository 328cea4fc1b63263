use chrono::{DateTime, Utc};
use ranking::search::Hit;
use serde::Serialize;
use utoipa::ToSchema;

/// A scored record in the blog wire shape. `category` carries the
/// derived topic, not the author-picked category, which is what the
/// search page renders on its hit cards.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchHitResp {
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
    pub search_score: f64,
    pub semantic_relevance: f64,
    pub matched_terms: Vec<String>,
    pub difficulty: String,
    pub reading_time: u32,
    pub views: u64,
    pub comments: u64,
    pub wishlist_count: u64,
}

impl From<Hit> for SearchHitResp {
    fn from(value: Hit) -> Self {
        Self {
            id: value.blog.id,
            title: value.blog.title,
            short_description: value.blog.short_description,
            long_description: value.blog.long_description,
            image_url: value.blog.image_url,
            category: value.topic.label().to_string(),
            date: value.blog.date,
            created_at: value.blog.created_at,
            search_score: value.score,
            semantic_relevance: value.semantic_relevance,
            matched_terms: value.matched_terms,
            difficulty: value.difficulty.label().to_string(),
            reading_time: value.reading_time_mins,
            views: value.views,
            comments: value.comments,
            wishlist_count: value.saves,
        }
    }
}
