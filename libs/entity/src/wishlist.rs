use chrono::{DateTime, Utc};

/// A saved blog. Carries a denormalized copy of the blog fields taken
/// at save time.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct WishlistEntry {
    pub id: String,
    pub user_sub: String,
    pub blog_id: String,
    pub title: String,
    pub short_description: String,
    pub long_description: String,
    pub image_url: String,
    pub category: String,
    pub date: String,
    pub created_at: DateTime<Utc>,
}
