use chrono::{DateTime, Utc};

/// A published article. `date` keeps the author supplied display date
/// verbatim while `created_at` records when the record landed here.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Blog {
    pub id: String,
    pub title: String,
    pub short_description: String,
    pub long_description: String,
    pub image_url: String,
    pub category: String,
    pub date: String,
    pub created_at: Option<DateTime<Utc>>,
}
