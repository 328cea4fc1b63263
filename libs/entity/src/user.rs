use chrono::NaiveDateTime;

/// Local mirror of an identity provider account, keyed by `sub`.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct User {
    pub id: i32,
    pub sub: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
