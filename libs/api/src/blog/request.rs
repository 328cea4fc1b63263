use serde::Deserialize;
use utoipa::ToSchema;

/// The editor submits blogs form encoded, one field per input.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogForm {
    pub title: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    pub category: String,
    pub date: String,
    pub short_description: String,
    pub long_description: String,
}
