use serde::Deserialize;
use utoipa::ToSchema;

/// The client posts the blog record it wants saved, mongo id and all.
/// Unknown extras like the blog's own createdAt are dropped.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveWishlistReq {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub long_description: String,
    #[serde(rename = "imageURL", default)]
    pub image_url: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub date: String,
}
