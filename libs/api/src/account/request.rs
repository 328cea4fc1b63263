use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterReq {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginReq {
    pub email: String,
    pub password: String,
}

/// The client forwards the OAuth access token it got from the popup
/// flow, e.g. `providerId: "google.com"`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OauthReq {
    pub provider_id: String,
    pub access_token: String,
}

/// Field names follow the client SDK, `photoURL` included.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProfileReq {
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
}
