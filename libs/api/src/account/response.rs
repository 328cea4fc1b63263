use identity::client::{Profile, SessionTokens};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionResp {
    pub local_id: String,
    pub email: String,
    pub id_token: String,
    pub refresh_token: String,
    pub expires_in: String,
    pub display_name: String,
    pub photo_url: String,
}

impl From<SessionTokens> for SessionResp {
    fn from(value: SessionTokens) -> Self {
        Self {
            local_id: value.local_id,
            email: value.email,
            id_token: value.id_token,
            refresh_token: value.refresh_token,
            expires_in: value.expires_in,
            display_name: value.display_name,
            photo_url: value.photo_url,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResp {
    pub local_id: String,
    pub email: String,
    pub display_name: String,
    pub photo_url: String,
}

impl From<Profile> for ProfileResp {
    fn from(value: Profile) -> Self {
        Self {
            local_id: value.local_id,
            email: value.email,
            display_name: value.display_name,
            photo_url: value.photo_url,
        }
    }
}

#[cfg(test)]
mod test {
    use identity::client::SessionTokens;

    use crate::account::response::SessionResp;

    #[test]
    fn test_session_resp_uses_the_sdk_field_names() {
        // Arrange
        let tokens = SessionTokens {
            local_id: "u1".to_string(),
            email: "a@example.com".to_string(),
            id_token: "token".to_string(),
            refresh_token: "refresh".to_string(),
            expires_in: "3600".to_string(),
            display_name: "Alice".to_string(),
            photo_url: "".to_string(),
        };

        // Act
        let json = serde_json::to_value(SessionResp::from(tokens)).unwrap();

        // Assert
        assert_eq!(json["localId"], "u1");
        assert_eq!(json["idToken"], "token");
        assert_eq!(json["refreshToken"], "refresh");
        assert_eq!(json["expiresIn"], "3600");
        assert_eq!(json["displayName"], "Alice");
    }
}
