use reqwest::header::{HeaderMap, HeaderValue};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{json, Value};

use crate::{IdentityError, IntoResponse, Response};

/// REST client for the identity toolkit endpoints the app signs users
/// in with.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

/// Session material returned by the sign up and sign in endpoints.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionTokens {
    pub local_id: String,
    pub email: String,
    pub id_token: String,
    pub refresh_token: String,
    pub expires_in: String,
    pub display_name: String,
    pub photo_url: String,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub local_id: String,
    pub email: String,
    pub display_name: String,
    pub photo_url: String,
}

impl Client {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert("Accept", HeaderValue::from_str("*/*").unwrap());
        headers.insert(
            "Content-Type",
            HeaderValue::from_str("application/json").unwrap(),
        );

        let client = reqwest::ClientBuilder::new()
            .default_headers(headers)
            .build()
            .unwrap();

        Self {
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
            client,
        }
    }

    pub async fn sign_up(&self, email: &str, password: &str) -> Response<SessionTokens> {
        let request = json!({
            "email": email,
            "password": password,
            "returnSecureToken": true,
        });

        self.post("accounts:signUp", request).await
    }

    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Response<SessionTokens> {
        let request = json!({
            "email": email,
            "password": password,
            "returnSecureToken": true,
        });

        self.post("accounts:signInWithPassword", request).await
    }

    /// Exchanges an OAuth access token for a session. `provider_id`
    /// names the upstream provider, e.g. `google.com`.
    pub async fn sign_in_with_idp(
        &self,
        provider_id: &str,
        access_token: &str,
    ) -> Response<SessionTokens> {
        let request = json!({
            "postBody": format!("access_token={}&providerId={}", access_token, provider_id),
            "requestUri": "http://localhost",
            "returnSecureToken": true,
            "returnIdpCredential": true,
        });

        self.post("accounts:signInWithIdp", request).await
    }

    pub async fn update_profile(
        &self,
        id_token: &str,
        display_name: Option<&str>,
        photo_url: Option<&str>,
    ) -> Response<Profile> {
        let mut request = json!({
            "idToken": id_token,
            "returnSecureToken": false,
        });
        if let Some(name) = display_name {
            request["displayName"] = json!(name);
        }
        if let Some(url) = photo_url {
            request["photoUrl"] = json!(url);
        }

        self.post("accounts:update", request).await
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, request: Value) -> Response<T> {
        let body =
            serde_json::to_string(&request).into_response("failed to serialize the request")?;

        let response = self
            .client
            .post(format!("{}/{}?key={}", self.base_url, path, self.api_key))
            .body(body)
            .send()
            .await
            .into_response("failed to reach the identity provider")?;

        let status = response.status();
        let text = response
            .text()
            .await
            .into_response("failed to read the identity response")?;

        if !status.is_success() {
            return Err(IdentityError::Provider {
                code: error_code(&text),
            });
        }

        serde_json::from_str(&text).into_response("failed to parse the identity response")
    }
}

/// Pulls the machine readable code out of a provider error payload. The
/// provider sometimes appends an explanation after the code, e.g.
/// "WEAK_PASSWORD : Password should be at least 6 characters".
fn error_code(text: &str) -> String {
    let message = serde_json::from_str::<Value>(text)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|error| error.get("message"))
                .and_then(|message| message.as_str())
                .map(str::to_string)
        })
        .unwrap_or_default();

    message
        .split([' ', ':'])
        .next()
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_session_tokens() {
        // Arrange
        let payload = r#"{
            "localId": "u1",
            "email": "a@example.com",
            "idToken": "token",
            "refreshToken": "refresh",
            "expiresIn": "3600"
        }"#;

        // Act
        let tokens: SessionTokens = serde_json::from_str(payload).unwrap();

        // Assert
        assert_eq!(tokens.local_id, "u1");
        assert_eq!(tokens.id_token, "token");
        assert_eq!(tokens.expires_in, "3600");
        assert_eq!(tokens.display_name, "");
    }

    #[test]
    fn test_parse_profile() {
        // Arrange
        let payload = r#"{
            "localId": "u1",
            "email": "a@example.com",
            "displayName": "Alice",
            "photoUrl": "https://example.com/a.png"
        }"#;

        // Act
        let profile: Profile = serde_json::from_str(payload).unwrap();

        // Assert
        assert_eq!(profile.display_name, "Alice");
        assert_eq!(profile.photo_url, "https://example.com/a.png");
    }

    #[test]
    fn test_error_code_is_taken_verbatim() {
        // Arrange
        let payload = r#"{"error": {"code": 400, "message": "EMAIL_EXISTS"}}"#;

        // Act
        let code = error_code(payload);

        // Assert
        assert_eq!(code, "EMAIL_EXISTS");
    }

    #[test]
    fn test_error_code_drops_the_appended_explanation() {
        // Arrange
        let payload = r#"{"error": {"code": 400, "message": "WEAK_PASSWORD : Password should be at least 6 characters"}}"#;

        // Act
        let code = error_code(payload);

        // Assert
        assert_eq!(code, "WEAK_PASSWORD");
    }

    #[test]
    fn test_error_code_of_a_malformed_payload_is_empty() {
        // Arrange
        let payload = "upstream proxy error";

        // Act
        let code = error_code(payload);

        // Assert
        assert_eq!(code, "");
    }
}
