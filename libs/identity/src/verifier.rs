use std::collections::HashMap;

use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::{IdentityError, IntoResponse, Response};

/// Claims carried by a provider issued ID token.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Claims {
    pub sub: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub picture: Option<String>,
    pub aud: String,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
}

/// Verifies RS256 ID tokens against the provider's published JWKS.
pub struct Verifier {
    jwks_url: String,
    validation: Validation,
    client: reqwest::Client,
    keys: RwLock<HashMap<String, DecodingKey>>,
}

#[derive(Debug, Deserialize)]
struct JwkSet {
    keys: Vec<Jwk>,
}

#[derive(Debug, Deserialize)]
struct Jwk {
    kid: String,
    n: String,
    e: String,
}

impl Verifier {
    pub fn new(jwks_url: &str, issuer: &str, audience: &str) -> Self {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_issuer(&[issuer]);
        validation.set_audience(&[audience]);

        Self {
            jwks_url: jwks_url.to_string(),
            validation,
            client: reqwest::Client::new(),
            keys: RwLock::new(HashMap::new()),
        }
    }

    pub async fn verify(&self, token: &str) -> Response<Claims> {
        let header = decode_header(token).into_response("failed to decode the token header")?;
        let Some(kid) = header.kid else {
            return Err(IdentityError::UnknownKey {
                kid: "<none>".to_string(),
            });
        };

        if let Some(claims) = self.decode_with_cached_key(token, &kid).await? {
            return Ok(claims);
        }

        // An unknown kid usually means the provider rotated its keys.
        self.refresh_keys().await?;

        if let Some(claims) = self.decode_with_cached_key(token, &kid).await? {
            return Ok(claims);
        }

        Err(IdentityError::UnknownKey { kid })
    }

    async fn decode_with_cached_key(&self, token: &str, kid: &str) -> Response<Option<Claims>> {
        let keys = self.keys.read().await;
        let Some(key) = keys.get(kid) else {
            return Ok(None);
        };

        let data = decode::<Claims>(token, key, &self.validation)
            .into_response("failed to verify the token")?;

        Ok(Some(data.claims))
    }

    async fn refresh_keys(&self) -> Response<()> {
        let response = self
            .client
            .get(&self.jwks_url)
            .send()
            .await
            .into_response("failed to fetch the signing keys")?;

        let text = response
            .text()
            .await
            .into_response("failed to read the signing keys")?;

        let jwks: JwkSet =
            serde_json::from_str(&text).into_response("failed to parse the signing keys")?;

        let mut keys = self.keys.write().await;
        keys.clear();
        for jwk in jwks.keys {
            let key = DecodingKey::from_rsa_components(&jwk.n, &jwk.e)
                .into_response("failed to build a decoding key")?;
            keys.insert(jwk.kid, key);
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_claims() {
        // Arrange
        let payload = r#"{
            "sub": "u1",
            "email": "a@example.com",
            "name": "Alice",
            "aud": "devscoop-83d29",
            "iss": "https://securetoken.google.com/devscoop-83d29",
            "iat": 1719900000,
            "exp": 1719903600
        }"#;

        // Act
        let claims: Claims = serde_json::from_str(payload).unwrap();

        // Assert
        assert_eq!(claims.sub, "u1");
        assert_eq!(claims.email.as_deref(), Some("a@example.com"));
        assert_eq!(claims.picture, None);
        assert_eq!(claims.exp, 1719903600);
    }

    #[test]
    fn test_parse_jwk_set() {
        // Arrange
        let payload = r#"{
            "keys": [
                {"kty": "RSA", "alg": "RS256", "use": "sig", "kid": "k1", "n": "abc", "e": "AQAB"},
                {"kty": "RSA", "alg": "RS256", "use": "sig", "kid": "k2", "n": "def", "e": "AQAB"}
            ]
        }"#;

        // Act
        let jwks: JwkSet = serde_json::from_str(payload).unwrap();

        // Assert
        assert_eq!(jwks.keys.len(), 2);
        assert_eq!(jwks.keys[0].kid, "k1");
        assert_eq!(jwks.keys[1].n, "def");
    }
}
