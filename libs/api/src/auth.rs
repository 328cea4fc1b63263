use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{self, HeaderMap},
    middleware::Next,
    response::Response,
};
use entity::prelude::*;
use tracing::error;

pub use identity::verifier::Claims;

use crate::{ApiError, ApiState};

pub async fn auth(
    State(state): State<Arc<ApiState>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(token) = bearer_token(req.headers()) else {
        return Err(ApiError::AuthError(
            "Authorization header is missing".to_string(),
        ));
    };
    let token = token.to_string();

    let claims = state
        .verifier
        .verify(&token)
        .await
        .map_err(|e| ApiError::AuthError(e.to_string()))?;

    // A failed mirror write must not fail the request.
    let result = state
        .repo
        .user
        .save(UserEntity {
            sub: claims.sub.clone(),
            email: claims.email.clone(),
            display_name: claims.name.clone(),
            photo_url: claims.picture.clone(),
            ..Default::default()
        })
        .await;
    if let Err(e) = result {
        error!(task = "refresh user mirror", error = e.to_string());
    }

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
}

#[cfg(test)]
mod test {
    use axum::http::{header, HeaderMap, HeaderValue};

    use crate::auth::bearer_token;

    #[test]
    fn test_bearer_token_is_extracted() {
        // Arrange
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc.def.ghi"),
        );

        // Act
        let token = bearer_token(&headers);

        // Assert
        assert_eq!(token, Some("abc.def.ghi"));
    }

    #[test]
    fn test_missing_header_yields_none() {
        // Act & Assert
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_non_bearer_schemes_are_rejected() {
        // Arrange
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcjpwYXNz"),
        );

        // Act & Assert
        assert_eq!(bearer_token(&headers), None);
    }
}
