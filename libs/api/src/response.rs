use axum::{http::StatusCode, response::IntoResponse};
use identity::IdentityError;
use tracing::error;

use crate::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status_code;
        let mut _message = "".to_string();

        match self {
            ApiError::AuthError(message) => {
                status_code = StatusCode::UNAUTHORIZED;
                _message = message;
            }
            ApiError::ClientError(message) => {
                status_code = StatusCode::BAD_REQUEST;
                _message = message;
            }
            ApiError::ServerError(message) => {
                status_code = StatusCode::INTERNAL_SERVER_ERROR;
                _message = message;
            }
        }
        (status_code, _message).into_response()
    }
}

pub type ApiResponse<T> = Result<T, ApiError>;

fn error_message(error_code: &str) -> &'static str {
    match error_code {
        "400-001" => "Password must be at least 6 characters!",
        "502-001" => "Failed to load blogs. Please try again later.",
        "502-002" => "Failed to load the blog. Please try again later.",
        "502-003" => "Failed to publish the blog. Please try again later.",
        "502-004" => "Failed to update the blog. Please try again later.",
        "502-005" => "Failed to delete the blog. Please try again later.",
        "502-006" => "Failed to subscribe. Please try again later.",
        "502-007" => "Failed to load search results. Please try again later.",
        "502-008" => "Failed to load recommendations. Please try again later.",
        "502-009" => "Failed to load analytics. Please try again later.",
        "502-010" => "Failed to load the wishlist. Please try again later.",
        "502-011" => "Failed to save to the wishlist. Please try again later.",
        "502-012" => "Failed to remove from the wishlist. Please try again later.",
        "502-013" => "Failed to reach the sign-in service. Please try again later.",
        "502-014" => "Failed to update the profile. Please try again later.",
        _ => "An error occurred. Please try again.",
    }
}

/// Client-facing wording for the identity provider's machine readable
/// rejection codes.
fn provider_message(code: &str) -> &'static str {
    match code {
        "EMAIL_EXISTS" => "Email is already in use. Please try logging in instead.",
        "WEAK_PASSWORD" => "Password is too weak. Please choose a stronger password.",
        "INVALID_EMAIL" => "Invalid email address.",
        "EMAIL_NOT_FOUND" => "No account found with this email. Please sign up first.",
        "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
            "Incorrect password. Please try again."
        }
        "TOO_MANY_ATTEMPTS_TRY_LATER" => {
            "Too many failed attempts. Please try again later."
        }
        _ => "An error occurred. Please try again.",
    }
}

pub trait IntoApiResponse<T> {
    fn into_response(self, error_code: &str) -> ApiResponse<T>;
}

impl<T> IntoApiResponse<T> for anyhow::Result<T> {
    fn into_response(self, error_code: &str) -> ApiResponse<T> {
        self.map_err(|e| {
            error!("{:?}", e);

            let message = error_message(error_code).to_string();
            match error_code.as_bytes().first() {
                Some(&b'4') => ApiError::ClientError(message),
                _ => ApiError::ServerError(message),
            }
        })
    }
}

impl<T> IntoApiResponse<T> for Result<T, IdentityError> {
    /// Provider rejections answer with their mapped wording; transport
    /// failures fall back to the coded message.
    fn into_response(self, error_code: &str) -> ApiResponse<T> {
        self.map_err(|e| match e {
            IdentityError::Provider { code } => {
                ApiError::ClientError(provider_message(&code).to_string())
            }
            e => {
                error!("{:?}", e);
                ApiError::ServerError(error_message(error_code).to_string())
            }
        })
    }
}

#[cfg(test)]
mod test {
    use identity::IdentityError;

    use crate::{
        response::{ApiResponse, IntoApiResponse},
        ApiError,
    };

    #[test]
    fn test_server_codes_map_to_server_errors() {
        // Arrange
        let result: anyhow::Result<()> = Err(anyhow::anyhow!("db down"));

        // Act
        let response = result.into_response("502-001");

        // Assert
        let Err(ApiError::ServerError(message)) = response else {
            panic!("expected a server error");
        };
        assert_eq!(message, "Failed to load blogs. Please try again later.");
    }

    #[test]
    fn test_client_codes_map_to_client_errors() {
        // Arrange
        let result: anyhow::Result<()> = Err(anyhow::anyhow!("too short"));

        // Act
        let response = result.into_response("400-001");

        // Assert
        let Err(ApiError::ClientError(message)) = response else {
            panic!("expected a client error");
        };
        assert_eq!(message, "Password must be at least 6 characters!");
    }

    #[test]
    fn test_provider_rejections_use_their_own_wording() {
        // Arrange
        let result: Result<(), IdentityError> = Err(IdentityError::Provider {
            code: "EMAIL_EXISTS".to_string(),
        });

        // Act
        let response = result.into_response("502-013");

        // Assert
        let Err(ApiError::ClientError(message)) = response else {
            panic!("expected a client error");
        };
        assert_eq!(
            message,
            "Email is already in use. Please try logging in instead."
        );
    }

    #[test]
    fn test_unknown_provider_codes_fall_back() {
        // Arrange
        let result: Result<(), IdentityError> = Err(IdentityError::Provider {
            code: "USER_DISABLED".to_string(),
        });

        // Act
        let response: ApiResponse<()> = result.into_response("502-013");

        // Assert
        let Err(ApiError::ClientError(message)) = response else {
            panic!("expected a client error");
        };
        assert_eq!(message, "An error occurred. Please try again.");
    }
}
