pub mod client;
pub mod verifier;

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// The provider answered with an error payload. `code` carries its
    /// machine readable code, e.g. `EMAIL_EXISTS`.
    #[error("identity provider rejected the request: {code}")]
    Provider { code: String },

    #[error(
        "in reqwest crate from unsuccessful identity requests: {}: {}",
        message,
        source
    )]
    InReqwestErr {
        message: String,
        source: reqwest::Error,
    },

    #[error(
        "in serde_json crate from unparseable identity payloads: {}: {}",
        message,
        source
    )]
    InSerdeJsonErr {
        message: String,
        source: serde_json::Error,
    },

    #[error(
        "in jsonwebtoken crate from token verification: {}: {}",
        message,
        source
    )]
    InJwtErr {
        message: String,
        source: jsonwebtoken::errors::Error,
    },

    #[error("no published key matches kid {kid}")]
    UnknownKey { kid: String },
}

type Response<T> = Result<T, IdentityError>;

pub trait IntoResponse<T> {
    fn into_response(self, message: &str) -> Response<T>;
}

impl<T> IntoResponse<T> for Result<T, reqwest::Error> {
    fn into_response(self, message: &str) -> Response<T> {
        self.map_err(|e| IdentityError::InReqwestErr {
            message: message.to_string(),
            source: e,
        })
    }
}

impl<T> IntoResponse<T> for Result<T, serde_json::Error> {
    fn into_response(self, message: &str) -> Response<T> {
        self.map_err(|e| IdentityError::InSerdeJsonErr {
            message: message.to_string(),
            source: e,
        })
    }
}

impl<T> IntoResponse<T> for Result<T, jsonwebtoken::errors::Error> {
    fn into_response(self, message: &str) -> Response<T> {
        self.map_err(|e| IdentityError::InJwtErr {
            message: message.to_string(),
            source: e,
        })
    }
}
