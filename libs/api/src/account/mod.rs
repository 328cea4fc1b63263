use std::sync::Arc;

use anyhow::anyhow;
use axum::{extract::State, http::HeaderMap, Extension, Json};
use entity::prelude::*;
use identity::client::SessionTokens;
use tracing::error;

use crate::{
    auth::{self, Claims},
    response::{ApiResponse, IntoApiResponse},
    ApiError, ApiState,
};

use self::request::{LoginReq, OauthReq, RegisterReq, UpdateProfileReq};
use self::response::{ProfileResp, SessionResp};

pub mod request;
pub mod response;

/// The provider enforces the same floor, checking here keeps the
/// round trip and the provider wording out of the common case.
const MIN_PASSWORD_CHARS: usize = 6;

#[utoipa::path(
    post,
    path = "/account/register",
    request_body = RegisterReq,
    responses(
        (status = 200, description = "Register an account successfully", body = [SessionResp])
    ),
)]
pub async fn register(
    State(state): State<Arc<ApiState>>,
    Json(req): Json<RegisterReq>,
) -> ApiResponse<Json<SessionResp>> {
    if req.password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(anyhow!(
            "password must be at least {} characters",
            MIN_PASSWORD_CHARS
        ))
        .into_response("400-001");
    }

    let mut tokens = state
        .identity
        .sign_up(&req.email, &req.password)
        .await
        .into_response("502-013")?;

    if let Some(name) = req.name.as_deref().filter(|name| !name.is_empty()) {
        let profile = state
            .identity
            .update_profile(&tokens.id_token, Some(name), None)
            .await
            .into_response("502-013")?;
        tokens.display_name = profile.display_name;
    }

    mirror(&state, &tokens).await;

    Ok(Json(SessionResp::from(tokens)))
}

#[utoipa::path(
    post,
    path = "/account/login",
    request_body = LoginReq,
    responses(
        (status = 200, description = "Log in successfully", body = [SessionResp])
    ),
)]
pub async fn login(
    State(state): State<Arc<ApiState>>,
    Json(req): Json<LoginReq>,
) -> ApiResponse<Json<SessionResp>> {
    let tokens = state
        .identity
        .sign_in_with_password(&req.email, &req.password)
        .await
        .into_response("502-013")?;

    mirror(&state, &tokens).await;

    Ok(Json(SessionResp::from(tokens)))
}

#[utoipa::path(
    post,
    path = "/account/oauth",
    request_body = OauthReq,
    responses(
        (status = 200, description = "Log in with a provider successfully", body = [SessionResp])
    ),
)]
pub async fn oauth(
    State(state): State<Arc<ApiState>>,
    Json(req): Json<OauthReq>,
) -> ApiResponse<Json<SessionResp>> {
    let tokens = state
        .identity
        .sign_in_with_idp(&req.provider_id, &req.access_token)
        .await
        .into_response("502-013")?;

    mirror(&state, &tokens).await;

    Ok(Json(SessionResp::from(tokens)))
}

#[utoipa::path(
    patch,
    path = "/account/profile",
    request_body = UpdateProfileReq,
    responses(
        (status = 200, description = "Update the profile successfully", body = [ProfileResp])
    ),
)]
pub async fn update_profile(
    Extension(ref claims): Extension<Claims>,
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Json(req): Json<UpdateProfileReq>,
) -> ApiResponse<Json<ProfileResp>> {
    // The middleware verified this token already.
    let Some(token) = auth::bearer_token(&headers) else {
        return Err(ApiError::AuthError(
            "Authorization header is missing".to_string(),
        ));
    };

    let profile = state
        .identity
        .update_profile(token, req.display_name.as_deref(), req.photo_url.as_deref())
        .await
        .into_response("502-014")?;

    // Keep the mirror in step with the provider.
    let result = state
        .repo
        .user
        .save(UserEntity {
            sub: claims.sub.clone(),
            email: non_empty(&profile.email).or_else(|| claims.email.clone()),
            display_name: non_empty(&profile.display_name),
            photo_url: non_empty(&profile.photo_url),
            ..Default::default()
        })
        .await;
    if let Err(e) = result {
        error!(task = "refresh user mirror", error = e.to_string());
    }

    Ok(Json(ProfileResp::from(profile)))
}

/// The provider's local id doubles as the token subject, so session
/// mirrors and verified-claims mirrors land on the same row.
async fn mirror(state: &ApiState, tokens: &SessionTokens) {
    let result = state
        .repo
        .user
        .save(UserEntity {
            sub: tokens.local_id.clone(),
            email: non_empty(&tokens.email),
            display_name: non_empty(&tokens.display_name),
            photo_url: non_empty(&tokens.photo_url),
            ..Default::default()
        })
        .await;
    if let Err(e) = result {
        error!(task = "refresh user mirror", error = e.to_string());
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
