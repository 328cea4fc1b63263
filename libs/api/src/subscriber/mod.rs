use std::sync::Arc;

use axum::{extract::State, Json};
use entity::prelude::*;

use crate::{
    response::{ApiResponse, IntoApiResponse},
    ApiState,
};

use self::request::SubscribeReq;
use self::response::InsertedResp;

pub mod request;
pub mod response;

#[utoipa::path(
    post,
    path = "/subscribers",
    request_body = SubscribeReq,
    responses(
        (status = 200, description = "Subscribe to the newsletter successfully", body = [InsertedResp])
    ),
)]
pub async fn subscribe(
    State(state): State<Arc<ApiState>>,
    Json(req): Json<SubscribeReq>,
) -> ApiResponse<Json<InsertedResp>> {
    // Subscribing twice with the same address hands back the existing row.
    let existing = state
        .repo
        .subscriber
        .find_by_email(&req.email)
        .await
        .into_response("502-006")?;

    if let Some(subscriber) = existing {
        return Ok(Json(InsertedResp {
            inserted_id: subscriber.id,
        }));
    }

    let inserted_id = state
        .repo
        .subscriber
        .save(SubscriberEntity {
            email: req.email,
            ..Default::default()
        })
        .await
        .into_response("502-006")?;

    Ok(Json(InsertedResp { inserted_id }))
}
