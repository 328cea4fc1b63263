use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::Utc;
use ranking::insights::{self, Snapshot};
use tracing::error;

use crate::{
    response::{ApiResponse, IntoApiResponse},
    ApiState,
};

#[utoipa::path(
    get,
    path = "/analytics",
    responses(
        (status = 200, description = "Get the analytics snapshot successfully")
    ),
)]
pub async fn get_analytics(State(state): State<Arc<ApiState>>) -> ApiResponse<Json<Snapshot>> {
    let cached = state.repo.insight.get().into_response("502-009")?;

    // A snapshot that no longer parses reads as a miss.
    if let Some(json) = cached {
        match serde_json::from_str::<Snapshot>(&json) {
            Ok(snapshot) => return Ok(Json(snapshot)),
            Err(e) => error!(task = "parse cached snapshot", error = e.to_string()),
        }
    }

    let blogs = state.repo.blog.find_all().await.into_response("502-009")?;
    let saves = state
        .repo
        .wishlist
        .count_by_blog()
        .await
        .into_response("502-009")?;
    let users = state.repo.user.count().await.into_response("502-009")?;
    let subscribers = state
        .repo
        .subscriber
        .count()
        .await
        .into_response("502-009")?;

    Ok(Json(insights::snapshot(
        &blogs,
        &saves,
        users,
        subscribers,
        Utc::now(),
    )))
}
