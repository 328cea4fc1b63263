use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use ranking::recommend;

use crate::{
    response::{ApiResponse, IntoApiResponse},
    ApiState,
};

use self::request::RecommendationParam;
use self::response::RecommendationResp;

pub mod request;
pub mod response;

#[utoipa::path(
    get,
    path = "/recommendations",
    responses(
        (status = 200, description = "Get recommendations successfully", body = [RecommendationResp])
    ),
    params(RecommendationParam),
)]
pub async fn get_recommendations(
    State(state): State<Arc<ApiState>>,
    Query(param): Query<RecommendationParam>,
) -> ApiResponse<Json<Vec<RecommendationResp>>> {
    let blogs = state.repo.blog.find_all().await.into_response("502-008")?;

    let recommendations = recommend::recommend(&blogs, &param.preferences(), Utc::now());

    Ok(Json(
        recommendations
            .into_iter()
            .map(RecommendationResp::from)
            .collect(),
    ))
}
