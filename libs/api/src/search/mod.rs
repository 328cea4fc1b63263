use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use ranking::search;

use crate::{
    response::{ApiResponse, IntoApiResponse},
    ApiState,
};

use self::request::{SearchParam, SuggestionsParam};
use self::response::SearchHitResp;

pub mod request;
pub mod response;

/// How many popular terms the search box offers at once.
const MAX_SUGGESTIONS: usize = 5;

#[utoipa::path(
    get,
    path = "/search",
    responses(
        (status = 200, description = "Search blogs successfully", body = [SearchHitResp])
    ),
    params(SearchParam),
)]
pub async fn search_blogs(
    State(state): State<Arc<ApiState>>,
    Query(param): Query<SearchParam>,
) -> ApiResponse<Json<Vec<SearchHitResp>>> {
    let blogs = state.repo.blog.find_all().await.into_response("502-007")?;
    let saves = state
        .repo
        .wishlist
        .count_by_blog()
        .await
        .into_response("502-007")?;

    let hits = search::search(&blogs, &param.q, &param.filters(), &saves, Utc::now());

    Ok(Json(hits.into_iter().map(SearchHitResp::from).collect()))
}

#[utoipa::path(
    get,
    path = "/search/suggestions",
    responses(
        (status = 200, description = "Get search suggestions successfully", body = [String])
    ),
    params(SuggestionsParam),
)]
pub async fn get_suggestions(
    State(state): State<Arc<ApiState>>,
    Query(param): Query<SuggestionsParam>,
) -> Json<Vec<String>> {
    Json(suggest(&state.search.popular_terms, &param.q))
}

fn suggest(popular_terms: &[String], query: &str) -> Vec<String> {
    if query.chars().count() < search::MIN_QUERY_CHARS {
        return vec![];
    }

    let query = query.to_lowercase();
    popular_terms
        .iter()
        .filter(|term| term.to_lowercase().contains(&query))
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect()
}
