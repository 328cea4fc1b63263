use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use entity::prelude::*;

use crate::{
    auth::Claims,
    response::{ApiResponse, IntoApiResponse},
    ApiState,
};

use self::request::SaveWishlistReq;
use self::response::{DeletedResp, InsertedResp, WishlistBlogResp};

pub mod request;
pub mod response;

#[utoipa::path(
    get,
    path = "/wishlist",
    responses(
        (status = 200, description = "Get the reader's saved blogs successfully", body = [WishlistBlogResp])
    ),
)]
pub async fn get_wishlist(
    Extension(ref claims): Extension<Claims>,
    State(state): State<Arc<ApiState>>,
) -> ApiResponse<Json<Vec<WishlistBlogResp>>> {
    let entries = state
        .repo
        .wishlist
        .find_by_user(&claims.sub)
        .await
        .into_response("502-010")?;

    Ok(Json(entries.into_iter().map(WishlistBlogResp::from).collect()))
}

#[utoipa::path(
    post,
    path = "/wishlist",
    request_body = SaveWishlistReq,
    responses(
        (status = 200, description = "Save a blog successfully", body = [InsertedResp])
    ),
)]
pub async fn save_to_wishlist(
    Extension(ref claims): Extension<Claims>,
    State(state): State<Arc<ApiState>>,
    Json(req): Json<SaveWishlistReq>,
) -> ApiResponse<Json<InsertedResp>> {
    // Saving the same blog twice hands back the existing entry.
    let existing = state
        .repo
        .wishlist
        .find_by_user_and_blog(&claims.sub, &req.id)
        .await
        .into_response("502-011")?;

    if let Some(entry) = existing {
        return Ok(Json(InsertedResp {
            inserted_id: entry.id,
        }));
    }

    let inserted_id = state
        .repo
        .wishlist
        .save(WishlistEntryEntity {
            user_sub: claims.sub.clone(),
            blog_id: req.id,
            title: req.title,
            short_description: req.short_description,
            long_description: req.long_description,
            image_url: req.image_url,
            category: req.category,
            date: req.date,
            ..Default::default()
        })
        .await
        .into_response("502-011")?;

    Ok(Json(InsertedResp { inserted_id }))
}

#[utoipa::path(
    delete,
    path = "/wishlist/{id}",
    responses(
        (status = 200, description = "Remove a saved blog successfully", body = [DeletedResp])
    ),
    params(
        ("id" = String, Path, description = "wishlist entry id"),
    ),
)]
pub async fn delete_from_wishlist(
    Extension(ref claims): Extension<Claims>,
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> ApiResponse<Json<DeletedResp>> {
    let deleted_count = state
        .repo
        .wishlist
        .delete(&claims.sub, &id)
        .await
        .into_response("502-012")?;

    Ok(Json(DeletedResp { deleted_count }))
}
