use std::cmp::Reverse;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Form, Json,
};
use entity::prelude::*;

use crate::{
    response::{ApiResponse, IntoApiResponse},
    ApiState,
};

use self::request::BlogForm;
use self::response::{BlogResp, DeletedResp, FeaturedBlogResp, InsertedResp, ModifiedResp};

pub mod request;
pub mod response;

/// How many of the longest reads the landing page shows.
const FEATURED_LIMIT: usize = 10;

#[utoipa::path(
    get,
    path = "/blogsdata",
    responses(
        (status = 200, description = "Get the latest blogs successfully", body = [BlogResp])
    ),
)]
pub async fn get_recent_blogs(
    State(state): State<Arc<ApiState>>,
) -> ApiResponse<Json<Vec<BlogResp>>> {
    let blogs = state
        .repo
        .blog
        .find_recent(state.config.recent_limit)
        .await
        .into_response("502-001")?;

    Ok(Json(blogs.into_iter().map(BlogResp::from).collect()))
}

#[utoipa::path(
    get,
    path = "/allblogsdata",
    responses(
        (status = 200, description = "Get all blogs successfully", body = [BlogResp])
    ),
)]
pub async fn get_all_blogs(State(state): State<Arc<ApiState>>) -> ApiResponse<Json<Vec<BlogResp>>> {
    let blogs = state.repo.blog.find_all().await.into_response("502-001")?;

    Ok(Json(blogs.into_iter().map(BlogResp::from).collect()))
}

#[utoipa::path(
    get,
    path = "/blogsdata/{id}",
    responses(
        (status = 200, description = "Get a blog successfully", body = [BlogResp]),
        (status = 404, description = "The blog does not exist")
    ),
    params(
        ("id" = String, Path, description = "blog id"),
    ),
)]
pub async fn get_blog(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> ApiResponse<Response> {
    let blog = state
        .repo
        .blog
        .find_by_id(&id)
        .await
        .into_response("502-002")?;

    let Some(blog) = blog else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    Ok(Json(BlogResp::from(blog)).into_response())
}

#[utoipa::path(
    post,
    path = "/blogsdata",
    request_body(content = BlogForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Create a blog successfully", body = [InsertedResp])
    ),
)]
pub async fn create_blog(
    State(state): State<Arc<ApiState>>,
    Form(form): Form<BlogForm>,
) -> ApiResponse<Json<InsertedResp>> {
    let inserted_id = state
        .repo
        .blog
        .save(BlogEntity {
            title: form.title,
            short_description: form.short_description,
            long_description: form.long_description,
            image_url: form.image_url,
            category: form.category,
            date: form.date,
            ..Default::default()
        })
        .await
        .into_response("502-003")?;

    Ok(Json(InsertedResp { inserted_id }))
}

#[utoipa::path(
    put,
    path = "/blogsdata/{id}",
    request_body(content = BlogForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Update a blog successfully", body = [ModifiedResp])
    ),
    params(
        ("id" = String, Path, description = "blog id"),
    ),
)]
pub async fn update_blog(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    Form(form): Form<BlogForm>,
) -> ApiResponse<Json<ModifiedResp>> {
    let modified_count = state
        .repo
        .blog
        .update(
            &id,
            BlogEntity {
                title: form.title,
                short_description: form.short_description,
                long_description: form.long_description,
                image_url: form.image_url,
                category: form.category,
                date: form.date,
                ..Default::default()
            },
        )
        .await
        .into_response("502-004")?;

    Ok(Json(ModifiedResp { modified_count }))
}

#[utoipa::path(
    delete,
    path = "/blogsdata/{id}",
    responses(
        (status = 200, description = "Delete a blog successfully", body = [DeletedResp])
    ),
    params(
        ("id" = String, Path, description = "blog id"),
    ),
)]
pub async fn delete_blog(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> ApiResponse<Json<DeletedResp>> {
    let deleted_count = state
        .repo
        .blog
        .delete(&id)
        .await
        .into_response("502-005")?;

    Ok(Json(DeletedResp { deleted_count }))
}

#[utoipa::path(
    get,
    path = "/featuredblogs",
    responses(
        (status = 200, description = "Get the longest reads successfully", body = [FeaturedBlogResp])
    ),
)]
pub async fn get_featured_blogs(
    State(state): State<Arc<ApiState>>,
) -> ApiResponse<Json<Vec<FeaturedBlogResp>>> {
    let blogs = state.repo.blog.find_all().await.into_response("502-001")?;

    let mut featured: Vec<FeaturedBlogResp> =
        blogs.into_iter().map(FeaturedBlogResp::from).collect();
    featured.sort_by_key(|blog| Reverse(blog.word_count));
    featured.truncate(FEATURED_LIMIT);

    Ok(Json(featured))
}
