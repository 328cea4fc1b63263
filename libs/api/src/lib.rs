use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::{delete, get, patch, post},
    Router,
};
use identity::{client::Client, verifier::Verifier};
use repository::Repository;
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod account;
mod auth;
pub mod blog;
pub mod healthz;
pub mod insight;
pub mod not_found;
pub mod recommendation;
mod response;
pub mod search;
pub mod subscriber;
pub mod wishlist;

pub enum ApiError {
    AuthError(String),
    ClientError(String),
    ServerError(String),
}

pub struct ApiState {
    repo: Repository,
    identity: Client,
    verifier: Verifier,
    config: Config,
    search: SearchConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub allow_origins: Vec<String>,
    pub recent_limit: u64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SearchConfig {
    pub popular_terms: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct IdentityConfig {
    pub base_url: String,
    pub jwks_url: String,
    pub issuer: String,
    pub audience: String,
}

pub async fn serve(
    repository: Repository,
    config_name: &str,
    identity_api_key: String,
) -> anyhow::Result<Router> {
    #[derive(OpenApi)]
    #[openapi(
        paths(
            blog::get_recent_blogs,
            blog::get_all_blogs,
            blog::get_blog,
            blog::create_blog,
            blog::update_blog,
            blog::delete_blog,
            blog::get_featured_blogs,
            subscriber::subscribe,
            search::search_blogs,
            search::get_suggestions,
            recommendation::get_recommendations,
            insight::get_analytics,
            wishlist::get_wishlist,
            wishlist::save_to_wishlist,
            wishlist::delete_from_wishlist,
            account::register,
            account::login,
            account::oauth,
            account::update_profile,
        ),
        components(schemas(
            blog::request::BlogForm,
            blog::response::BlogResp,
            blog::response::FeaturedBlogResp,
            blog::response::InsertedResp,
            blog::response::ModifiedResp,
            blog::response::DeletedResp,
            subscriber::request::SubscribeReq,
            search::response::SearchHitResp,
            recommendation::response::RecommendationResp,
            wishlist::request::SaveWishlistReq,
            wishlist::response::WishlistBlogResp,
            account::request::RegisterReq,
            account::request::LoginReq,
            account::request::OauthReq,
            account::request::UpdateProfileReq,
            account::response::SessionResp,
            account::response::ProfileResp,
        ))
    )]
    struct ApiDoc;

    info!(task = "start api serving");

    let config = util::load_config(config_name)?;
    let api: Config = util::section(&config, "api")?;
    let search_config: SearchConfig = util::section(&config, "search")?;
    let identity_config: IdentityConfig = util::section(&config, "identity")?;

    let identity_client = Client::new(&identity_config.base_url, &identity_api_key);
    let verifier = Verifier::new(
        &identity_config.jwks_url,
        &identity_config.issuer,
        &identity_config.audience,
    );

    let origins = api
        .allow_origins
        .iter()
        .map(|origin| origin.parse())
        .collect::<Result<Vec<HeaderValue>, _>>()?;

    let state = Arc::new(ApiState {
        repo: repository,
        identity: identity_client,
        verifier,
        config: api,
        search: search_config,
    });

    // search
    let search_router = Router::new()
        .route("/", get(search::search_blogs))
        .route("/suggestions", get(search::get_suggestions))
        .fallback(not_found::get_404)
        .with_state(state.clone());

    // wishlist, all routes behind the bearer check
    let wishlist_router = Router::new()
        .route(
            "/",
            get(wishlist::get_wishlist).post(wishlist::save_to_wishlist),
        )
        .route("/:id", delete(wishlist::delete_from_wishlist))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::auth))
        .fallback(not_found::get_404)
        .with_state(state.clone());

    // account, only the profile route needs a verified caller
    let account_router = Router::new()
        .route("/profile", patch(account::update_profile))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::auth))
        .route("/register", post(account::register))
        .route("/login", post(account::login))
        .route("/oauth", post(account::oauth))
        .fallback(not_found::get_404)
        .with_state(state.clone());

    let router = Router::new()
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .route("/healthz", get(healthz::get_health))
        .route(
            "/blogsdata",
            get(blog::get_recent_blogs).post(blog::create_blog),
        )
        .route(
            "/blogsdata/:id",
            get(blog::get_blog)
                .put(blog::update_blog)
                .delete(blog::delete_blog),
        )
        .route("/allblogsdata", get(blog::get_all_blogs))
        .route("/featuredblogs", get(blog::get_featured_blogs))
        .route("/subscribers", post(subscriber::subscribe))
        .route("/recommendations", get(recommendation::get_recommendations))
        .route("/analytics", get(insight::get_analytics))
        .nest("/search", search_router)
        .nest("/wishlist", wishlist_router)
        .nest("/account", account_router)
        .layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                ])
                .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]),
        )
        .fallback(not_found::get_404)
        .with_state(state);

    Ok(router)
}
