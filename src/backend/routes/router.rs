//! Router Configuration
//!
//! Two route groups: the public authentication endpoints and the
//! token-guarded resource endpoints. The thumbnail directory is served as
//! static files under `/thumbnails`, unknown routes fall through to a JSON
//! 404, and every request is traced.

use axum::{
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::backend::auth::{login, register};
use crate::backend::blog::handlers::categories::{
    create_category, delete_category, get_category, list_categories, patch_category, put_category,
};
use crate::backend::blog::handlers::posts::{
    create_post, delete_post, get_post, get_post_by_slug, list_posts, patch_post,
};
use crate::backend::middleware::require_auth;
use crate::backend::response::Envelope;
use crate::backend::server::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/login", post(login))
        .route("/register", post(register));

    let protected = Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route(
            "/categories/{id}",
            get(get_category)
                .put(put_category)
                .patch(patch_category)
                .delete(delete_category),
        )
        .route("/posts", get(list_posts).post(create_post))
        .route(
            "/posts/{id}",
            get(get_post).patch(patch_post).delete(delete_post),
        )
        .route("/posts/slug/{slug}", get(get_post_by_slug))
        .route_layer(middleware::from_fn(require_auth));

    Router::new()
        .merge(public)
        .merge(protected)
        .nest_service("/thumbnails", ServeDir::new(state.thumbnails.dir()))
        .fallback(unknown_route)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn unknown_route() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(Envelope::failure("Unknown route.")),
    )
}
