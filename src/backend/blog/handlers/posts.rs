//! Post endpoint handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use sqlx::PgPool;

use crate::backend::blog::exists::{exists, Resource};
use crate::backend::blog::handlers::types::CreatePostRequest;
use crate::backend::blog::posts::{self, NewPost, Post, PostPatch};
use crate::backend::error::ApiError;
use crate::backend::extractors::Payload;
use crate::backend::response::Envelope;
use crate::backend::server::state::AppState;

const DUPLICATE_SLUG: &str = "A post with this slug already exists.";

pub async fn list_posts(State(pool): State<PgPool>) -> Result<Json<Vec<Post>>, ApiError> {
    let all = posts::get_all(&pool).await?;
    Ok(Json(all))
}

pub async fn get_post(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<Json<Post>, ApiError> {
    let post = posts::get_by_id(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("post", id))?;
    Ok(Json(post))
}

pub async fn get_post_by_slug(
    State(pool): State<PgPool>,
    Path(slug): Path<String>,
) -> Result<Json<Post>, ApiError> {
    let post = posts::get_by_slug(&pool, &slug)
        .await?
        .ok_or_else(|| ApiError::not_found("post", &slug))?;
    Ok(Json(post))
}

/// Create a post with its initial category set.
///
/// The base64 thumbnail (when supplied) is decoded and written to the
/// thumbnail store first; the resulting public URL is persisted on the
/// post record and echoed back in the response envelope.
pub async fn create_post(
    State(state): State<AppState>,
    Payload(request): Payload<CreatePostRequest>,
) -> Result<Json<Envelope>, ApiError> {
    request.validate()?;

    let thumbnail_url = match &request.thumbnail {
        Some(encoded) => Some(state.thumbnails.save(encoded).await?),
        None => None,
    };

    let new_post = NewPost {
        title: request.title,
        slug: request.slug,
        content: request.content,
        thumbnail: thumbnail_url.clone(),
        author: request.author,
        categories: request.categories,
    };

    let post_id = posts::create(&state.db, &new_post)
        .await
        .map_err(|e| ApiError::from_write_error(e, DUPLICATE_SLUG))?;

    tracing::info!(
        "created post {} with {} categories",
        post_id,
        new_post.categories.len()
    );

    let envelope = match thumbnail_url {
        Some(url) => Envelope::with_thumbnail("Post and categories inserted successfully.", url),
        None => Envelope::ok("Post and categories inserted successfully."),
    };

    Ok(Json(envelope))
}

pub async fn patch_post(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
    Payload(patch): Payload<PostPatch>,
) -> Result<Json<Envelope>, ApiError> {
    if patch.is_empty() {
        return Err(ApiError::validation("No fields supplied to update."));
    }

    if !exists(&pool, Resource::Post, id).await? {
        return Err(ApiError::not_found("post", id));
    }

    let updated = posts::update(&pool, id, &patch)
        .await
        .map_err(|e| ApiError::from_write_error(e, DUPLICATE_SLUG))?;
    if !updated {
        return Err(ApiError::not_found("post", id));
    }

    Ok(Json(Envelope::ok("Data updated successfully.")))
}

pub async fn delete_post(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<Json<Envelope>, ApiError> {
    if !exists(&pool, Resource::Post, id).await? {
        return Err(ApiError::not_found("post", id));
    }

    let deleted = posts::delete(&pool, id).await?;
    if !deleted {
        return Err(ApiError::not_found("post", id));
    }

    tracing::info!("deleted post {}", id);

    Ok(Json(Envelope::ok("Data deleted successfully.")))
}
