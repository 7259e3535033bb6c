//! Category endpoint handlers.
//!
//! Mutating handlers run the existence gate first so a missing id reports
//! as a clean 404 before any write. If a concurrent delete lands between
//! gate and write, the zero-rows-affected result is reported as the same
//! 404 rather than a server error.

use axum::{
    extract::{Path, State},
    Json,
};
use sqlx::PgPool;

use crate::backend::blog::categories::{self, Category, CategoryPatch};
use crate::backend::blog::exists::{exists, Resource};
use crate::backend::blog::handlers::types::CategoryRequest;
use crate::backend::error::ApiError;
use crate::backend::extractors::Payload;
use crate::backend::response::Envelope;

pub async fn list_categories(
    State(pool): State<PgPool>,
) -> Result<Json<Vec<Category>>, ApiError> {
    let all = categories::get_all(&pool).await?;
    Ok(Json(all))
}

pub async fn get_category(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<Json<Category>, ApiError> {
    let category = categories::get_by_id(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("category", id))?;
    Ok(Json(category))
}

pub async fn create_category(
    State(pool): State<PgPool>,
    Payload(request): Payload<CategoryRequest>,
) -> Result<Json<Envelope>, ApiError> {
    request.validate()?;

    let id = categories::create(&pool, &request.name, &request.description).await?;
    tracing::info!("created category {}", id);

    Ok(Json(Envelope::ok("New category inserted successfully.")))
}

pub async fn put_category(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
    Payload(request): Payload<CategoryRequest>,
) -> Result<Json<Envelope>, ApiError> {
    request.validate()?;

    if !exists(&pool, Resource::Category, id).await? {
        return Err(ApiError::not_found("category", id));
    }

    let updated = categories::replace(&pool, id, &request.name, &request.description).await?;
    if !updated {
        return Err(ApiError::not_found("category", id));
    }

    Ok(Json(Envelope::ok("Data updated successfully.")))
}

pub async fn patch_category(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
    Payload(patch): Payload<CategoryPatch>,
) -> Result<Json<Envelope>, ApiError> {
    if patch.is_empty() {
        return Err(ApiError::validation("No fields supplied to update."));
    }

    if !exists(&pool, Resource::Category, id).await? {
        return Err(ApiError::not_found("category", id));
    }

    let updated = categories::patch(&pool, id, &patch).await?;
    if !updated {
        return Err(ApiError::not_found("category", id));
    }

    Ok(Json(Envelope::ok("Data updated successfully.")))
}

/// Deleting a category always succeeds if the id exists, even when posts
/// still reference it; the join rows cascade away with it.
pub async fn delete_category(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<Json<Envelope>, ApiError> {
    if !exists(&pool, Resource::Category, id).await? {
        return Err(ApiError::not_found("category", id));
    }

    let deleted = categories::delete(&pool, id).await?;
    if !deleted {
        return Err(ApiError::not_found("category", id));
    }

    tracing::info!("deleted category {}", id);

    Ok(Json(Envelope::ok("Data deleted successfully.")))
}
