//! Category Repository
//!
//! CRUD over category records. Every write reports whether exactly one row
//! was affected as a plain `bool`; zero rows is a logical failure for the
//! caller to classify, distinct from a `sqlx::Error` connectivity failure.

use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Postgres, QueryBuilder};

/// A category row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// Partial update for PATCH. Unknown fields are rejected at
/// deserialization, so a misspelled field name is a 400 rather than a
/// silent no-op.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl CategoryPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

pub async fn get_all(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>("SELECT id, name, description FROM categories ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn get_by_id(pool: &PgPool, id: i64) -> Result<Option<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>("SELECT id, name, description FROM categories WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Insert a category, returning the generated id.
pub async fn create(pool: &PgPool, name: &str, description: &str) -> Result<i64, sqlx::Error> {
    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO categories (name, description)
        VALUES ($1, $2)
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(description)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Full replacement of both fields (PUT).
pub async fn replace(
    pool: &PgPool,
    id: i64,
    name: &str,
    description: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE categories SET name = $1, description = $2 WHERE id = $3")
        .bind(name)
        .bind(description)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() == 1)
}

/// Partial update (PATCH): only supplied fields are modified.
///
/// Callers must reject an empty patch before calling; an empty SET clause
/// is not valid SQL.
pub async fn patch(pool: &PgPool, id: i64, patch: &CategoryPatch) -> Result<bool, sqlx::Error> {
    let mut query = build_patch_query(id, patch);
    let result = query.build().execute(pool).await?;
    Ok(result.rows_affected() == 1)
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM categories WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() == 1)
}

/// Build the dynamic UPDATE for a partial category patch.
fn build_patch_query<'a>(id: i64, patch: &'a CategoryPatch) -> QueryBuilder<'a, Postgres> {
    let mut query = QueryBuilder::new("UPDATE categories SET ");
    let mut fields = query.separated(", ");

    if let Some(name) = &patch.name {
        fields.push("name = ").push_bind_unseparated(name);
    }
    if let Some(description) = &patch.description {
        fields.push("description = ").push_bind_unseparated(description);
    }

    query.push(" WHERE id = ").push_bind(id);
    query
}
