//! Resource Existence Gate
//!
//! Count-based pre-flight probes used by mutating endpoints, so a missing
//! resource reports as a clean 404 before any write is attempted instead
//! of a "zero rows affected" ambiguity afterwards. This is a read-then-
//! write pattern, not a lock: a concurrent delete can still land between
//! probe and write, which is why handlers also treat zero rows affected
//! after a passing probe as not-found.

use sqlx::PgPool;

/// Resources the gate can probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Post,
    Category,
}

/// Whether a row with this id exists.
pub async fn exists(pool: &PgPool, resource: Resource, id: i64) -> Result<bool, sqlx::Error> {
    let sql = match resource {
        Resource::Post => "SELECT COUNT(*) FROM posts WHERE id = $1",
        Resource::Category => "SELECT COUNT(*) FROM categories WHERE id = $1",
    };

    let (count,): (i64,) = sqlx::query_as(sql).bind(id).fetch_one(pool).await?;
    Ok(count > 0)
}

/// Whether an email address is already registered.
pub async fn email_taken(pool: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind(email)
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}
