//! Post Repository
//!
//! CRUD over post records plus the post/category join table. The join rows
//! are kept exactly consistent with the parent record: a post and its
//! initial associations are created in one transaction, and a
//! category-replacing update (delete-all-then-insert) shares a transaction
//! with the scalar field update - both commit or neither does.
//!
//! Reads use a single LEFT JOIN query and group the flat rows client-side
//! into a post-with-categories shape; a post without categories yields an
//! empty list, never a null placeholder.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::backend::blog::categories::Category;

/// A post with its embedded categories.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub thumbnail: Option<String>,
    pub author: String,
    pub posted_at: DateTime<Utc>,
    pub categories: Vec<Category>,
}

/// Fields for creating a post. `thumbnail` is the stored public URL, not
/// the inbound base64 payload.
#[derive(Debug)]
pub struct NewPost {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub thumbnail: Option<String>,
    pub author: String,
    pub categories: Vec<i64>,
}

/// Partial update for PATCH. A present `categories` field triggers a full
/// replacement of the post's association set. Unknown fields are rejected
/// at deserialization.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PostPatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub thumbnail: Option<String>,
    pub author: Option<String>,
    pub categories: Option<Vec<i64>>,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        !self.has_scalar_fields() && self.categories.is_none()
    }

    fn has_scalar_fields(&self) -> bool {
        self.title.is_some()
            || self.slug.is_some()
            || self.content.is_some()
            || self.thumbnail.is_some()
            || self.author.is_some()
    }
}

/// One flat row of the post/category join.
#[derive(Debug, sqlx::FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    content: String,
    thumbnail: Option<String>,
    author: String,
    posted_at: DateTime<Utc>,
    category_id: Option<i64>,
    category_name: Option<String>,
    category_description: Option<String>,
}

const SELECT_POSTS: &str = r#"
    SELECT p.id, p.title, p.slug, p.content, p.thumbnail, p.author, p.posted_at,
           c.id AS category_id, c.name AS category_name, c.description AS category_description
    FROM posts p
    LEFT JOIN posts_categories pc ON p.id = pc.post_id
    LEFT JOIN categories c ON pc.category_id = c.id
"#;

pub async fn get_all(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
    let sql = format!("{SELECT_POSTS} ORDER BY p.id, c.id");
    let rows = sqlx::query_as::<_, PostRow>(&sql).fetch_all(pool).await?;
    Ok(group_rows(rows))
}

pub async fn get_by_id(pool: &PgPool, id: i64) -> Result<Option<Post>, sqlx::Error> {
    let sql = format!("{SELECT_POSTS} WHERE p.id = $1 ORDER BY c.id");
    let rows = sqlx::query_as::<_, PostRow>(&sql)
        .bind(id)
        .fetch_all(pool)
        .await?;
    Ok(group_rows(rows).into_iter().next())
}

pub async fn get_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Post>, sqlx::Error> {
    let sql = format!("{SELECT_POSTS} WHERE p.slug = $1 ORDER BY c.id");
    let rows = sqlx::query_as::<_, PostRow>(&sql)
        .bind(slug)
        .fetch_all(pool)
        .await?;
    Ok(group_rows(rows).into_iter().next())
}

/// Create a post together with its initial category associations.
///
/// Runs in one transaction: the post insert, then one join insert per
/// category id. Any failure - including a bad category id - aborts the
/// whole operation, so a post row can never be committed with a partial
/// association set.
pub async fn create(pool: &PgPool, post: &NewPost) -> Result<i64, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let (post_id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO posts (title, slug, content, thumbnail, author)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(&post.title)
    .bind(&post.slug)
    .bind(&post.content)
    .bind(&post.thumbnail)
    .bind(&post.author)
    .fetch_one(&mut *tx)
    .await?;

    for category_id in &post.categories {
        sqlx::query("INSERT INTO posts_categories (post_id, category_id) VALUES ($1, $2)")
            .bind(post_id)
            .bind(category_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    Ok(post_id)
}

/// Partial update of scalar fields; a present `categories` field replaces
/// the whole association set (delete all, insert the new set) in the same
/// transaction.
pub async fn update(pool: &PgPool, id: i64, patch: &PostPatch) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let mut updated = true;

    if patch.has_scalar_fields() {
        let mut query = build_patch_query(id, patch);
        let result = query.build().execute(&mut *tx).await?;
        updated = result.rows_affected() == 1;
    }

    if let Some(categories) = &patch.categories {
        sqlx::query("DELETE FROM posts_categories WHERE post_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        for category_id in categories {
            sqlx::query("INSERT INTO posts_categories (post_id, category_id) VALUES ($1, $2)")
                .bind(id)
                .bind(category_id)
                .execute(&mut *tx)
                .await?;
        }
    }

    tx.commit().await?;

    Ok(updated)
}

/// Delete a post. Join rows cascade at the schema level.
pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() == 1)
}

/// Build the dynamic UPDATE for the scalar fields of a post patch.
fn build_patch_query<'a>(id: i64, patch: &'a PostPatch) -> QueryBuilder<'a, Postgres> {
    let mut query = QueryBuilder::new("UPDATE posts SET ");
    let mut fields = query.separated(", ");

    if let Some(title) = &patch.title {
        fields.push("title = ").push_bind_unseparated(title);
    }
    if let Some(slug) = &patch.slug {
        fields.push("slug = ").push_bind_unseparated(slug);
    }
    if let Some(content) = &patch.content {
        fields.push("content = ").push_bind_unseparated(content);
    }
    if let Some(thumbnail) = &patch.thumbnail {
        fields.push("thumbnail = ").push_bind_unseparated(thumbnail);
    }
    if let Some(author) = &patch.author {
        fields.push("author = ").push_bind_unseparated(author);
    }

    query.push(" WHERE id = ").push_bind(id);
    query
}

/// Group flat join rows by post id, preserving row order. Rows whose
/// category columns are NULL (a post with no associations) contribute the
/// post itself and nothing else.
fn group_rows(rows: Vec<PostRow>) -> Vec<Post> {
    let mut posts: Vec<Post> = Vec::new();
    let mut index: std::collections::HashMap<i64, usize> = std::collections::HashMap::new();

    for row in rows {
        let position = *index.entry(row.id).or_insert_with(|| {
            posts.push(Post {
                id: row.id,
                title: row.title.clone(),
                slug: row.slug.clone(),
                content: row.content.clone(),
                thumbnail: row.thumbnail.clone(),
                author: row.author.clone(),
                posted_at: row.posted_at,
                categories: Vec::new(),
            });
            posts.len() - 1
        });

        if let (Some(id), Some(name), Some(description)) =
            (row.category_id, row.category_name, row.category_description)
        {
            posts[position].categories.push(Category {
                id,
                name,
                description,
            });
        }
    }

    posts
}
