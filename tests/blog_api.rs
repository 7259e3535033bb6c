//! Database-backed integration tests for the repositories and the
//! credential store. All tests here require a live Postgres (see
//! `common::TestDatabase`) and are `#[ignore]`d by default:
//!
//! ```sh
//! DATABASE_URL=postgres://... cargo test -- --ignored
//! ```

mod common;

use std::collections::HashSet;

use common::{unique, TestDatabase};
use inkpost::backend::auth::users;
use inkpost::backend::blog::exists::{email_taken, exists, Resource};
use inkpost::backend::blog::posts::{NewPost, PostPatch};
use inkpost::backend::blog::{categories, posts};
use inkpost::backend::error::ApiError;

fn new_post(slug: &str, category_ids: Vec<i64>) -> NewPost {
    NewPost {
        title: "A title".to_string(),
        slug: slug.to_string(),
        content: "Some content".to_string(),
        thumbnail: None,
        author: "tester".to_string(),
        categories: category_ids,
    }
}

fn category_ids(post: &posts::Post) -> HashSet<i64> {
    post.categories.iter().map(|c| c.id).collect()
}

#[tokio::test]
#[ignore]
async fn registering_the_same_email_twice_conflicts() {
    let db = TestDatabase::new().await;
    let email = unique("dup");

    users::create(db.pool(), &email, "password123")
        .await
        .expect("first registration should succeed");

    let err = users::create(db.pool(), &email, "password123")
        .await
        .expect_err("second registration should fail");
    assert!(matches!(err, ApiError::Conflict(_)));

    assert!(email_taken(db.pool(), &email).await.unwrap());
}

#[tokio::test]
#[ignore]
async fn login_with_wrong_password_is_a_credentials_error() {
    let db = TestDatabase::new().await;
    let email = unique("login");

    users::create(db.pool(), &email, "right-password")
        .await
        .unwrap();

    let err = users::verify(db.pool(), &email, "wrong-password")
        .await
        .expect_err("wrong password must not verify");
    assert!(matches!(err, ApiError::Credentials));

    // Unknown email reports the identical error.
    let err = users::verify(db.pool(), &unique("ghost"), "whatever")
        .await
        .expect_err("unknown email must not verify");
    assert!(matches!(err, ApiError::Credentials));
}

#[tokio::test]
#[ignore]
async fn created_post_reads_back_its_exact_category_set() {
    let db = TestDatabase::new().await;

    let first = categories::create(db.pool(), "Tech", "Tech posts").await.unwrap();
    let second = categories::create(db.pool(), "Rust", "Rust posts").await.unwrap();

    let slug = unique("post");
    let post_id = posts::create(db.pool(), &new_post(&slug, vec![first, second]))
        .await
        .unwrap();

    let post = posts::get_by_id(db.pool(), post_id).await.unwrap().unwrap();
    assert_eq!(category_ids(&post), HashSet::from([first, second]));

    let by_slug = posts::get_by_slug(db.pool(), &slug).await.unwrap().unwrap();
    assert_eq!(by_slug.id, post_id);
}

#[tokio::test]
#[ignore]
async fn replacing_categories_removes_all_old_associations() {
    let db = TestDatabase::new().await;

    let first = categories::create(db.pool(), "One", "").await.unwrap();
    let second = categories::create(db.pool(), "Two", "").await.unwrap();
    let third = categories::create(db.pool(), "Three", "").await.unwrap();

    let post_id = posts::create(db.pool(), &new_post(&unique("post"), vec![first, second]))
        .await
        .unwrap();

    let patch: PostPatch =
        serde_json::from_value(serde_json::json!({ "categories": [third] })).unwrap();
    assert!(posts::update(db.pool(), post_id, &patch).await.unwrap());

    let post = posts::get_by_id(db.pool(), post_id).await.unwrap().unwrap();
    assert_eq!(category_ids(&post), HashSet::from([third]));
}

#[tokio::test]
#[ignore]
async fn a_post_can_hold_zero_categories() {
    let db = TestDatabase::new().await;

    let post_id = posts::create(db.pool(), &new_post(&unique("bare"), vec![]))
        .await
        .unwrap();

    let post = posts::get_by_id(db.pool(), post_id).await.unwrap().unwrap();
    assert!(post.categories.is_empty());
}

#[tokio::test]
#[ignore]
async fn deleting_a_referenced_category_cascades_its_join_rows() {
    let db = TestDatabase::new().await;

    let keep = categories::create(db.pool(), "Keep", "").await.unwrap();
    let drop = categories::create(db.pool(), "Drop", "").await.unwrap();

    let post_id = posts::create(db.pool(), &new_post(&unique("post"), vec![keep, drop]))
        .await
        .unwrap();

    assert!(categories::delete(db.pool(), drop).await.unwrap());

    // The post still serializes cleanly, minus the deleted category.
    let post = posts::get_by_id(db.pool(), post_id).await.unwrap().unwrap();
    assert_eq!(category_ids(&post), HashSet::from([keep]));
}

#[tokio::test]
#[ignore]
async fn failed_join_insert_rolls_back_the_post_insert() {
    let db = TestDatabase::new().await;

    let slug = unique("rollback");
    let bogus_category = i64::MAX;

    posts::create(db.pool(), &new_post(&slug, vec![bogus_category]))
        .await
        .expect_err("foreign key violation should fail the create");

    // The whole transaction rolled back: no orphaned post row.
    assert!(posts::get_by_slug(db.pool(), &slug).await.unwrap().is_none());
}

#[tokio::test]
#[ignore]
async fn scalar_update_and_category_replace_share_one_transaction() {
    let db = TestDatabase::new().await;

    let category = categories::create(db.pool(), "Cat", "").await.unwrap();
    let post_id = posts::create(db.pool(), &new_post(&unique("post"), vec![category]))
        .await
        .unwrap();

    let patch: PostPatch = serde_json::from_value(serde_json::json!({
        "title": "Updated title",
        "categories": [i64::MAX]
    }))
    .unwrap();

    posts::update(db.pool(), post_id, &patch)
        .await
        .expect_err("bogus category id should fail the update");

    // Neither the scalar change nor the association replace survived.
    let post = posts::get_by_id(db.pool(), post_id).await.unwrap().unwrap();
    assert_eq!(post.title, "A title");
    assert_eq!(category_ids(&post), HashSet::from([category]));
}

#[tokio::test]
#[ignore]
async fn existence_gate_reports_missing_resources() {
    let db = TestDatabase::new().await;

    assert!(!exists(db.pool(), Resource::Post, i64::MAX).await.unwrap());
    assert!(!exists(db.pool(), Resource::Category, i64::MAX).await.unwrap());

    let id = categories::create(db.pool(), "Real", "").await.unwrap();
    assert!(exists(db.pool(), Resource::Category, id).await.unwrap());
}

#[tokio::test]
#[ignore]
async fn category_crud_roundtrip() {
    let db = TestDatabase::new().await;

    let id = categories::create(db.pool(), "Tech", "Tech posts").await.unwrap();

    let fetched = categories::get_by_id(db.pool(), id).await.unwrap().unwrap();
    assert_eq!(fetched.name, "Tech");
    assert_eq!(fetched.description, "Tech posts");

    // PATCH touches only the supplied field.
    let patch: categories::CategoryPatch =
        serde_json::from_value(serde_json::json!({ "description": "All things tech" })).unwrap();
    assert!(categories::patch(db.pool(), id, &patch).await.unwrap());

    let fetched = categories::get_by_id(db.pool(), id).await.unwrap().unwrap();
    assert_eq!(fetched.name, "Tech");
    assert_eq!(fetched.description, "All things tech");

    // PUT replaces both fields.
    assert!(categories::replace(db.pool(), id, "Technology", "Renamed")
        .await
        .unwrap());
    let fetched = categories::get_by_id(db.pool(), id).await.unwrap().unwrap();
    assert_eq!(fetched.name, "Technology");

    assert!(categories::delete(db.pool(), id).await.unwrap());
    assert!(categories::get_by_id(db.pool(), id).await.unwrap().is_none());

    // Writes against the deleted id report zero rows, not an error.
    assert!(!categories::replace(db.pool(), id, "x", "y").await.unwrap());
    assert!(!categories::delete(db.pool(), id).await.unwrap());
}

#[tokio::test]
#[ignore]
async fn duplicate_slug_is_a_conflict_at_the_database() {
    let db = TestDatabase::new().await;

    let slug = unique("taken");
    posts::create(db.pool(), &new_post(&slug, vec![])).await.unwrap();

    let err = posts::create(db.pool(), &new_post(&slug, vec![]))
        .await
        .expect_err("duplicate slug should violate the unique index");
    let classified = ApiError::from_write_error(err, "A post with this slug already exists.");
    assert!(matches!(classified, ApiError::Conflict(_)));
}
