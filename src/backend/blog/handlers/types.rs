//! Request types for the category and post endpoints.

use serde::Deserialize;

use crate::backend::error::ApiError;

/// Body of POST /categories and PUT /categories/{id}.
#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl CategoryRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::validation("A category name is required."));
        }
        Ok(())
    }
}

/// Body of POST /posts. `thumbnail` arrives base64-encoded; `categories`
/// defaults to the empty set, which is a valid association set.
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub thumbnail: Option<String>,
    pub author: String,
    #[serde(default)]
    pub categories: Vec<i64>,
}

impl CreatePostRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        for (value, field) in [
            (&self.title, "title"),
            (&self.slug, "slug"),
            (&self.content, "content"),
            (&self.author, "author"),
        ] {
            if value.trim().is_empty() {
                return Err(ApiError::Validation(format!("A post {field} is required.")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_requires_name() {
        let request = CategoryRequest {
            name: "  ".to_string(),
            description: String::new(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_category_description_defaults_to_empty() {
        let request: CategoryRequest = serde_json::from_str(r#"{"name":"Tech"}"#).unwrap();
        assert_eq!(request.description, "");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_post_request_defaults_to_no_categories() {
        let request: CreatePostRequest = serde_json::from_str(
            r#"{"title":"T","slug":"t","content":"c","author":"a"}"#,
        )
        .unwrap();
        assert!(request.categories.is_empty());
        assert!(request.thumbnail.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_post_request_rejects_blank_required_field() {
        let request: CreatePostRequest = serde_json::from_str(
            r#"{"title":"","slug":"t","content":"c","author":"a"}"#,
        )
        .unwrap();
        assert!(request.validate().is_err());
    }
}
