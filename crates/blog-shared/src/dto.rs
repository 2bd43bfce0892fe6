//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of create and update requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostPayload {
    pub title: String,
    pub category: String,
    pub content: String,
}

/// Query string of the post listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPostsQuery {
    pub category: Option<String>,
}

impl ListPostsQuery {
    /// The category filter, treating an empty value as absent.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

/// A post as returned by the listing and lookup endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub category: String,
    pub content: String,
    pub date_created: DateTime<Utc>,
}

/// The newest post of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryHighlight {
    pub category: String,
    pub title: String,
    pub slug: String,
    pub link: String,
    pub content: String,
}

/// Request to open an admin session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub passcode: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_category_is_no_filter() {
        let query = ListPostsQuery {
            category: Some(String::new()),
        };
        assert_eq!(query.category(), None);

        let query = ListPostsQuery {
            category: Some("life".to_string()),
        };
        assert_eq!(query.category(), Some("life"));
    }

    #[test]
    fn test_payload_requires_every_field() {
        let missing = serde_json::from_str::<PostPayload>(r#"{"title":"t","category":"c"}"#);
        assert!(missing.is_err());
    }
}
