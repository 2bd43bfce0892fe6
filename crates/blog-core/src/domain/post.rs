use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::slug::slugify;
use crate::error::DomainError;

/// Longest accepted title (and derived slug), in characters.
pub const MAX_TITLE_LEN: usize = 200;
/// Longest accepted category name, in characters.
pub const MAX_CATEGORY_LEN: usize = 100;

/// Post entity - a persisted blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub category: String,
    pub content: String,
    pub date_created: DateTime<Utc>,
}

/// A post that has not been stored yet and therefore has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub slug: String,
    pub category: String,
    pub content: String,
    pub date_created: DateTime<Utc>,
}

impl NewPost {
    /// Create a new post stamped with the current instant.
    pub fn new(title: String, category: String, content: String) -> Result<Self, DomainError> {
        let slug = validated_slug(&title, &category)?;
        Ok(Self {
            title,
            slug,
            category,
            content,
            date_created: Utc::now(),
        })
    }

    /// Override the creation instant (imports and tests).
    pub fn created_at(mut self, date_created: DateTime<Utc>) -> Self {
        self.date_created = date_created;
        self
    }
}

impl Post {
    /// Replace title, category and content; the slug follows the new title.
    ///
    /// `id` and `date_created` never change. On error the post is left as it was.
    pub fn revise(
        &mut self,
        title: String,
        category: String,
        content: String,
    ) -> Result<(), DomainError> {
        let slug = validated_slug(&title, &category)?;
        self.title = title;
        self.slug = slug;
        self.category = category;
        self.content = content;
        Ok(())
    }

    /// Public path of the post in the blog frontend.
    pub fn link(&self) -> String {
        format!("/blogs/{}", self.slug)
    }
}

fn validated_slug(title: &str, category: &str) -> Result<String, DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::Validation("title must not be empty".to_string()));
    }
    if category.trim().is_empty() {
        return Err(DomainError::Validation(
            "category must not be empty".to_string(),
        ));
    }

    if title.chars().count() > MAX_TITLE_LEN {
        return Err(DomainError::Validation(format!(
            "title must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    if category.chars().count() > MAX_CATEGORY_LEN {
        return Err(DomainError::Validation(format!(
            "category must be at most {MAX_CATEGORY_LEN} characters"
        )));
    }

    let slug = slugify(title);
    if slug.is_empty() {
        return Err(DomainError::Validation(format!(
            "title {title:?} does not produce a usable slug"
        )));
    }
    // Lowercasing can lengthen some characters.
    if slug.chars().count() > MAX_TITLE_LEN {
        return Err(DomainError::Validation(format!(
            "slug must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(slug)
}
