//! Domain entities - the core business objects.

mod post;
mod slug;

pub use post::{MAX_CATEGORY_LEN, MAX_TITLE_LEN, NewPost, Post};
pub use slug::slugify;
