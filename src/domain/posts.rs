//! Post input coercion and identity parsing.

use uuid::Uuid;

/// Author-supplied fields for a new post.
///
/// Neither field is validated: empty strings are stored as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

impl NewPost {
    /// Coerce optional form fields into post text. Missing fields become empty.
    pub fn from_fields(title: Option<String>, content: Option<String>) -> Self {
        Self {
            title: title.unwrap_or_default(),
            content: content.unwrap_or_default(),
        }
    }
}

/// Parse a post identity taken from a request path.
///
/// Returns `None` for anything that is not a UUID; such identities can never
/// address a stored post.
pub fn parse_post_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}
