//! Domain entities mirrored from persistent storage.

use time::OffsetDateTime;
use uuid::Uuid;

/// A single journal entry as stored.
///
/// `id` and `date` are assigned by the store when the post is written and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PostRecord {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub date: OffsetDateTime,
}
