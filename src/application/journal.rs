//! Journal service: the operations behind every public route.

use std::sync::Arc;

use axum::http::StatusCode;
use chrono_tz::Tz;
use metrics::counter;
use tracing::{debug, error, info};

use crate::application::content::{ABOUT_CONTENT, CONTACT_CONTENT, HOME_STARTING_CONTENT};
use crate::application::error::HttpError;
use crate::application::repos::{CreatePostParams, PostsRepo, PostsWriteRepo, RepoError};
use crate::domain::entities::PostRecord;
use crate::domain::posts::{NewPost, parse_post_id};
use crate::infra::telemetry::{POST_CREATE_FAILURES_TOTAL, POST_LOOKUPS_TOTAL, POSTS_CREATED_TOTAL};
use crate::presentation::views::{
    ComposeView, FooterView, HomeView, LayoutChrome, PostSummaryView, PostView, StaticPageView,
};
use crate::util::date;

const SOURCE: &str = "application::journal::JournalService";
const EXCERPT_CHARS: usize = 100;

/// Public message for any store failure.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

#[derive(Clone)]
pub struct JournalService {
    posts: Arc<dyn PostsRepo>,
    writer: Arc<dyn PostsWriteRepo>,
    timezone: Tz,
}

impl JournalService {
    pub fn new(posts: Arc<dyn PostsRepo>, writer: Arc<dyn PostsWriteRepo>, timezone: Tz) -> Self {
        Self {
            posts,
            writer,
            timezone,
        }
    }

    pub fn chrome(&self) -> LayoutChrome {
        LayoutChrome {
            footer: FooterView {
                year: date::current_year(self.timezone),
            },
        }
    }

    pub async fn home(&self) -> Result<HomeView, HttpError> {
        let records = self
            .posts
            .list_posts()
            .await
            .map_err(|err| repo_failure("list_posts", err))?;

        let posts = records
            .into_iter()
            .map(|record| self.summary(record))
            .collect();

        Ok(HomeView {
            starting_content: HOME_STARTING_CONTENT.to_string(),
            posts,
        })
    }

    pub fn about(&self) -> StaticPageView {
        StaticPageView {
            heading: "About".to_string(),
            body: ABOUT_CONTENT.to_string(),
        }
    }

    pub fn contact(&self) -> StaticPageView {
        StaticPageView {
            heading: "Contact".to_string(),
            body: CONTACT_CONTENT.to_string(),
        }
    }

    pub fn compose(&self) -> ComposeView {
        ComposeView {
            action: "/compose".to_string(),
        }
    }

    /// Store a new post and return it once the write has completed.
    pub async fn create_post(&self, post: NewPost) -> Result<PostRecord, HttpError> {
        let NewPost { title, content } = post;

        match self
            .writer
            .create_post(CreatePostParams { title, content })
            .await
        {
            Ok(record) => {
                counter!(POSTS_CREATED_TOTAL).increment(1);
                info!(
                    target = "journal::posts",
                    post_id = %record.id,
                    "post created"
                );
                Ok(record)
            }
            Err(err) => {
                counter!(POST_CREATE_FAILURES_TOTAL).increment(1);
                error!(
                    target = "journal::posts",
                    error = %err,
                    "failed to store post"
                );
                Err(repo_failure("create_post", err))
            }
        }
    }

    /// Look a post up by the identity taken from the request path.
    ///
    /// Malformed identities are reported as `Ok(None)`, same as unknown ones.
    pub async fn post_detail(&self, raw_id: &str) -> Result<Option<PostView>, HttpError> {
        let Some(id) = parse_post_id(raw_id) else {
            debug!(target = "journal::posts", post_id = raw_id, "malformed post id");
            counter!(POST_LOOKUPS_TOTAL, "outcome" => "not_found").increment(1);
            return Ok(None);
        };

        match self.posts.find_post(id).await {
            Ok(Some(record)) => {
                counter!(POST_LOOKUPS_TOTAL, "outcome" => "found").increment(1);
                Ok(Some(PostView {
                    title: record.title,
                    content: record.content,
                    date: date::post_timestamp(record.date, self.timezone),
                }))
            }
            Ok(None) | Err(RepoError::NotFound) => {
                counter!(POST_LOOKUPS_TOTAL, "outcome" => "not_found").increment(1);
                Ok(None)
            }
            Err(err) => {
                counter!(POST_LOOKUPS_TOTAL, "outcome" => "error").increment(1);
                Err(repo_failure("find_post", err))
            }
        }
    }

    fn summary(&self, record: PostRecord) -> PostSummaryView {
        PostSummaryView {
            href: format!("/posts/{}", record.id),
            excerpt: excerpt(&record.content, EXCERPT_CHARS),
            date: date::post_date_long(record.date, self.timezone),
            title: record.title,
        }
    }
}

fn repo_failure(operation: &'static str, err: RepoError) -> HttpError {
    HttpError::new(
        SOURCE,
        StatusCode::INTERNAL_SERVER_ERROR,
        GENERIC_ERROR_MESSAGE,
        format!("{operation} failed: {err}"),
    )
}

/// First `limit` characters of `content`, with "..." appended when cut short.
fn excerpt(content: &str, limit: usize) -> String {
    match content.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::excerpt;

    #[test]
    fn short_content_is_untouched() {
        assert_eq!(excerpt("short", 100), "short");
        assert_eq!(excerpt("", 100), "");
    }

    #[test]
    fn long_content_is_cut_on_char_boundaries() {
        assert_eq!(excerpt("abcdef", 3), "abc...");
        assert_eq!(excerpt("日記を書く", 2), "日記...");
    }

    #[test]
    fn content_exactly_at_limit_is_not_marked() {
        assert_eq!(excerpt("abc", 3), "abc");
    }
}
