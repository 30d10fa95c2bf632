#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, Response, header},
};
use chrono_tz::Tz;
use http_body_util::BodyExt;
use journal::application::journal::JournalService;
use journal::application::repos::{
    CreatePostParams, PostsRepo, PostsWriteRepo, RepoError, StoreHealth,
};
use journal::domain::entities::PostRecord;
use journal::infra::http::{HttpState, build_router};
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tower::ServiceExt;
use uuid::Uuid;

/// Post store held in memory. Can be switched into a failing mode to exercise
/// the error paths.
#[derive(Default)]
pub struct MemoryStore {
    posts: Mutex<Vec<PostRecord>>,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        let store = Self::default();
        store.failing.store(true, Ordering::SeqCst);
        Arc::new(store)
    }

    pub async fn snapshot(&self) -> Vec<PostRecord> {
        self.posts.lock().await.clone()
    }

    pub async fn insert(&self, title: &str, content: &str, date: OffsetDateTime) -> PostRecord {
        let record = PostRecord {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: content.to_string(),
            date,
        };
        self.posts.lock().await.push(record.clone());
        record
    }

    fn check(&self) -> Result<(), RepoError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(RepoError::from_persistence("connection refused"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PostsRepo for MemoryStore {
    async fn list_posts(&self) -> Result<Vec<PostRecord>, RepoError> {
        self.check()?;
        Ok(self.posts.lock().await.clone())
    }

    async fn find_post(&self, id: Uuid) -> Result<Option<PostRecord>, RepoError> {
        self.check()?;
        Ok(self
            .posts
            .lock()
            .await
            .iter()
            .find(|post| post.id == id)
            .cloned())
    }
}

#[async_trait]
impl PostsWriteRepo for MemoryStore {
    async fn create_post(&self, params: CreatePostParams) -> Result<PostRecord, RepoError> {
        self.check()?;
        let record = PostRecord {
            id: Uuid::new_v4(),
            title: params.title,
            content: params.content,
            date: OffsetDateTime::now_utc(),
        };
        self.posts.lock().await.push(record.clone());
        Ok(record)
    }
}

#[async_trait]
impl StoreHealth for MemoryStore {
    async fn ping(&self) -> Result<(), RepoError> {
        self.check()
    }
}

pub fn journal_service(store: &Arc<MemoryStore>) -> JournalService {
    let posts: Arc<dyn PostsRepo> = store.clone();
    let writer: Arc<dyn PostsWriteRepo> = store.clone();
    JournalService::new(posts, writer, Tz::UTC)
}

pub fn router(store: &Arc<MemoryStore>) -> Router {
    let health: Arc<dyn StoreHealth> = store.clone();
    build_router(HttpState {
        journal: Arc::new(journal_service(store)),
        health,
    })
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    app.clone()
        .oneshot(request)
        .await
        .expect("router should respond")
}

pub async fn post_form(app: &Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.clone()
        .oneshot(request)
        .await
        .expect("router should respond")
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}
