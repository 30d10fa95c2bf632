use async_trait::async_trait;
use uuid::Uuid;

use crate::application::repos::{CreatePostParams, PostsWriteRepo, RepoError};
use crate::domain::entities::PostRecord;
use crate::infra::db::{PostgresRepositories, map_sqlx_error};

use super::PostRow;

// `date` is filled by the column default.
const INSERT_POST_SQL: &str = "INSERT INTO posts (id, title, content) \
    VALUES ($1, $2, $3) \
    RETURNING id, title, content, date";

#[async_trait]
impl PostsWriteRepo for PostgresRepositories {
    async fn create_post(&self, params: CreatePostParams) -> Result<PostRecord, RepoError> {
        let CreatePostParams { title, content } = params;

        let id = Uuid::new_v4();
        let row = sqlx::query_as::<_, PostRow>(INSERT_POST_SQL)
            .bind(id)
            .bind(title)
            .bind(content)
            .fetch_one(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(PostRecord::from(row))
    }
}
