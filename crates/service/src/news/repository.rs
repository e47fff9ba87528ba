use async_trait::async_trait;

use crate::errors::ServiceError;
use crate::news::domain::{CreateNewsInput, NewsItem, NewsStatus, UpdateNewsInput};

/// Trait abstraction for news storage.
#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// Items with exactly `status`, or all non-archived items. Newest first.
    async fn list(&self, status: Option<&str>) -> Vec<NewsItem>;
    async fn list_archived(&self) -> Vec<NewsItem>;
    async fn get(&self, id: u64) -> Result<NewsItem, ServiceError>;
    async fn create(&self, input: CreateNewsInput) -> Result<NewsItem, ServiceError>;
    async fn update(&self, id: u64, input: UpdateNewsInput) -> Result<NewsItem, ServiceError>;
    async fn delete(&self, id: u64) -> Result<(), ServiceError>;
    async fn set_status(&self, id: u64, status: NewsStatus) -> Result<NewsItem, ServiceError>;
    async fn ticker(&self, limit: usize) -> Vec<NewsItem>;

    async fn archive(&self, id: u64) -> Result<NewsItem, ServiceError> {
        self.set_status(id, NewsStatus::Archived).await
    }

    async fn unarchive(&self, id: u64) -> Result<NewsItem, ServiceError> {
        self.set_status(id, NewsStatus::Published).await
    }
}
