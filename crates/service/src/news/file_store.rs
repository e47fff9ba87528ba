use std::{path::PathBuf, sync::Arc};

use chrono::Utc;
use tracing::info;

use crate::errors::ServiceError;
use crate::news::domain::{sample_news, CreateNewsInput, NewsDocument, NewsItem, NewsStatus, UpdateNewsInput};
use crate::news::repository::NewsRepository;
use crate::storage::JsonDocument;

/// News items persisted as one JSON document; every call re-reads the file.
pub struct NewsFileStore {
    doc: JsonDocument<NewsDocument>,
}

impl NewsFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Arc<Self> {
        Arc::new(Self { doc: JsonDocument::new(path) })
    }

    /// Write the welcome items if the news file does not exist yet.
    pub async fn seed_if_missing(&self) -> Result<bool, ServiceError> {
        let seeded = self.doc.init_if_missing(sample_news(Utc::now())).await?;
        if seeded {
            info!(path = %self.doc.path().display(), "seeded sample news");
        }
        Ok(seeded)
    }
}

#[async_trait::async_trait]
impl NewsRepository for NewsFileStore {
    async fn list(&self, status: Option<&str>) -> Vec<NewsItem> {
        self.doc.read().await.list(status)
    }

    async fn list_archived(&self) -> Vec<NewsItem> {
        self.doc.read().await.archived()
    }

    async fn get(&self, id: u64) -> Result<NewsItem, ServiceError> {
        self.doc
            .read()
            .await
            .find(id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found("news item"))
    }

    async fn create(&self, input: CreateNewsInput) -> Result<NewsItem, ServiceError> {
        // reject before touching the file
        input.validate()?;
        let item = self.doc.update(|doc| doc.insert(input, Utc::now())).await?;
        info!(id = item.id, status = %item.status, "news item created");
        Ok(item)
    }

    async fn update(&self, id: u64, input: UpdateNewsInput) -> Result<NewsItem, ServiceError> {
        input.validate()?;
        let item = self.doc.update(|doc| doc.apply_update(id, input, Utc::now())).await?;
        info!(id, status = %item.status, "news item updated");
        Ok(item)
    }

    async fn delete(&self, id: u64) -> Result<(), ServiceError> {
        self.doc.update(|doc| doc.remove(id)).await?;
        info!(id, "news item deleted");
        Ok(())
    }

    async fn set_status(&self, id: u64, status: NewsStatus) -> Result<NewsItem, ServiceError> {
        let item = self.doc.update(|doc| doc.set_status(id, status, Utc::now())).await?;
        info!(id, %status, "news status changed");
        Ok(item)
    }

    async fn ticker(&self, limit: usize) -> Vec<NewsItem> {
        self.doc.read().await.ticker(limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::temp_paths;

    #[tokio::test]
    async fn news_store_crud_persists() -> Result<(), anyhow::Error> {
        let paths = temp_paths();
        let store = NewsFileStore::new(&paths.news_file);

        // initially empty
        assert!(store.list(None).await.is_empty());

        let a = store.create(CreateNewsInput::new("A")).await?;
        assert_eq!(a.id, 1);
        assert_eq!(a.status, NewsStatus::Published);

        let fetched = store.get(a.id).await?;
        assert_eq!(fetched.content, "A");

        let updated = store
            .update(a.id, UpdateNewsInput { content: Some("A2".into()), status: None })
            .await?;
        assert_eq!(updated.content, "A2");
        assert!(updated.updated_at > a.updated_at);

        // reload from disk
        let reopened = NewsFileStore::new(&paths.news_file);
        assert_eq!(reopened.get(a.id).await?.content, "A2");

        store.delete(a.id).await?;
        assert!(matches!(store.get(a.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn invalid_create_does_not_create_file() {
        let paths = temp_paths();
        let store = NewsFileStore::new(&paths.news_file);
        let res = store.create(CreateNewsInput::default()).await;
        assert!(matches!(res, Err(ServiceError::Validation(_))));
        assert!(!paths.news_file.exists());
    }

    #[tokio::test]
    async fn archive_round_trip_moves_between_lists() -> Result<(), anyhow::Error> {
        let paths = temp_paths();
        let store = NewsFileStore::new(&paths.news_file);
        let item = store.create(CreateNewsInput::new("A")).await?;

        let archived = store.archive(item.id).await?;
        assert_eq!(archived.status, NewsStatus::Archived);
        assert!(store.list(None).await.is_empty());
        assert_eq!(store.list_archived().await.len(), 1);
        assert!(store.ticker(10).await.is_empty());

        let restored = store.unarchive(item.id).await?;
        assert_eq!(restored.status, NewsStatus::Published);
        assert_eq!(store.list(None).await.len(), 1);
        assert!(store.list_archived().await.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn delete_missing_leaves_file_unchanged() -> Result<(), anyhow::Error> {
        let paths = temp_paths();
        let store = NewsFileStore::new(&paths.news_file);
        store.create(CreateNewsInput::new("keep")).await?;
        let before = tokio::fs::read(&paths.news_file).await?;

        for _ in 0..2 {
            assert!(matches!(store.delete(42).await, Err(ServiceError::NotFound(_))));
        }
        assert!(matches!(store.archive(42).await, Err(ServiceError::NotFound(_))));
        assert_eq!(tokio::fs::read(&paths.news_file).await?, before);
        Ok(())
    }

    #[tokio::test]
    async fn concurrent_creates_get_distinct_ids() -> Result<(), anyhow::Error> {
        let paths = temp_paths();
        let store = NewsFileStore::new(&paths.news_file);
        let mut handles = Vec::new();
        for n in 0..8 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move { store.create(CreateNewsInput::new(format!("n{n}"))).await }));
        }
        let mut ids = Vec::new();
        for h in handles {
            ids.push(h.await??.id);
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=8).collect::<Vec<u64>>());
        Ok(())
    }

    #[tokio::test]
    async fn array_file_with_naive_timestamps_keeps_items_on_create() -> Result<(), anyhow::Error> {
        let paths = temp_paths();
        if let Some(dir) = paths.news_file.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }
        let legacy = r#"[{"id": 1, "content": "old", "status": "published",
            "created_at": "2024-05-01T10:00:00.123456", "updated_at": "2024-05-01T10:00:00.123456"}]"#;
        tokio::fs::write(&paths.news_file, legacy).await?;

        let store = NewsFileStore::new(&paths.news_file);
        assert_eq!(store.list(None).await.len(), 1);

        let created = store.create(CreateNewsInput::new("new")).await?;
        assert_eq!(created.id, 2);

        let reopened = NewsFileStore::new(&paths.news_file);
        assert_eq!(reopened.get(1).await?.content, "old");
        assert_eq!(reopened.list(None).await.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn seed_only_when_missing() -> Result<(), anyhow::Error> {
        let paths = temp_paths();
        let store = NewsFileStore::new(&paths.news_file);
        assert!(store.seed_if_missing().await?);
        assert_eq!(store.ticker(10).await.len(), 2);

        store.create(CreateNewsInput::new("third")).await?;
        assert!(!store.seed_if_missing().await?);
        assert_eq!(store.list(None).await.len(), 3);
        Ok(())
    }
}
