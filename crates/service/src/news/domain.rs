use std::{fmt, str::FromStr};

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::ServiceError;

/// Publication state of a news item. Any state may move to any other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsStatus {
    Draft,
    #[default]
    Published,
    Archived,
}

impl NewsStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NewsStatus::Draft => "draft",
            NewsStatus::Published => "published",
            NewsStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for NewsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NewsStatus {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(NewsStatus::Draft),
            "published" => Ok(NewsStatus::Published),
            "archived" => Ok(NewsStatus::Archived),
            other => Err(ServiceError::Validation(format!("unknown status `{other}`"))),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NewsItem {
    pub id: u64,
    pub content: String,
    #[serde(default)]
    pub status: NewsStatus,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// RFC 3339, or a naive `YYYY-MM-DDTHH:MM:SS[.ffffff]` taken as UTC.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp `{raw}`")))
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    raw.parse::<NaiveDateTime>().ok().map(|naive| Utc.from_utc_datetime(&naive))
}

impl NewsItem {
    /// Refresh `updated_at`, always moving it strictly forward.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        let floor = self.updated_at + Duration::microseconds(1);
        self.updated_at = if now > self.updated_at { now } else { floor };
    }
}

/// Body of `POST /api/news`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct CreateNewsInput {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub status: Option<NewsStatus>,
}

impl CreateNewsInput {
    pub fn new(content: impl Into<String>) -> Self {
        Self { content: Some(content.into()), status: None }
    }

    pub fn with_status(mut self, status: NewsStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Content is required and must not be blank.
    pub fn validate(&self) -> Result<(), ServiceError> {
        match self.content.as_deref() {
            Some(c) if !c.trim().is_empty() => Ok(()),
            _ => Err(ServiceError::Validation("content is required".into())),
        }
    }
}

/// Body of `PUT /api/news/{id}`; absent fields are left as they are.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateNewsInput {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub status: Option<NewsStatus>,
}

impl UpdateNewsInput {
    pub fn validate(&self) -> Result<(), ServiceError> {
        match self.content.as_deref() {
            Some(c) if c.trim().is_empty() => Err(ServiceError::Validation("content must not be empty".into())),
            _ => Ok(()),
        }
    }
}

/// On-disk shape of the news file.
///
/// `next_id` only ever grows, so an id freed by a delete is never handed out
/// again. Files written as a bare array of items are still read; their
/// counter is derived from the items.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(from = "NewsFileRepr")]
pub struct NewsDocument {
    pub next_id: u64,
    pub items: Vec<NewsItem>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NewsFileRepr {
    Document {
        #[serde(default)]
        next_id: u64,
        #[serde(default)]
        items: Vec<NewsItem>,
    },
    Legacy(Vec<NewsItem>),
}

impl From<NewsFileRepr> for NewsDocument {
    fn from(repr: NewsFileRepr) -> Self {
        let (next_id, items) = match repr {
            NewsFileRepr::Document { next_id, items } => (next_id, items),
            NewsFileRepr::Legacy(items) => (0, items),
        };
        let past_max = items.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        let past_count = items.len() as u64 + 1;
        Self { next_id: next_id.max(past_max).max(past_count), items }
    }
}

impl Default for NewsDocument {
    fn default() -> Self {
        Self { next_id: 1, items: Vec::new() }
    }
}

fn newest_first(items: &mut [NewsItem]) {
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
}

impl NewsDocument {
    fn collect<P>(&self, keep: P) -> Vec<NewsItem>
    where
        P: Fn(&NewsItem) -> bool,
    {
        let mut out: Vec<NewsItem> = self.items.iter().filter(|&i| keep(i)).cloned().collect();
        newest_first(&mut out);
        out
    }

    /// Exact status match when `status` is given (unknown values match
    /// nothing), otherwise everything that is not archived. Newest first.
    pub fn list(&self, status: Option<&str>) -> Vec<NewsItem> {
        match status {
            Some(s) => self.collect(|i| i.status.as_str() == s),
            None => self.collect(|i| i.status != NewsStatus::Archived),
        }
    }

    pub fn archived(&self) -> Vec<NewsItem> {
        self.collect(|i| i.status == NewsStatus::Archived)
    }

    /// Published items only, newest first, at most `limit`.
    pub fn ticker(&self, limit: usize) -> Vec<NewsItem> {
        let mut out = self.collect(|i| i.status == NewsStatus::Published);
        out.truncate(limit);
        out
    }

    pub fn find(&self, id: u64) -> Option<&NewsItem> {
        self.items.iter().find(|i| i.id == id)
    }

    fn find_mut(&mut self, id: u64) -> Result<&mut NewsItem, ServiceError> {
        self.items.iter_mut().find(|i| i.id == id).ok_or_else(|| ServiceError::not_found("news item"))
    }

    pub fn insert(&mut self, input: CreateNewsInput, now: DateTime<Utc>) -> Result<NewsItem, ServiceError> {
        input.validate()?;
        let item = NewsItem {
            id: self.next_id,
            content: input.content.unwrap_or_default(),
            status: input.status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        self.next_id += 1;
        self.items.push(item.clone());
        Ok(item)
    }

    pub fn apply_update(&mut self, id: u64, input: UpdateNewsInput, now: DateTime<Utc>) -> Result<NewsItem, ServiceError> {
        input.validate()?;
        let item = self.find_mut(id)?;
        if let Some(content) = input.content {
            item.content = content;
        }
        if let Some(status) = input.status {
            item.status = status;
        }
        item.touch(now);
        Ok(item.clone())
    }

    pub fn set_status(&mut self, id: u64, status: NewsStatus, now: DateTime<Utc>) -> Result<NewsItem, ServiceError> {
        let item = self.find_mut(id)?;
        item.status = status;
        item.touch(now);
        Ok(item.clone())
    }

    pub fn remove(&mut self, id: u64) -> Result<NewsItem, ServiceError> {
        let pos = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| ServiceError::not_found("news item"))?;
        Ok(self.items.remove(pos))
    }
}

/// Welcome items written on first start when seeding is enabled.
pub fn sample_news(now: DateTime<Utc>) -> NewsDocument {
    let items: Vec<NewsItem> = [
        "مرحباً بكم في منصة نائبك، المنصة الشاملة لمتابعة أداء النواب والمرشحين",
        "تم إضافة ميزات جديدة لتحسين تجربة المستخدم",
    ]
    .into_iter()
    .zip(1u64..)
    .map(|(content, id)| NewsItem {
        id,
        content: content.to_string(),
        status: NewsStatus::Published,
        created_at: now,
        updated_at: now,
    })
    .collect();
    NewsDocument { next_id: items.len() as u64 + 1, items }
}
