use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use service::news::{CreateNewsInput, NewsItem, NewsStatus, UpdateNewsInput};
use tracing::info;

use crate::errors::JsonApiError;
use crate::messages::{self, Op};
use crate::responses::{DataResponse, ListResponse, MessageResponse};
use crate::state::ServerState;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub status: Option<String>,
}

type ItemResult = Result<Json<DataResponse<NewsItem>>, JsonApiError>;

fn news_id(path: Result<Path<u64>, PathRejection>) -> Result<u64, JsonApiError> {
    path.map(|Path(id)| id).map_err(JsonApiError::bad_path)
}

#[utoipa::path(
    get, path = "/api/news", tag = "news",
    params(("status" = Option<String>, Query, description = "Exact status to match; archived items are hidden when omitted")),
    responses((status = 200, description = "Items, newest first", body = [crate::openapi::NewsItemDoc]))
)]
pub async fn list_news(
    State(state): State<ServerState>,
    Query(q): Query<ListQuery>,
) -> Json<ListResponse<NewsItem>> {
    let status = q.status.as_deref().filter(|s| !s.is_empty());
    let items = state.news.list(status).await;
    info!(count = items.len(), status = status.unwrap_or("*"), "list news");
    Json(ListResponse::new(items))
}

#[utoipa::path(get, path = "/api/news/archived", tag = "news", responses((status = 200, description = "Archived items, newest first", body = [crate::openapi::NewsItemDoc])))]
pub async fn list_archived(State(state): State<ServerState>) -> Json<ListResponse<NewsItem>> {
    Json(ListResponse::new(state.news.list_archived().await))
}

#[utoipa::path(
    get, path = "/api/news/{id}", tag = "news",
    params(("id" = u64, Path, description = "News item id")),
    responses((status = 200, description = "Item", body = crate::openapi::NewsItemDoc), (status = 404, description = "Not found"))
)]
pub async fn get_news(State(state): State<ServerState>, path: Result<Path<u64>, PathRejection>) -> ItemResult {
    let id = news_id(path)?;
    let item = state.news.get(id).await.map_err(|e| JsonApiError::from_service(e, Op::GetNews))?;
    Ok(Json(DataResponse::new(item)))
}

#[utoipa::path(
    post, path = "/api/news", tag = "news",
    request_body = crate::openapi::CreateNewsDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::NewsItemDoc),
        (status = 400, description = "Missing content"),
        (status = 500, description = "Save failed")
    )
)]
pub async fn create_news(
    State(state): State<ServerState>,
    body: Result<Json<CreateNewsInput>, JsonRejection>,
) -> Result<(StatusCode, Json<DataResponse<NewsItem>>), JsonApiError> {
    let Json(input) = body.map_err(JsonApiError::bad_body)?;
    let item = state
        .news
        .create(input)
        .await
        .map_err(|e| JsonApiError::from_service(e, Op::CreateNews))?;
    Ok((StatusCode::CREATED, Json(DataResponse::with_message(item, messages::NEWS_CREATED))))
}

#[utoipa::path(
    put, path = "/api/news/{id}", tag = "news",
    params(("id" = u64, Path, description = "News item id")),
    request_body = crate::openapi::UpdateNewsDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::NewsItemDoc),
        (status = 400, description = "Invalid body"),
        (status = 404, description = "Not found"),
        (status = 500, description = "Save failed")
    )
)]
pub async fn update_news(
    State(state): State<ServerState>,
    path: Result<Path<u64>, PathRejection>,
    body: Result<Json<UpdateNewsInput>, JsonRejection>,
) -> ItemResult {
    let id = news_id(path)?;
    let Json(input) = body.map_err(JsonApiError::bad_body)?;
    let item = state
        .news
        .update(id, input)
        .await
        .map_err(|e| JsonApiError::from_service(e, Op::UpdateNews))?;
    Ok(Json(DataResponse::with_message(item, messages::NEWS_UPDATED)))
}

#[utoipa::path(
    delete, path = "/api/news/{id}", tag = "news",
    params(("id" = u64, Path, description = "News item id")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not found"), (status = 500, description = "Save failed"))
)]
pub async fn delete_news(
    State(state): State<ServerState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    let id = news_id(path)?;
    state
        .news
        .delete(id)
        .await
        .map_err(|e| JsonApiError::from_service(e, Op::DeleteNews))?;
    Ok(Json(MessageResponse::new(messages::NEWS_DELETED)))
}

async fn change_status(state: &ServerState, id: u64, status: NewsStatus) -> ItemResult {
    let (op, message) = match status {
        NewsStatus::Archived => (Op::ArchiveNews, messages::NEWS_ARCHIVED),
        _ => (Op::UnarchiveNews, messages::NEWS_UNARCHIVED),
    };
    let item = state
        .news
        .set_status(id, status)
        .await
        .map_err(|e| JsonApiError::from_service(e, op))?;
    Ok(Json(DataResponse::with_message(item, message)))
}

#[utoipa::path(
    put, path = "/api/news/{id}/archive", tag = "news",
    params(("id" = u64, Path, description = "News item id")),
    responses((status = 200, description = "Archived", body = crate::openapi::NewsItemDoc), (status = 404, description = "Not found"), (status = 500, description = "Save failed"))
)]
pub async fn archive_news(State(state): State<ServerState>, path: Result<Path<u64>, PathRejection>) -> ItemResult {
    change_status(&state, news_id(path)?, NewsStatus::Archived).await
}

#[utoipa::path(
    put, path = "/api/news/{id}/unarchive", tag = "news",
    params(("id" = u64, Path, description = "News item id")),
    responses((status = 200, description = "Published again", body = crate::openapi::NewsItemDoc), (status = 404, description = "Not found"), (status = 500, description = "Save failed"))
)]
pub async fn unarchive_news(State(state): State<ServerState>, path: Result<Path<u64>, PathRejection>) -> ItemResult {
    change_status(&state, news_id(path)?, NewsStatus::Published).await
}

#[utoipa::path(get, path = "/api/ticker", tag = "ticker", responses((status = 200, description = "Latest published items", body = [crate::openapi::NewsItemDoc])))]
pub async fn ticker(State(state): State<ServerState>) -> Json<ListResponse<NewsItem>> {
    Json(ListResponse::new(state.news.ticker(state.ticker_limit).await))
}
