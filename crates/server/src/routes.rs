use axum::{
    routing::{get, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod health;
pub mod news;
pub mod settings;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(openapi_json));

    let news_routes = Router::new()
        .route("/api/news", get(news::list_news).post(news::create_news))
        .route("/api/news/archived", get(news::list_archived))
        .route(
            "/api/news/:id",
            get(news::get_news).put(news::update_news).delete(news::delete_news),
        )
        .route("/api/news/:id/archive", put(news::archive_news))
        .route("/api/news/:id/unarchive", put(news::unarchive_news))
        .route("/api/ticker", get(news::ticker));

    let settings_routes = Router::new()
        .route("/api/settings/colors", get(settings::get_colors).put(settings::update_colors));

    public
        .merge(news_routes)
        .merge(settings_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request with method and path
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status and latency
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

/// The ticker widget is served from other origins.
pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}
