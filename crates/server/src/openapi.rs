use utoipa::{OpenApi, ToSchema};

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: String,
}

#[derive(ToSchema)]
pub struct NewsItemDoc {
    pub id: u64,
    pub content: String,
    /// `draft`, `published` or `archived`
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(ToSchema)]
pub struct CreateNewsDoc {
    pub content: String,
    /// Defaults to `published`
    pub status: Option<String>,
}

#[derive(ToSchema)]
pub struct UpdateNewsDoc {
    pub content: Option<String>,
    pub status: Option<String>,
}

#[derive(ToSchema)]
pub struct ColorsDoc {
    pub orange: String,
    pub green: String,
}

#[derive(ToSchema)]
pub struct ColorsUpdateDoc {
    pub orange: Option<String>,
    pub green: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::news::list_news,
        crate::routes::news::list_archived,
        crate::routes::news::get_news,
        crate::routes::news::create_news,
        crate::routes::news::update_news,
        crate::routes::news::delete_news,
        crate::routes::news::archive_news,
        crate::routes::news::unarchive_news,
        crate::routes::news::ticker,
        crate::routes::settings::get_colors,
        crate::routes::settings::update_colors,
    ),
    components(
        schemas(
            HealthResponse,
            NewsItemDoc,
            CreateNewsDoc,
            UpdateNewsDoc,
            ColorsDoc,
            ColorsUpdateDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "news"),
        (name = "ticker"),
        (name = "settings")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/health",
            "/api/news",
            "/api/news/archived",
            "/api/news/{id}",
            "/api/news/{id}/archive",
            "/api/news/{id}/unarchive",
            "/api/ticker",
            "/api/settings/colors",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
