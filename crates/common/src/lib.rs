//! Shared plumbing for the news ticker workspace: logging setup, data
//! directory bootstrap and wire types used by more than one crate.

pub mod types;
pub mod utils;
pub mod env;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_reports_healthy() {
        let h = types::Health::now("naebak-news-service");
        assert_eq!(h.status, "healthy");
        assert_eq!(h.service, "naebak-news-service");
    }
}
