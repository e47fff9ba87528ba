#![cfg(test)]
use configs::StoragePaths;

/// Fresh, not-yet-created data directory under the system temp dir.
pub fn temp_paths() -> StoragePaths {
    let dir = std::env::temp_dir().join(format!("news_service_{}", uuid::Uuid::new_v4()));
    StoragePaths::in_dir(dir)
}
