use std::{io::ErrorKind, marker::PhantomData, path::{Path, PathBuf}};

use serde::{de::DeserializeOwned, Serialize};
use tokio::{fs, sync::Mutex};
use tracing::{debug, error};

use crate::errors::ServiceError;

/// Read and parse `path`, falling back to `default()` when the file is
/// missing. Read and parse failures are logged and also yield the default.
pub async fn load_or_default<T, F>(path: &Path, default: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "document missing, using default");
            return default();
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "failed to read document");
            return default();
        }
    };
    match serde_json::from_slice(&bytes) {
        Ok(value) => value,
        Err(e) => {
            error!(path = %path.display(), error = %e, "failed to parse document");
            default()
        }
    }
}

/// Serialize `value` as indented UTF-8 JSON and overwrite `path`,
/// creating parent directories first.
pub async fn save<T: Serialize>(path: &Path, value: &T) -> Result<(), ServiceError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await.map_err(|e| {
            error!(path = %parent.display(), error = %e, "failed to create data directory");
            ServiceError::storage(parent, e)
        })?;
    }
    let data = serde_json::to_vec_pretty(value).map_err(|e| ServiceError::storage(path, e))?;
    fs::write(path, data).await.map_err(|e| {
        error!(path = %path.display(), error = %e, "failed to write document");
        ServiceError::storage(path, e)
    })
}

/// A single JSON file holding one `T`.
///
/// Reads and read-modify-write cycles on the same instance are serialized by
/// an async mutex. Other processes writing the file are not coordinated with.
pub struct JsonDocument<T> {
    path: PathBuf,
    lock: Mutex<()>,
    _doc: PhantomData<fn() -> T>,
}

impl<T> JsonDocument<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into(), lock: Mutex::new(()), _doc: PhantomData }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn exists(&self) -> bool {
        fs::try_exists(&self.path).await.unwrap_or(false)
    }

    /// Current content, or `T::default()` if the file is absent or unreadable.
    pub async fn read(&self) -> T {
        let _guard = self.lock.lock().await;
        load_or_default(&self.path, T::default).await
    }

    /// Load, apply `f`, and persist. The file is left untouched when `f` fails.
    pub async fn update<R, F>(&self, f: F) -> Result<R, ServiceError>
    where
        F: FnOnce(&mut T) -> Result<R, ServiceError>,
    {
        let _guard = self.lock.lock().await;
        let mut doc = load_or_default(&self.path, T::default).await;
        let out = f(&mut doc)?;
        save(&self.path, &doc).await?;
        Ok(out)
    }

    /// Write `value` only if the file does not exist yet. Returns whether it wrote.
    pub async fn init_if_missing(&self, value: T) -> Result<bool, ServiceError> {
        let _guard = self.lock.lock().await;
        if fs::try_exists(&self.path).await.unwrap_or(false) {
            return Ok(false);
        }
        save(&self.path, &value).await?;
        Ok(true)
    }
}
