use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use tracing::{debug, info};

use crate::config::LoadMode;
use crate::error::{AppError, AppResult};
use crate::models::Record;

// ── Collection ────────────────────────────────────────────────────────────────

/// Immutable, ordered records of one resource. Cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct Collection(Arc<Vec<Record>>);

impl Collection {
    pub fn records(&self) -> &[Record] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<Record>> for Collection {
    fn from(records: Vec<Record>) -> Self {
        Self(Arc::new(records))
    }
}

/// Parse raw file content. Anything other than a JSON array is rejected.
pub fn parse_collection(path: &Path, bytes: &[u8]) -> AppResult<Collection> {
    let value: Value = serde_json::from_slice(bytes).map_err(|e| AppError::MalformedData {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    match value {
        Value::Array(records) => Ok(Collection::from(records)),
        other => Err(AppError::MalformedData {
            path: path.to_path_buf(),
            reason: format!("expected a JSON array, found {}", json_kind(&other)),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ── Source ────────────────────────────────────────────────────────────────────

/// A JSON file backing one collection.
#[derive(Debug, Clone)]
pub struct CollectionSource {
    name: &'static str,
    path: PathBuf,
    /// Set in [`LoadMode::Startup`]; never replaced afterwards.
    snapshot: Option<Collection>,
}

impl CollectionSource {
    /// A source that reads `path` on every [`load`](Self::load).
    pub fn new(name: &'static str, path: impl Into<PathBuf>) -> Self {
        Self {
            name,
            path: path.into(),
            snapshot: None,
        }
    }

    /// Build a source for `mode`, reading the file now when it is `Startup`.
    pub async fn open(
        name: &'static str,
        path: impl Into<PathBuf>,
        mode: LoadMode,
    ) -> AppResult<Self> {
        let source = Self::new(name, path);
        match mode {
            LoadMode::PerRequest => Ok(source),
            LoadMode::Startup => source.preload().await,
        }
    }

    /// Read the file once and serve that snapshot from now on.
    pub async fn preload(mut self) -> AppResult<Self> {
        let collection = self.read().await?;
        info!(
            source = self.name,
            path = %self.path.display(),
            count = collection.len(),
            "Preloaded collection"
        );
        self.snapshot = Some(collection);
        Ok(self)
    }

    pub async fn load(&self) -> AppResult<Collection> {
        match &self.snapshot {
            Some(collection) => Ok(collection.clone()),
            None => self.read().await,
        }
    }

    async fn read(&self) -> AppResult<Collection> {
        let start = Instant::now();
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| AppError::SourceUnavailable {
                path: self.path.clone(),
                source,
            })?;
        let collection = parse_collection(&self.path, &bytes)?;

        debug!(
            source = self.name,
            count = collection.len(),
            bytes = bytes.len(),
            elapsed_us = start.elapsed().as_micros(),
            "Read collection from disk"
        );

        Ok(collection)
    }
}
