use anyhow::Context;
use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::catalog::ResourceRepository;
use crate::domain::resource::{admit_records, Resource, ResourceInput};

/// Reads the collection from a JSON array on disk on every fetch, so a
/// catalog refresh picks up edits to the file.
pub struct JsonFileResourceRepository {
    path: PathBuf,
}

impl JsonFileResourceRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ResourceRepository for JsonFileResourceRepository {
    async fn fetch_all(&self) -> anyhow::Result<Vec<Resource>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        let records: Vec<ResourceInput> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;

        tracing::debug!(
            path = %self.path.display(),
            record_count = records.len(),
            "Loaded resource records"
        );
        Ok(admit_records(records))
    }
}
