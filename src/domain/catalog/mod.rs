use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::resource::Resource;

pub mod error;
pub mod service;

pub use error::CatalogServiceError;
pub use service::CatalogService;

/// Category name with the number of resources filed under it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorySummary {
    pub name: String,
    pub count: usize,
}

/// Source of the raw collection. Implementations validate records before
/// handing them over, so the catalog only ever holds well-formed resources.
#[async_trait]
pub trait ResourceRepository: Send + Sync {
    async fn fetch_all(&self) -> anyhow::Result<Vec<Resource>>;
}
