use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::error::ResourceError;

/// A single catalog entry linking to an external learning resource
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub description: String,
    pub source: String,
    pub tags: Vec<String>,
    pub link: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    pub date_added: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visits: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clicks: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_sponsored: Option<bool>,
}

impl Resource {
    /// Sponsored resources belong to the gated tier whatever their category
    pub fn is_sponsored_tier(&self) -> bool {
        self.is_sponsored.unwrap_or(false)
    }
}

/// Unvalidated record as it arrives from a seed file or an admin request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceInput {
    pub id: Option<String>,
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub link: Option<String>,
    pub category: Option<String>,
    #[serde(default, alias = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(alias = "dateAdded")]
    pub date_added: Option<String>,
    #[serde(default)]
    pub visits: Option<u64>,
    #[serde(default)]
    pub clicks: Option<u64>,
    #[serde(default)]
    pub is_sponsored: Option<bool>,
}

impl TryFrom<ResourceInput> for Resource {
    type Error = ResourceError;

    fn try_from(input: ResourceInput) -> Result<Self, Self::Error> {
        let id = required(input.id, "id")?;
        let title = required(input.title, "title")?;
        let category = required(input.category, "category")?;
        let link = required(input.link, "link")?;
        let date_added = parse_date_added(&required(input.date_added, "date_added")?)?;

        Ok(Resource {
            id,
            title,
            description: input.description.unwrap_or_default(),
            source: input.source.unwrap_or_default(),
            tags: input.tags,
            link,
            category,
            image_url: input.image_url,
            rating: input.rating,
            date_added,
            visits: input.visits,
            clicks: input.clicks,
            is_sponsored: input.is_sponsored,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ResourceError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ResourceError::MissingField(field)),
    }
}

/// Accepts RFC 3339 timestamps or plain `YYYY-MM-DD` dates (midnight UTC)
pub fn parse_date_added(raw: &str) -> Result<DateTime<Utc>, ResourceError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| ResourceError::InvalidDate(raw.to_string()))
}

/// Validates raw records at the repository boundary.
///
/// Malformed records are skipped with a warning. A duplicate id keeps the first
/// occurrence so that the admitted collection never holds two records with the same id.
pub fn admit_records(inputs: impl IntoIterator<Item = ResourceInput>) -> Vec<Resource> {
    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut admitted = Vec::new();

    for input in inputs {
        let raw_id = input.id.clone();
        match Resource::try_from(input) {
            Ok(resource) => {
                if seen_ids.insert(resource.id.clone()) {
                    admitted.push(resource);
                } else {
                    tracing::warn!(resource_id = %resource.id, "Duplicate resource id skipped");
                }
            }
            Err(e) => {
                tracing::warn!(resource_id = ?raw_id, error = %e, "Malformed resource rejected");
            }
        }
    }

    admitted
}
