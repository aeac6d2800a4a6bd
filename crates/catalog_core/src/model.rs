use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

/// One catalog record as listed by search and trending.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModelSummary {
    pub id: String,
    pub author: String,
    pub pipeline_tag: Option<String>,
    pub library_name: Option<String>,
    pub license: Option<String>,
    pub likes: u64,
    pub downloads: u64,
    pub trending_score: f64,
    pub derivative_count: u64,
}

/// Full record returned by the model endpoint.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModelDetail {
    pub summary: ModelSummary,
    pub gated: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub last_modified: Option<DateTime<Utc>>,
    /// Identifier of the model this one was derived from.
    pub base_model: Option<String>,
    pub datasets: Vec<String>,
}

impl ModelDetail {
    pub fn id(&self) -> &str {
        &self.summary.id
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchResult {
    pub results: Vec<ModelSummary>,
    /// Non-fatal advisory, e.g. "query too broad".
    pub message: Option<String>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrendingResult {
    pub models: Vec<ModelSummary>,
    pub timeframe: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    pub total_models: Option<u64>,
    pub pipeline_types: Option<BTreeMap<String, u64>>,
    pub languages_supported: Option<u64>,
}

/// Normalized answer of the model endpoint.
///
/// `model` is `None` when the payload carried no usable identifier.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModelLookup {
    pub model: Option<ModelDetail>,
    pub message: Option<String>,
}

/// Parameters of one search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub query: String,
    pub page_size: u32,
    pub pipeline_tag: Option<String>,
}
