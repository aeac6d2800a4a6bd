//! JSON shapes returned by the backend and their normalization.
//!
//! The backend is loose about naming: the identifier shows up as `id`,
//! `modelId` or `model_id`, and camelCase variants of the other fields appear
//! on some endpoints. Everything is folded onto the canonical core types here.

use std::collections::BTreeMap;

use catalog_core::{
    ModelDetail, ModelLookup, ModelSummary, SearchResult, StatsSnapshot, TrendingResult,
};
use catalog_logging::catalog_warn;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct WireModel {
    id: Option<String>,
    #[serde(rename = "modelId")]
    model_id_camel: Option<String>,
    model_id: Option<String>,
    author: Option<String>,
    #[serde(alias = "pipelineTag")]
    pipeline_tag: Option<String>,
    #[serde(alias = "libraryName")]
    library_name: Option<String>,
    license: Option<String>,
    likes: Option<u64>,
    downloads: Option<u64>,
    #[serde(alias = "trendingScore")]
    trending_score: Option<f64>,
    #[serde(alias = "derivativeCount")]
    derivative_count: Option<u64>,
    gated: Value,
    #[serde(alias = "createdAt")]
    created_at: Option<String>,
    #[serde(alias = "lastModified")]
    last_modified: Option<String>,
    #[serde(alias = "baseModel")]
    base_model: Option<String>,
    datasets: Option<Vec<String>>,
    message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct WireSearch {
    results: Vec<WireModel>,
    message: Option<String>,
    total: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct WireTrending {
    models: Vec<WireModel>,
    timeframe: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct WireStats {
    #[serde(alias = "totalModels")]
    total_models: Option<u64>,
    #[serde(alias = "pipelineTypes")]
    pipeline_types: Option<BTreeMap<String, u64>>,
    #[serde(alias = "languagesSupported")]
    languages_supported: Option<u64>,
}

impl WireModel {
    /// First non-blank identifier among the aliases.
    fn canonical_id(&self) -> Option<String> {
        first_non_blank([&self.id, &self.model_id_camel, &self.model_id])
    }

    /// Identifier of a detail record. The backend echoes the requested id as
    /// `model_id` when the record is missing, so only `id`/`modelId` count.
    fn record_id(&self) -> Option<String> {
        first_non_blank([&self.id, &self.model_id_camel])
    }

    fn into_summary(self) -> Option<ModelSummary> {
        let id = self.canonical_id()?;
        Some(self.into_summary_with(id))
    }

    fn into_summary_with(self, id: String) -> ModelSummary {
        ModelSummary {
            author: self
                .author
                .filter(|author| !author.is_empty())
                .unwrap_or_else(|| id.split('/').next().unwrap_or_default().to_string()),
            id,
            pipeline_tag: non_blank(self.pipeline_tag),
            library_name: non_blank(self.library_name),
            license: non_blank(self.license),
            likes: self.likes.unwrap_or(0),
            downloads: self.downloads.unwrap_or(0),
            trending_score: self.trending_score.filter(|s| s.is_finite()).unwrap_or(0.0).max(0.0),
            derivative_count: self.derivative_count.unwrap_or(0),
        }
    }

    pub(crate) fn into_lookup(mut self) -> ModelLookup {
        let message = non_blank(self.message.take());
        let gated = is_truthy(&self.gated);
        let created_at = self.created_at.take().and_then(|raw| parse_timestamp(&raw));
        let last_modified = self.last_modified.take().and_then(|raw| parse_timestamp(&raw));
        let base_model = non_blank(self.base_model.take());
        let datasets = self.datasets.take().unwrap_or_default();

        let model = self
            .record_id()
            .map(|id| self.into_summary_with(id))
            .map(|summary| ModelDetail {
                summary,
                gated,
                created_at,
                last_modified,
                base_model,
                datasets,
            });
        ModelLookup { model, message }
    }
}

impl From<WireSearch> for SearchResult {
    fn from(wire: WireSearch) -> Self {
        SearchResult {
            results: summaries(wire.results, "search"),
            message: non_blank(wire.message),
            total: wire.total,
        }
    }
}

impl From<WireTrending> for TrendingResult {
    fn from(wire: WireTrending) -> Self {
        TrendingResult {
            models: summaries(wire.models, "trending"),
            timeframe: wire.timeframe,
        }
    }
}

impl From<WireStats> for StatsSnapshot {
    fn from(wire: WireStats) -> Self {
        StatsSnapshot {
            total_models: wire.total_models,
            pipeline_types: wire.pipeline_types,
            languages_supported: wire.languages_supported,
        }
    }
}

fn summaries(models: Vec<WireModel>, endpoint: &str) -> Vec<ModelSummary> {
    let total = models.len();
    let kept: Vec<ModelSummary> = models
        .into_iter()
        .filter_map(WireModel::into_summary)
        .collect();
    if kept.len() < total {
        catalog_warn!(
            "{endpoint}: dropped {} entries without an identifier",
            total - kept.len()
        );
    }
    kept
}

fn first_non_blank<const N: usize>(candidates: [&Option<String>; N]) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .map(|id| id.trim())
        .find(|id| !id.is_empty())
        .map(str::to_owned)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// The hub reports gating as a bool or as a mode string ("auto", "manual").
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::String(mode) => !mode.is_empty() && !mode.eq_ignore_ascii_case("false"),
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        _ => false,
    }
}

/// Accepts RFC 3339 and the naive ISO form the backend emits for UTC columns.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(naive) => Some(naive.and_utc()),
        Err(err) => {
            catalog_warn!("ignoring unparseable timestamp {:?}: {}", raw, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};
    use serde_json::json;

    use super::*;

    fn model(value: Value) -> WireModel {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn identifier_aliases_are_interchangeable() {
        for payload in [
            json!({"id": "org/a"}),
            json!({"modelId": "org/a"}),
            json!({"model_id": "org/a"}),
            json!({"id": "", "model_id": "org/a"}),
        ] {
            let summary = model(payload).into_summary().expect("summary");
            assert_eq!(summary.id, "org/a");
        }
    }

    #[test]
    fn camel_and_snake_fields_both_map() {
        let snake = model(json!({
            "id": "org/a", "author": "org", "pipeline_tag": "text-generation",
            "library_name": "transformers", "trending_score": 12.5, "derivative_count": 3
        }))
        .into_summary()
        .unwrap();
        let camel = model(json!({
            "modelId": "org/a", "author": "org", "pipelineTag": "text-generation",
            "libraryName": "transformers", "trendingScore": 12.5, "derivativeCount": 3
        }))
        .into_summary()
        .unwrap();
        assert_eq!(snake, camel);
        assert_eq!(snake.pipeline_tag.as_deref(), Some("text-generation"));
        assert_eq!(snake.derivative_count, 3);
    }

    #[test]
    fn missing_author_falls_back_to_namespace() {
        let summary = model(json!({"id": "mistralai/Mistral-7B"})).into_summary().unwrap();
        assert_eq!(summary.author, "mistralai");
    }

    #[test]
    fn nulls_and_negatives_are_clamped() {
        let summary = model(json!({
            "id": "x/y", "likes": null, "downloads": null, "trending_score": -4.0
        }))
        .into_summary()
        .unwrap();
        assert_eq!(summary.likes, 0);
        assert_eq!(summary.downloads, 0);
        assert_eq!(summary.trending_score, 0.0);
    }

    #[test]
    fn lookup_without_identifier_has_no_model() {
        let lookup = model(json!({"message": "Database not initialized yet.", "author": "x"}))
            .into_lookup();
        assert!(lookup.model.is_none());
        assert_eq!(lookup.message.as_deref(), Some("Database not initialized yet."));
    }

    #[test]
    fn lookup_ignores_echoed_snake_case_id() {
        let lookup = model(json!({
            "message": "Database not initialized yet.",
            "model_id": "org/a"
        }))
        .into_lookup();
        assert!(lookup.model.is_none());
        assert_eq!(lookup.message.as_deref(), Some("Database not initialized yet."));

        let camel = model(json!({"modelId": "org/a"})).into_lookup();
        assert_eq!(camel.model.map(|m| m.summary.id).as_deref(), Some("org/a"));
    }

    #[test]
    fn lookup_carries_detail_fields() {
        let lookup = model(json!({
            "id": "org/model-a",
            "author": "org",
            "gated": "manual",
            "created_at": "2024-03-01T10:20:30",
            "lastModified": "2024-06-02T08:00:00+02:00",
            "base_model": "org/model-b",
            "datasets": ["c4", "wikitext"]
        }))
        .into_lookup();
        let detail = lookup.model.expect("detail");
        assert!(detail.gated);
        assert_eq!(detail.base_model.as_deref(), Some("org/model-b"));
        assert_eq!(detail.datasets, vec!["c4", "wikitext"]);
        let created = detail.created_at.unwrap();
        assert_eq!((created.year(), created.month(), created.day()), (2024, 3, 1));
        assert_eq!(detail.last_modified.unwrap().hour(), 6);
        assert_eq!(lookup.message, None);
    }

    #[test]
    fn gated_truthiness() {
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!("auto")));
    }

    #[test]
    fn bad_timestamp_is_dropped() {
        assert_eq!(parse_timestamp("yesterday"), None);
    }

    #[test]
    fn search_drops_entries_without_identifier() {
        let wire: WireSearch = serde_json::from_value(json!({
            "results": [{"id": "a/b"}, {"author": "nobody"}],
            "message": "",
            "total": 2
        }))
        .unwrap();
        let result = SearchResult::from(wire);
        assert_eq!(result.results.len(), 1);
        assert_eq!(result.message, None);
        assert_eq!(result.total, Some(2));
    }
}
