//! Render-ready projection of [`AppState`].
//!
//! Everything the presentation layer needs is pre-formatted here so that a
//! renderer only lays out strings.

use crate::detail::DetailOutcome;
use crate::ident;
use crate::search::SearchOutcome;
use crate::view_state::{FailureKind, ViewState};
use crate::{AppState, ModelDetail, ModelSummary, StatsSnapshot};

const TOTAL_MODELS_PLACEHOLDER: &str = "331K+";
const CATEGORIES_PLACEHOLDER: &str = "30+";
const LANGUAGES_PLACEHOLDER: &str = "184+";
const EMPTY_HINT: &str = "Search for models or browse trending models above";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    /// `/` on the landing view, `/model/{encoded id}` on a detail page.
    pub route: String,
    pub query: String,
    pub pipeline_filter: Option<String>,
    pub stats: Option<StatsView>,
    pub search: SearchView,
    pub trending: Vec<ModelCardView>,
    pub empty_hint: Option<String>,
    pub detail: DetailView,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchView {
    pub loading: bool,
    pub banner: Option<Banner>,
    /// `Search Results (N)`; absent when there is nothing to list.
    pub heading: Option<String>,
    pub results: Vec<ModelCardView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub severity: Severity,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsView {
    pub models_label: String,
    pub categories_label: String,
    pub languages_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelCardView {
    pub id: String,
    pub route: String,
    pub author_line: String,
    pub pipeline_tag: Option<String>,
    pub likes: Option<String>,
    pub downloads: Option<String>,
    pub trending_score: Option<String>,
    pub derivatives: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailView {
    #[default]
    Hidden,
    Loading,
    Failed(Banner),
    Ready(Box<DetailPage>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPage {
    pub title: String,
    pub author_line: String,
    pub warning: Option<Banner>,
    pub chips: Vec<String>,
    pub metrics: Vec<MetricView>,
    pub dates: Vec<String>,
    pub derived_from: Option<LinkView>,
    pub datasets: Vec<String>,
    pub hub_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricView {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkView {
    pub label: String,
    pub route: String,
}

pub(crate) fn build(state: &AppState) -> AppViewModel {
    let search = search_view(state.search().state());
    let trending: Vec<ModelCardView> = state
        .landing()
        .trending()
        .map(|trending| trending.models.iter().map(card).collect())
        .unwrap_or_default();
    let empty_hint = (!search.loading
        && search.results.is_empty()
        && search.banner.is_none()
        && trending.is_empty())
    .then(|| EMPTY_HINT.to_string());

    AppViewModel {
        route: state.detail().route().unwrap_or("/").to_string(),
        query: state.search().query().to_string(),
        pipeline_filter: state.search().pipeline_tag().map(str::to_owned),
        stats: state.landing().stats().map(stats_view),
        search,
        trending,
        empty_hint,
        detail: detail_view(state.detail().state()),
    }
}

fn search_view(state: &ViewState<SearchOutcome>) -> SearchView {
    match state {
        ViewState::Idle => SearchView::default(),
        ViewState::Loading => SearchView {
            loading: true,
            ..SearchView::default()
        },
        ViewState::Success(outcome) => SearchView {
            loading: false,
            banner: outcome.advisory.as_ref().map(|text| Banner {
                severity: Severity::Warning,
                text: text.clone(),
            }),
            heading: (!outcome.results.is_empty())
                .then(|| format!("Search Results ({})", outcome.results.len())),
            results: outcome.results.iter().map(card).collect(),
        },
        ViewState::Failure(info) => SearchView {
            banner: Some(Banner {
                severity: Severity::Warning,
                text: info.message.clone(),
            }),
            ..SearchView::default()
        },
    }
}

fn detail_view(state: &ViewState<DetailOutcome>) -> DetailView {
    match state {
        ViewState::Idle => DetailView::Hidden,
        ViewState::Loading => DetailView::Loading,
        ViewState::Failure(info) => DetailView::Failed(Banner {
            severity: match info.kind {
                FailureKind::NotFound => Severity::Error,
                FailureKind::Transport => Severity::Warning,
            },
            text: info.message.clone(),
        }),
        ViewState::Success(outcome) => DetailView::Ready(Box::new(detail_page(outcome))),
    }
}

fn detail_page(outcome: &DetailOutcome) -> DetailPage {
    let ModelDetail {
        summary,
        gated,
        created_at,
        last_modified,
        base_model,
        datasets,
    } = &outcome.model;

    let mut chips = Vec::new();
    chips.extend(summary.pipeline_tag.clone());
    chips.extend(summary.library_name.clone());
    chips.extend(summary.license.as_ref().map(|l| format!("License: {l}")));
    if *gated {
        chips.push("Gated".to_string());
    }

    let mut metrics = Vec::new();
    if summary.likes > 0 {
        metrics.push(MetricView {
            label: "Likes",
            value: format_count(summary.likes),
        });
    }
    if summary.downloads > 0 {
        metrics.push(MetricView {
            label: "Downloads",
            value: format_count(summary.downloads),
        });
    }
    if summary.trending_score > 0.0 {
        metrics.push(MetricView {
            label: "Trending Score",
            value: summary.trending_score.to_string(),
        });
    }
    if summary.derivative_count > 0 {
        metrics.push(MetricView {
            label: "Derivatives",
            value: summary.derivative_count.to_string(),
        });
    }

    let mut dates = Vec::new();
    if let Some(created) = created_at {
        dates.push(format!("Created: {}", created.format("%Y-%m-%d")));
    }
    if let Some(updated) = last_modified {
        dates.push(format!("Updated: {}", updated.format("%Y-%m-%d")));
    }

    DetailPage {
        title: summary.id.clone(),
        author_line: format!("by {}", summary.author),
        warning: outcome.advisory.as_ref().map(|text| Banner {
            severity: Severity::Warning,
            text: text.clone(),
        }),
        chips,
        metrics,
        dates,
        derived_from: base_model.as_ref().map(|base| LinkView {
            label: base.clone(),
            route: ident::model_route(base),
        }),
        datasets: datasets.clone(),
        hub_url: ident::hub_url(&summary.id),
    }
}

fn card(model: &ModelSummary) -> ModelCardView {
    ModelCardView {
        id: model.id.clone(),
        route: ident::model_route(&model.id),
        author_line: format!("by {}", model.author),
        pipeline_tag: model.pipeline_tag.clone(),
        likes: (model.likes > 0).then(|| format_count(model.likes)),
        downloads: (model.downloads > 0).then(|| format_count(model.downloads)),
        trending_score: (model.trending_score > 0.0).then(|| model.trending_score.to_string()),
        derivatives: (model.derivative_count > 0)
            .then(|| format!("{} derivatives", model.derivative_count)),
    }
}

// Zero counts are treated like missing ones; the backend reports 0 before it is populated.
fn stats_view(stats: &StatsSnapshot) -> StatsView {
    let models = stats
        .total_models
        .filter(|n| *n > 0)
        .map(format_count)
        .unwrap_or_else(|| TOTAL_MODELS_PLACEHOLDER.to_string());
    let categories = stats
        .pipeline_types
        .as_ref()
        .map(|types| types.len() as u64)
        .filter(|n| *n > 0)
        .map(|n| n.to_string())
        .unwrap_or_else(|| CATEGORIES_PLACEHOLDER.to_string());
    let languages = stats
        .languages_supported
        .filter(|n| *n > 0)
        .map(|n| n.to_string())
        .unwrap_or_else(|| LANGUAGES_PLACEHOLDER.to_string());

    StatsView {
        models_label: format!("{models} Models"),
        categories_label: format!("{categories} Categories"),
        languages_label: format!("{languages} Languages"),
    }
}

/// Formats a count with thousands separators, e.g. `331992` -> `331,992`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn format_count_groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(331_992), "331,992");
        assert_eq!(format_count(12_345_678), "12,345,678");
    }

    #[test]
    fn stats_fall_back_to_placeholders() {
        let view = stats_view(&StatsSnapshot::default());
        assert_eq!(view.models_label, "331K+ Models");
        assert_eq!(view.categories_label, "30+ Categories");
        assert_eq!(view.languages_label, "184+ Languages");
    }

    #[test]
    fn unpopulated_stats_fall_back_to_placeholders() {
        let view = stats_view(&StatsSnapshot {
            total_models: Some(0),
            pipeline_types: Some(BTreeMap::new()),
            languages_supported: Some(0),
        });
        assert_eq!(view.models_label, "331K+ Models");
        assert_eq!(view.categories_label, "30+ Categories");
        assert_eq!(view.languages_label, "184+ Languages");
    }

    #[test]
    fn stats_use_reported_values() {
        let mut types = BTreeMap::new();
        types.insert("text-generation".to_string(), 120_000);
        types.insert("fill-mask".to_string(), 9_000);
        let view = stats_view(&StatsSnapshot {
            total_models: Some(331_992),
            pipeline_types: Some(types),
            languages_supported: Some(184),
        });
        assert_eq!(view.models_label, "331,992 Models");
        assert_eq!(view.categories_label, "2 Categories");
        assert_eq!(view.languages_label, "184 Languages");
    }

    #[test]
    fn card_hides_zero_counters() {
        let view = card(&ModelSummary {
            id: "org/tiny".to_string(),
            author: "org".to_string(),
            ..ModelSummary::default()
        });
        assert_eq!(view.route, "/model/org%2Ftiny");
        assert_eq!(view.author_line, "by org");
        assert_eq!(view.likes, None);
        assert_eq!(view.downloads, None);
        assert_eq!(view.trending_score, None);
        assert_eq!(view.derivatives, None);
    }
}
