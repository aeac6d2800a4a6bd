use catalog_logging::{catalog_debug, catalog_info, catalog_warn};

use crate::request::{RequestTag, RequestTracker};
use crate::view_state::{ErrorInfo, ViewState, SEARCH_FAILED};
use crate::{ModelSummary, SearchParams, SearchResult, TransportError};

/// Results requested per search; there is no further paging.
pub const SEARCH_PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub results: Vec<ModelSummary>,
    /// Server note shown next to the results, never instead of them.
    pub advisory: Option<String>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchMachine {
    query: String,
    pipeline_tag: Option<String>,
    state: ViewState<SearchOutcome>,
    tracker: RequestTracker,
}

impl SearchMachine {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn pipeline_tag(&self) -> Option<&str> {
        self.pipeline_tag.as_deref()
    }

    pub fn state(&self) -> &ViewState<SearchOutcome> {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        self.tracker.in_flight().is_some()
    }

    pub(crate) fn set_query(&mut self, text: String) {
        self.query = text;
    }

    pub(crate) fn set_pipeline_tag(&mut self, tag: Option<String>) {
        self.pipeline_tag = tag
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty());
    }

    /// Moves to `Loading` and returns the request to issue.
    ///
    /// Returns `None` without touching state when the trimmed query is empty.
    pub(crate) fn submit(&mut self) -> Option<(RequestTag, SearchParams)> {
        let query = self.query.trim();
        if query.is_empty() {
            return None;
        }
        let params = SearchParams {
            query: query.to_string(),
            page_size: SEARCH_PAGE_SIZE,
            pipeline_tag: self.pipeline_tag.clone(),
        };
        let tag = self.tracker.begin(query);
        self.state = ViewState::Loading;
        catalog_info!("search seq={} q={:?}", tag.seq, tag.key);
        Some((tag, params))
    }

    /// Applies a completion. Returns `false` when it was stale and dropped.
    pub(crate) fn resolve(
        &mut self,
        tag: &RequestTag,
        result: Result<SearchResult, TransportError>,
    ) -> bool {
        if !self.tracker.settle(tag) {
            catalog_debug!("dropping stale search seq={} q={:?}", tag.seq, tag.key);
            return false;
        }
        self.state = match result {
            Ok(payload) => {
                let advisory = payload.message.filter(|msg| !msg.trim().is_empty());
                if let Some(note) = advisory.as_deref() {
                    catalog_info!("search q={:?} advisory: {}", tag.key, note);
                }
                ViewState::Success(SearchOutcome {
                    results: payload.results,
                    advisory,
                    total: payload.total,
                })
            }
            Err(err) => {
                catalog_warn!("search q={:?} failed: {}", tag.key, err);
                ViewState::Failure(ErrorInfo::transport(SEARCH_FAILED))
            }
        };
        true
    }
}
