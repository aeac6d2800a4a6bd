use catalog_core::{
    ModelLookup, RequestTag, SearchResult, StatsSnapshot, TransportError, TrendingResult,
};

/// Completion of one backend call, in the order calls happen to finish.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    SearchCompleted {
        tag: RequestTag,
        result: Result<SearchResult, TransportError>,
    },
    ModelCompleted {
        tag: RequestTag,
        result: Result<ModelLookup, TransportError>,
    },
    TrendingCompleted(Result<TrendingResult, TransportError>),
    StatsCompleted(Result<StatsSnapshot, TransportError>),
}
