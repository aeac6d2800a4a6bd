use crate::{
    ModelLookup, RequestTag, SearchResult, StatsSnapshot, TransportError, TrendingResult,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Landing view mounted; loads trending and stats.
    Mounted,
    /// User edited the search box.
    QueryChanged(String),
    /// User picked (or cleared) a pipeline-tag filter.
    PipelineFilterChanged(Option<String>),
    /// User submitted the search form.
    SearchSubmitted,
    SearchCompleted {
        tag: RequestTag,
        result: Result<SearchResult, TransportError>,
    },
    TrendingLoaded(Result<TrendingResult, TransportError>),
    StatsLoaded(Result<StatsSnapshot, TransportError>),
    /// Router landed on `/model/{segment}`; the segment is still encoded.
    RouteOpened { segment: String },
    /// User clicked a model card.
    ModelSelected { id: String },
    /// User clicked the "derived from" chip of the model on screen.
    BaseModelClicked,
    /// User asked to load the current model again.
    DetailRetry,
    /// User navigated back from the detail page.
    DetailClosed,
    DetailCompleted {
        tag: RequestTag,
        result: Result<ModelLookup, TransportError>,
    },
}
