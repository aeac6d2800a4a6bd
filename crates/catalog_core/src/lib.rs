//! Model catalog core: pure view-state machines and view-model helpers.
mod detail;
mod effect;
pub mod ident;
mod landing;
mod model;
mod msg;
mod request;
mod search;
mod state;
mod transport;
mod update;
mod view_model;
mod view_state;

pub use detail::{DetailMachine, DetailOutcome};
pub use effect::Effect;
pub use landing::{LandingData, LANDING_TRENDING_LIMIT};
pub use model::{
    ModelDetail, ModelLookup, ModelSummary, SearchParams, SearchResult, StatsSnapshot,
    TrendingResult,
};
pub use msg::Msg;
pub use request::RequestTag;
pub use search::{SearchMachine, SearchOutcome, SEARCH_PAGE_SIZE};
pub use state::AppState;
pub use transport::{TransportError, TransportErrorKind};
pub use update::update;
pub use view_model::{
    format_count, AppViewModel, Banner, DetailPage, DetailView, LinkView, MetricView,
    ModelCardView, SearchView, Severity, StatsView,
};
pub use view_state::{
    ErrorInfo, FailureKind, ViewState, DETAIL_FAILED, MODEL_NOT_FOUND, SEARCH_FAILED,
};
