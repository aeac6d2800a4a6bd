use crate::{RequestTag, SearchParams};

/// Backend call requested by `update`; the runner reports back with a `Msg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Search { tag: RequestTag, params: SearchParams },
    FetchModel { tag: RequestTag, id: String },
    FetchTrending { limit: u32 },
    FetchStats,
}
