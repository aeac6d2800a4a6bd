use crate::landing::LANDING_TRENDING_LIMIT;
use crate::{AppState, Effect, Msg, RequestTag};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted => {
            state.landing.mount();
            state.mark_dirty();
            vec![
                Effect::FetchTrending {
                    limit: LANDING_TRENDING_LIMIT,
                },
                Effect::FetchStats,
            ]
        }
        Msg::QueryChanged(text) => {
            state.search.set_query(text);
            state.mark_dirty();
            Vec::new()
        }
        Msg::PipelineFilterChanged(tag) => {
            state.search.set_pipeline_tag(tag);
            state.mark_dirty();
            Vec::new()
        }
        Msg::SearchSubmitted => match state.search.submit() {
            Some((tag, params)) => {
                state.mark_dirty();
                vec![Effect::Search { tag, params }]
            }
            None => Vec::new(),
        },
        Msg::SearchCompleted { tag, result } => {
            if state.search.resolve(&tag, result) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::TrendingLoaded(result) => {
            state.landing.apply_trending(result);
            state.mark_dirty();
            Vec::new()
        }
        Msg::StatsLoaded(result) => {
            state.landing.apply_stats(result);
            state.mark_dirty();
            Vec::new()
        }
        Msg::RouteOpened { segment } => {
            let tag = state.detail.open_segment(&segment);
            state.mark_dirty();
            fetch_model(tag)
        }
        Msg::ModelSelected { id } => {
            let tag = state.detail.open(&id);
            state.mark_dirty();
            fetch_model(tag)
        }
        Msg::BaseModelClicked => match state.detail.base_model().map(str::to_owned) {
            Some(base) => {
                let tag = state.detail.open(&base);
                state.mark_dirty();
                fetch_model(tag)
            }
            None => Vec::new(),
        },
        Msg::DetailRetry => {
            let tag = state.detail.retry();
            if tag.is_some() {
                state.mark_dirty();
            }
            fetch_model(tag)
        }
        Msg::DetailClosed => {
            state.detail.close();
            state.mark_dirty();
            Vec::new()
        }
        Msg::DetailCompleted { tag, result } => {
            if state.detail.resolve(&tag, result) {
                state.mark_dirty();
            }
            Vec::new()
        }
    };

    (state, effects)
}

fn fetch_model(tag: Option<RequestTag>) -> Vec<Effect> {
    tag.map(|tag| {
        let id = tag.key.clone();
        vec![Effect::FetchModel { tag, id }]
    })
    .unwrap_or_default()
}
