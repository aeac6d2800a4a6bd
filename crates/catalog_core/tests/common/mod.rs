#![allow(dead_code)]

use std::sync::Once;

use catalog_core::{update, AppState, Effect, ModelDetail, ModelSummary, Msg, RequestTag};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(catalog_logging::initialize_for_tests);
}

pub fn summary(id: &str) -> ModelSummary {
    ModelSummary {
        id: id.to_string(),
        author: id.split('/').next().unwrap_or(id).to_string(),
        ..ModelSummary::default()
    }
}

pub fn detail(id: &str) -> ModelDetail {
    ModelDetail {
        summary: summary(id),
        ..ModelDetail::default()
    }
}

pub fn submit_query(state: AppState, query: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::QueryChanged(query.to_string()));
    update(state, Msg::SearchSubmitted)
}

pub fn search_tag(effects: &[Effect]) -> RequestTag {
    match effects {
        [Effect::Search { tag, .. }] => tag.clone(),
        other => panic!("expected a single search effect, got {other:?}"),
    }
}

pub fn model_tag(effects: &[Effect]) -> RequestTag {
    match effects {
        [Effect::FetchModel { tag, .. }] => tag.clone(),
        other => panic!("expected a single model fetch, got {other:?}"),
    }
}
