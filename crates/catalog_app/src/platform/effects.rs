use std::sync::Arc;
use std::time::Duration;

use catalog_core::{Effect, Msg};
use catalog_engine::{CatalogApi, EngineEvent, EngineHandle};
use catalog_logging::catalog_info;

/// Hands effects to the engine and turns its completions back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(api: Arc<dyn CatalogApi>) -> std::io::Result<Self> {
        Ok(Self {
            engine: EngineHandle::new(api)?,
        })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match &effect {
                Effect::Search { tag, params } => catalog_info!(
                    "Search seq={} q={:?} filter={:?}",
                    tag.seq,
                    params.query,
                    params.pipeline_tag
                ),
                Effect::FetchModel { tag, id } => {
                    catalog_info!("FetchModel seq={} id={}", tag.seq, id)
                }
                Effect::FetchTrending { limit } => catalog_info!("FetchTrending limit={}", limit),
                Effect::FetchStats => catalog_info!("FetchStats"),
            }
            self.engine.execute(effect);
        }
    }

    /// Waits up to `timeout` for the next completion.
    pub fn next_msg(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(to_msg)
    }
}

fn to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SearchCompleted { tag, result } => Msg::SearchCompleted { tag, result },
        EngineEvent::ModelCompleted { tag, result } => Msg::DetailCompleted { tag, result },
        EngineEvent::TrendingCompleted(result) => Msg::TrendingLoaded(result),
        EngineEvent::StatsCompleted(result) => Msg::StatsLoaded(result),
    }
}
