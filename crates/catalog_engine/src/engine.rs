use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use catalog_core::Effect;
use catalog_logging::{catalog_debug, catalog_warn};
use tokio::sync::mpsc as async_mpsc;

use crate::client::CatalogApi;
use crate::EngineEvent;

/// Runs backend calls on a dedicated single-threaded runtime.
///
/// Effects go in through [`EngineHandle::execute`]; completions come back
/// through [`EngineHandle::try_recv`] or [`EngineHandle::recv_timeout`].
/// Dropping the handle stops the runtime and abandons outstanding calls.
pub struct EngineHandle {
    cmd_tx: async_mpsc::UnboundedSender<Effect>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(api: Arc<dyn CatalogApi>) -> io::Result<Self> {
        let (cmd_tx, mut cmd_rx) = async_mpsc::unbounded_channel::<Effect>();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        thread::Builder::new()
            .name("catalog-engine".to_string())
            .spawn(move || {
                runtime.block_on(async move {
                    while let Some(effect) = cmd_rx.recv().await {
                        let api = api.clone();
                        let event_tx = event_tx.clone();
                        tokio::spawn(async move {
                            let event = execute_effect(api.as_ref(), effect).await;
                            if event_tx.send(event).is_err() {
                                catalog_debug!("engine event dropped: receiver gone");
                            }
                        });
                    }
                });
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn execute(&self, effect: Effect) {
        if self.cmd_tx.send(effect).is_err() {
            catalog_warn!("engine thread has stopped; effect discarded");
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

/// Performs the backend call an effect asks for.
pub async fn execute_effect(api: &dyn CatalogApi, effect: Effect) -> EngineEvent {
    match effect {
        Effect::Search { tag, params } => EngineEvent::SearchCompleted {
            result: api.search(&params).await,
            tag,
        },
        Effect::FetchModel { tag, id } => EngineEvent::ModelCompleted {
            result: api.get_model(&id).await,
            tag,
        },
        Effect::FetchTrending { limit } => {
            EngineEvent::TrendingCompleted(api.get_trending(limit).await)
        }
        Effect::FetchStats => EngineEvent::StatsCompleted(api.get_stats().await),
    }
}
