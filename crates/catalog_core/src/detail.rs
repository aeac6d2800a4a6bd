use catalog_logging::{catalog_debug, catalog_info, catalog_warn};

use crate::ident;
use crate::request::{RequestTag, RequestTracker};
use crate::view_state::{ErrorInfo, ViewState, DETAIL_FAILED};
use crate::{ModelDetail, ModelLookup, TransportError};

#[derive(Debug, Clone, PartialEq)]
pub struct DetailOutcome {
    pub model: ModelDetail,
    /// Server note shown as a warning above the rendered fields.
    pub advisory: Option<String>,
}

/// Detail page state, keyed by the identifier currently on screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailMachine {
    id: Option<String>,
    route: Option<String>,
    state: ViewState<DetailOutcome>,
    tracker: RequestTracker,
}

impl DetailMachine {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn route(&self) -> Option<&str> {
        self.route.as_deref()
    }

    pub fn state(&self) -> &ViewState<DetailOutcome> {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        self.tracker.in_flight().is_some()
    }

    /// Identifier behind the "derived from" link of the model on screen.
    pub fn base_model(&self) -> Option<&str> {
        self.state
            .success()
            .and_then(|outcome| outcome.model.base_model.as_deref())
    }

    /// Starts loading `id`, discarding whatever was shown before.
    ///
    /// Returns `None` when `id` is already being loaded or cannot name a model.
    pub(crate) fn open(&mut self, id: &str) -> Option<RequestTag> {
        if let Err(err) = ident::validate(id) {
            catalog_warn!("refusing to look up model {:?}: {}", id, err);
            self.unreachable(ident::model_route(id));
            return None;
        }
        if self.id.as_deref() == Some(id) && self.state.is_loading() {
            return None;
        }
        self.id = Some(id.to_string());
        self.route = Some(ident::model_route(id));
        Some(self.start())
    }

    /// Opens the model named by an encoded route segment.
    pub(crate) fn open_segment(&mut self, segment: &str) -> Option<RequestTag> {
        match ident::decode(segment) {
            Ok(id) => self.open(&id),
            Err(err) => {
                catalog_warn!("unusable model route segment {:?}: {}", segment, err);
                self.unreachable(format!("{}{segment}", ident::MODEL_ROUTE_PREFIX));
                None
            }
        }
    }

    // Shows NotFound for a route no request can serve.
    fn unreachable(&mut self, route: String) {
        self.tracker.abandon();
        self.id = None;
        self.route = Some(route);
        self.state = ViewState::Failure(ErrorInfo::not_found());
    }

    /// Fetches the current identifier again unless a fetch is under way.
    pub(crate) fn retry(&mut self) -> Option<RequestTag> {
        if self.id.is_none() || self.state.is_loading() {
            return None;
        }
        Some(self.start())
    }

    pub(crate) fn close(&mut self) {
        self.tracker.abandon();
        self.id = None;
        self.route = None;
        self.state = ViewState::Idle;
    }

    fn start(&mut self) -> RequestTag {
        let key = self.id.clone().unwrap_or_default();
        let tag = self.tracker.begin(&key);
        self.state = ViewState::Loading;
        catalog_info!("model lookup seq={} id={:?}", tag.seq, tag.key);
        tag
    }

    /// Applies a completion. Returns `false` when it was stale and dropped.
    pub(crate) fn resolve(
        &mut self,
        tag: &RequestTag,
        result: Result<ModelLookup, TransportError>,
    ) -> bool {
        if !self.tracker.settle(tag) {
            catalog_debug!("dropping stale model lookup seq={} id={:?}", tag.seq, tag.key);
            return false;
        }
        self.state = match result {
            Ok(ModelLookup {
                model: Some(model),
                message,
            }) => {
                let advisory = message.filter(|msg| !msg.trim().is_empty());
                ViewState::Success(DetailOutcome { model, advisory })
            }
            Ok(ModelLookup { model: None, message }) => {
                catalog_info!(
                    "model {:?} not found (server message: {:?})",
                    tag.key,
                    message
                );
                ViewState::Failure(ErrorInfo::not_found())
            }
            Err(err) => {
                catalog_warn!("model lookup id={:?} failed: {}", tag.key, err);
                ViewState::Failure(ErrorInfo::transport(DETAIL_FAILED))
            }
        };
        true
    }
}
