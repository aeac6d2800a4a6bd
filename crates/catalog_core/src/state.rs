use crate::detail::DetailMachine;
use crate::landing::LandingData;
use crate::search::SearchMachine;
use crate::view_model::{self, AppViewModel};

/// Whole client state. Owned by the application loop, mutated only by `update`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub(crate) search: SearchMachine,
    pub(crate) landing: LandingData,
    pub(crate) detail: DetailMachine,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &SearchMachine {
        &self.search
    }

    pub fn landing(&self) -> &LandingData {
        &self.landing
    }

    pub fn detail(&self) -> &DetailMachine {
        &self.detail
    }

    pub fn view(&self) -> AppViewModel {
        view_model::build(self)
    }

    /// True while any request issued by this state has not completed.
    pub fn has_pending_requests(&self) -> bool {
        self.search.is_pending() || self.landing.is_pending() || self.detail.is_pending()
    }

    /// Returns whether anything visible changed since the last call.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
