//! Trending list and catalog statistics shown on the landing view.
//!
//! Both are best-effort: each slot is filled independently and failures are
//! only logged.

use catalog_logging::{catalog_debug, catalog_warn};

use crate::{StatsSnapshot, TransportError, TrendingResult};

/// Trending entries requested when the landing view mounts.
pub const LANDING_TRENDING_LIMIT: u32 = 10;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LandingData {
    trending: Option<TrendingResult>,
    stats: Option<StatsSnapshot>,
    trending_pending: bool,
    stats_pending: bool,
}

impl LandingData {
    pub fn trending(&self) -> Option<&TrendingResult> {
        self.trending.as_ref()
    }

    pub fn stats(&self) -> Option<&StatsSnapshot> {
        self.stats.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.trending_pending || self.stats_pending
    }

    pub(crate) fn mount(&mut self) {
        self.trending_pending = true;
        self.stats_pending = true;
    }

    pub(crate) fn apply_trending(&mut self, result: Result<TrendingResult, TransportError>) {
        self.trending_pending = false;
        match result {
            Ok(trending) => {
                catalog_debug!("trending loaded: {} models", trending.models.len());
                self.trending = Some(trending);
            }
            Err(err) => catalog_warn!("Error loading trending models: {}", err),
        }
    }

    pub(crate) fn apply_stats(&mut self, result: Result<StatsSnapshot, TransportError>) {
        self.stats_pending = false;
        match result {
            Ok(stats) => self.stats = Some(stats),
            Err(err) => catalog_warn!("Error loading catalog stats: {}", err),
        }
    }
}
