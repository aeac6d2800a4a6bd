use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{bail, Context};
use catalog_core::{ident, update, AppState, DetailView, Msg};
use catalog_engine::{ApiSettings, CatalogApi, ReqwestCatalogClient};
use catalog_logging::{catalog_debug, catalog_info, catalog_warn};
use clap::Parser;

use super::cli::Cli;
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::render;

const POLL_INTERVAL: Duration = Duration::from_millis(75);
// Slack on top of the request timeout before the loop gives up waiting.
const SETTLE_GRACE: Duration = Duration::from_secs(5);

pub fn run_app() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::initialize(match &cli.log_file {
        Some(path) => LogDestination::Both(path.clone()),
        None => LogDestination::Terminal,
    });

    let settings = ApiSettings::from_env().context("reading api settings")?;
    let client = ReqwestCatalogClient::new(&settings).context("building api client")?;
    catalog_info!("catalog api root {}", client.api_root());
    let api: Arc<dyn CatalogApi> = Arc::new(client);
    let runner = EffectRunner::new(api).context("starting engine")?;

    let settle_timeout = settings.request_timeout + SETTLE_GRACE;
    let mut state = drive(AppState::new(), initial_msgs(&cli)?, &runner, settle_timeout);

    if cli.follow_base {
        if let Some(base) = state.detail().base_model().map(str::to_owned) {
            catalog_info!("following derived-from link to {}", base);
            state = drive(state, vec![Msg::BaseModelClicked], &runner, settle_timeout);
        } else if matches!(state.view().detail, DetailView::Ready(_)) {
            catalog_warn!("model has no base model to follow");
        }
    }

    print!("{}", render::render(&state.view()));
    Ok(())
}

fn initial_msgs(cli: &Cli) -> anyhow::Result<Vec<Msg>> {
    if let Some(id) = &cli.model {
        return Ok(vec![Msg::ModelSelected { id: id.clone() }]);
    }
    if let Some(route) = &cli.route {
        let Some(segment) = ident::route_segment(route) else {
            bail!("not a model route: {route:?} (expected /model/<id>)");
        };
        return Ok(vec![Msg::RouteOpened {
            segment: segment.to_string(),
        }]);
    }

    let mut msgs = vec![Msg::Mounted];
    if cli.pipeline.is_some() {
        msgs.push(Msg::PipelineFilterChanged(cli.pipeline.clone()));
    }
    if let Some(query) = cli.query_text() {
        msgs.push(Msg::QueryChanged(query));
        msgs.push(Msg::SearchSubmitted);
    }
    Ok(msgs)
}

/// Feeds messages through `update` until no request is outstanding.
fn drive(
    mut state: AppState,
    msgs: Vec<Msg>,
    runner: &EffectRunner,
    settle_timeout: Duration,
) -> AppState {
    let mut inbox: VecDeque<Msg> = msgs.into();
    let mut deadline = Instant::now() + settle_timeout;

    loop {
        while let Some(msg) = inbox.pop_front() {
            let (next, effects) = update(state, msg);
            state = next;
            if !effects.is_empty() {
                deadline = Instant::now() + settle_timeout;
            }
            runner.enqueue(effects);
            if state.consume_dirty() {
                catalog_debug!("view changed: route={}", state.view().route);
            }
        }

        if !state.has_pending_requests() {
            return state;
        }
        match runner.next_msg(POLL_INTERVAL) {
            Some(msg) => inbox.push_back(msg),
            None if Instant::now() >= deadline => {
                catalog_warn!("gave up waiting for outstanding requests");
                return state;
            }
            None => {}
        }
    }
}
