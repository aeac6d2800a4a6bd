//! Model catalog engine: backend access and effect execution.
mod client;
mod engine;
mod settings;
mod types;
mod wire;

pub use client::{CatalogApi, ReqwestCatalogClient, DEFAULT_TRENDING_LIMIT};
pub use engine::{execute_effect, EngineHandle};
pub use settings::{ApiSettings, ConfigError, API_URL_ENV, DEFAULT_API_URL, TIMEOUT_ENV};
pub use types::EngineEvent;
