use std::path::PathBuf;

use clap::Parser;

/// Browse the model catalog from the terminal.
///
/// The backend root is taken from `MODEL_CATALOG_API_URL`.
#[derive(Debug, Clone, Parser)]
#[command(name = "model-catalog", version)]
pub struct Cli {
    /// Free-text search, e.g. `llama text-generation`.
    #[arg(value_name = "QUERY", num_args = 0..)]
    pub query: Vec<String>,

    /// Restrict search results to one pipeline tag.
    #[arg(long, value_name = "TAG")]
    pub pipeline: Option<String>,

    /// Show the detail page of a model, e.g. `org/name`.
    #[arg(long, value_name = "ID", conflicts_with_all = ["query", "route"])]
    pub model: Option<String>,

    /// Open a detail route as produced by the UI, e.g. `/model/org%2Fname`.
    #[arg(long, value_name = "PATH", conflicts_with = "query")]
    pub route: Option<String>,

    /// After the detail page loads, follow its "derived from" link.
    #[arg(long)]
    pub follow_base: bool,

    /// Also write logs to this file.
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn query_text(&self) -> Option<String> {
        let text = self.query.join(" ");
        (!text.trim().is_empty()).then_some(text)
    }
}
