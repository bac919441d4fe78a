use std::sync::Arc;

use crate::candidates::recorder::Recorder;
use crate::candidates::results_log::ResultsLog;
use crate::candidates::store::CandidateStore;
use crate::config::Config;
use crate::matching::stopwords::Stopwords;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable record store. Default: PgCandidateStore.
    pub store: Arc<dyn CandidateStore>,
    /// Writes each match result to the store and the JSON-lines results log.
    pub recorder: Recorder,
    /// Loaded once at startup; read-only afterwards.
    pub stopwords: Arc<Stopwords>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn CandidateStore>, stopwords: Stopwords) -> Self {
        let recorder = Recorder::new(
            Arc::clone(&store),
            ResultsLog::new(config.results_log_path.clone()),
        );
        Self {
            store,
            recorder,
            stopwords: Arc::new(stopwords),
            config,
        }
    }
}
