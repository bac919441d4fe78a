use std::io;
use std::sync::Arc;

use tracing::warn;

use crate::candidates::models::{CandidateRecord, NewCandidate};
use crate::candidates::results_log::ResultsLog;
use crate::candidates::store::{CandidateStore, StoreError};

/// Outcome of each sink, reported separately. Neither write is rolled back
/// when the other fails.
#[derive(Debug)]
pub struct RecordOutcome {
    pub store: Result<CandidateRecord, StoreError>,
    pub results_log: io::Result<()>,
}

/// Writes every match result to the candidate store and the results log.
#[derive(Clone)]
pub struct Recorder {
    store: Arc<dyn CandidateStore>,
    results_log: ResultsLog,
}

impl Recorder {
    pub fn new(store: Arc<dyn CandidateStore>, results_log: ResultsLog) -> Self {
        Self { store, results_log }
    }

    /// Both sinks are always attempted.
    pub async fn record(&self, candidate: &NewCandidate) -> RecordOutcome {
        let (store, results_log) = tokio::join!(
            self.store.insert(candidate),
            self.results_log.append(candidate)
        );

        if let Err(e) = &store {
            warn!(email = %candidate.email, "Candidate store write failed: {e}");
        }
        if let Err(e) = &results_log {
            warn!(
                path = %self.results_log.path().display(),
                "Results log append failed: {e}"
            );
        }

        RecordOutcome { store, results_log }
    }
}
