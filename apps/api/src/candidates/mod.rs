// Candidate intake: upload handling, staging, recording and the record store.
// Matching itself lives in `crate::matching`; nothing here inspects documents.

pub mod handlers;
pub mod models;
pub mod recorder;
pub mod results_log;
pub mod staging;
pub mod store;

#[cfg(test)]
pub(crate) mod memory;
