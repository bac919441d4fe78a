//! In-memory stores backing the handler and recorder tests.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::candidates::models::{CandidateRecord, NewCandidate};
use crate::candidates::store::{CandidateStore, StoreError};

/// Ids come from a counter that never goes back, like a `BIGSERIAL`.
#[derive(Default)]
pub struct MemoryCandidateStore {
    rows: Mutex<Vec<CandidateRecord>>,
    last_id: AtomicI64,
}

#[async_trait]
impl CandidateStore for MemoryCandidateStore {
    async fn insert(&self, candidate: &NewCandidate) -> Result<CandidateRecord, StoreError> {
        let mut rows = self.rows.lock().await;
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let record = CandidateRecord {
            id,
            name: candidate.name.clone(),
            email: candidate.email.clone(),
            role: candidate.role.clone(),
            skills: candidate.skills(),
            match_score: candidate.match_score,
            created_at: Utc::now(),
        };
        rows.push(record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<CandidateRecord>, StoreError> {
        Ok(self.rows.lock().await.clone())
    }

    async fn list_by_role(&self, role: &str) -> Result<Vec<CandidateRecord>, StoreError> {
        let rows = self.rows.lock().await;
        Ok(rows.iter().filter(|r| r.role == role).cloned().collect())
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let mut rows = self.rows.lock().await;
        let before = rows.len();
        rows.retain(|r| r.id != id);
        Ok(rows.len() < before)
    }
}

/// Every operation fails, as if the database were down.
pub struct UnavailableStore;

#[async_trait]
impl CandidateStore for UnavailableStore {
    async fn insert(&self, _candidate: &NewCandidate) -> Result<CandidateRecord, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn list(&self) -> Result<Vec<CandidateRecord>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn list_by_role(&self, _role: &str) -> Result<Vec<CandidateRecord>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn delete(&self, _id: i64) -> Result<bool, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

pub fn new_candidate(name: &str, role: &str, keywords: &[&str]) -> NewCandidate {
    NewCandidate {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        role: role.to_string(),
        matched_keywords: keywords.iter().map(|k| k.to_string()).collect(),
        match_score: keywords.len() as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_filter_by_role_exact_match() {
        let store = MemoryCandidateStore::default();
        store.insert(&new_candidate("Ada", "Engineer", &["rust"])).await.unwrap();
        store.insert(&new_candidate("Bob", "engineer", &["go"])).await.unwrap();
        store.insert(&new_candidate("Cy", "Analyst", &[])).await.unwrap();

        let engineers = store.filter_by_role("Engineer").await.unwrap();
        assert_eq!(engineers.len(), 1);
        assert_eq!(engineers[0].name, "Ada");
    }

    #[tokio::test]
    async fn test_empty_role_lists_all() {
        let store = MemoryCandidateStore::default();
        store.insert(&new_candidate("Ada", "Engineer", &[])).await.unwrap();
        store.insert(&new_candidate("Cy", "Analyst", &[])).await.unwrap();

        assert_eq!(store.filter_by_role("").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_reports_absent_ids() {
        let store = MemoryCandidateStore::default();
        let record = store.insert(&new_candidate("Ada", "Engineer", &[])).await.unwrap();

        assert!(store.delete(record.id).await.unwrap());
        assert!(!store.delete(record.id).await.unwrap());
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let store = MemoryCandidateStore::default();
        let first = store.insert(&new_candidate("Ada", "Engineer", &[])).await.unwrap();
        assert!(store.delete(first.id).await.unwrap());

        let second = store.insert(&new_candidate("Bob", "Engineer", &[])).await.unwrap();
        assert!(second.id > first.id);
        assert!(!store.delete(first.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_insert_stores_comma_joined_skills() {
        let store = MemoryCandidateStore::default();
        let record = store
            .insert(&new_candidate("Ada", "Engineer", &["python", "sql"]))
            .await
            .unwrap();
        assert_eq!(record.skills, "python, sql");
        assert_eq!(record.match_score, 2);
    }
}
