//! Candidate record store: pluggable, trait-based persistence for match results.
//!
//! Production: `PgCandidateStore`. `AppState` holds an `Arc<dyn CandidateStore>`,
//! so handlers never touch SQL directly.

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;

use crate::candidates::models::{CandidateRecord, NewCandidate};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                StoreError::Unavailable(err.to_string())
            }
            other => StoreError::Database(other),
        }
    }
}

#[async_trait]
pub trait CandidateStore: Send + Sync {
    /// Inserts a candidate; the store assigns `id` and `created_at`.
    async fn insert(&self, candidate: &NewCandidate) -> Result<CandidateRecord, StoreError>;

    /// All candidates, ordered by id.
    async fn list(&self) -> Result<Vec<CandidateRecord>, StoreError>;

    /// Candidates whose role equals `role` exactly.
    async fn list_by_role(&self, role: &str) -> Result<Vec<CandidateRecord>, StoreError>;

    /// Returns `true` if a row was removed, `false` if `id` was absent.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;

    /// Exact-match role filter. An empty role means no filter.
    async fn filter_by_role(&self, role: &str) -> Result<Vec<CandidateRecord>, StoreError> {
        if role.is_empty() {
            self.list().await
        } else {
            self.list_by_role(role).await
        }
    }
}

pub struct PgCandidateStore {
    pool: PgPool,
}

impl PgCandidateStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CandidateStore for PgCandidateStore {
    async fn insert(&self, candidate: &NewCandidate) -> Result<CandidateRecord, StoreError> {
        let record = sqlx::query_as::<_, CandidateRecord>(
            r#"
            INSERT INTO candidates (name, email, role, skills, match_score)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, role, skills, match_score, created_at
            "#,
        )
        .bind(&candidate.name)
        .bind(&candidate.email)
        .bind(&candidate.role)
        .bind(candidate.skills())
        .bind(candidate.match_score)
        .fetch_one(&self.pool)
        .await?;
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<CandidateRecord>, StoreError> {
        let records = sqlx::query_as::<_, CandidateRecord>("SELECT * FROM candidates ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(records)
    }

    async fn list_by_role(&self, role: &str) -> Result<Vec<CandidateRecord>, StoreError> {
        let records = sqlx::query_as::<_, CandidateRecord>(
            "SELECT * FROM candidates WHERE role = $1 ORDER BY id",
        )
        .bind(role)
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM candidates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
