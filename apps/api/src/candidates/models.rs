use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::matching::scoring::MatchResult;

/// A stored candidate. `skills` holds the matched keywords joined by ", ".
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CandidateRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub skills: String,
    pub match_score: i32,
    pub created_at: DateTime<Utc>,
}

/// Payload handed to both recording sinks, unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCandidate {
    pub name: String,
    pub email: String,
    pub role: String,
    pub matched_keywords: Vec<String>,
    pub match_score: i32,
}

impl NewCandidate {
    pub fn from_match(name: String, email: String, role: String, result: &MatchResult) -> Self {
        Self {
            name,
            email,
            role,
            matched_keywords: result.matched_keywords().to_vec(),
            match_score: i32::try_from(result.match_score()).unwrap_or(i32::MAX),
        }
    }

    pub fn skills(&self) -> String {
        self.matched_keywords.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::keywords::KeywordSet;
    use crate::matching::scoring::score;

    fn candidate() -> NewCandidate {
        let resume: KeywordSet = ["sql", "python", "flask"].into_iter().collect();
        let jd: KeywordSet = ["python", "sql", "expert"].into_iter().collect();
        NewCandidate::from_match(
            "Ada".to_string(),
            "ada@example.com".to_string(),
            "Engineer".to_string(),
            &score(&resume, &jd),
        )
    }

    #[test]
    fn test_from_match_keeps_score_and_keywords() {
        let c = candidate();
        assert_eq!(c.matched_keywords, vec!["python", "sql"]);
        assert_eq!(c.match_score, 2);
        assert_eq!(c.match_score as usize, c.matched_keywords.len());
    }

    #[test]
    fn test_skills_are_comma_joined() {
        assert_eq!(candidate().skills(), "python, sql");
    }

    #[test]
    fn test_payload_shape() {
        let value = serde_json::to_value(candidate()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "role": "Engineer",
                "matched_keywords": ["python", "sql"],
                "match_score": 2
            })
        );
    }
}
