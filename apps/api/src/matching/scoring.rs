use serde::Serialize;

use crate::matching::keywords::KeywordSet;

/// Overlap between a resume and a job description.
///
/// Only `score` builds one, so `match_score` always equals the number of
/// matched keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    matched_keywords: KeywordSet,
    match_score: usize,
}

impl MatchResult {
    pub fn matched_keywords(&self) -> &KeywordSet {
        &self.matched_keywords
    }

    pub fn match_score(&self) -> usize {
        self.match_score
    }
}

/// Raw intersection count. No weighting and no normalisation by set size:
/// callers wanting a ratio must compute it themselves.
pub fn score(a: &KeywordSet, b: &KeywordSet) -> MatchResult {
    let matched_keywords = a.intersection(b);
    let match_score = matched_keywords.len();
    MatchResult {
        matched_keywords,
        match_score,
    }
}
