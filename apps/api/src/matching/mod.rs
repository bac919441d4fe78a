// Resume ↔ job description matching.
// extract → normalize (resume and JD) → score. Synchronous and stateless apart
// from the read-only stopword set.

pub mod extract;
pub mod keywords;
pub mod scoring;
pub mod stopwords;

#[cfg(test)]
pub(crate) mod fixtures;

use tracing::debug;

use crate::matching::extract::{extract, ExtractError, UploadedDocument};
use crate::matching::keywords::normalize;
use crate::matching::scoring::{score, MatchResult};
use crate::matching::stopwords::Stopwords;

/// Scores an uploaded resume against a job description.
pub fn run_pipeline(
    document: &UploadedDocument,
    job_description: &str,
    stopwords: &Stopwords,
) -> Result<MatchResult, ExtractError> {
    let resume_text = extract(document)?;
    let resume_keywords = normalize(&resume_text, stopwords);
    let jd_keywords = normalize(job_description, stopwords);
    if resume_keywords.is_empty() {
        debug!("No keywords found in resume text");
    }

    let result = score(&resume_keywords, &jd_keywords);
    debug!(
        format = %document.format,
        resume_keywords = resume_keywords.len(),
        jd_keywords = jd_keywords.len(),
        match_score = result.match_score(),
        "Resume scored"
    );
    Ok(result)
}
