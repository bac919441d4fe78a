//! Process-wide stopword set. Loaded once at startup and shared read-only.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

/// NLTK's English stopword list.
const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Lowercased stopwords. Immutable after construction, so it can be shared
/// across requests behind an `Arc` without locking.
#[derive(Debug, Clone, Default)]
pub struct Stopwords(HashSet<String>);

impl Stopwords {
    pub fn english() -> Self {
        ENGLISH.iter().copied().collect()
    }

    /// Parses a newline-separated list. Blank lines and `#` comments are skipped.
    pub fn parse(list: &str) -> Self {
        list.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect()
    }

    /// Startup loader: reads `path` when given, otherwise the built-in English list.
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let stopwords = match path {
            Some(path) => {
                let list = tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("Failed to read stopwords: {}", path.display()))?;
                Self::parse(&list)
            }
            None => Self::english(),
        };
        if stopwords.is_empty() {
            warn!("Stopword list is empty; every token will be kept");
        }
        info!("Loaded {} stopwords", stopwords.len());
        Ok(stopwords)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for Stopwords {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        Stopwords(iter.into_iter().map(str::to_lowercase).collect())
    }
}
