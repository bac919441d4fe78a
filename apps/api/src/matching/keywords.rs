use std::collections::BTreeSet;

use serde::Serialize;

use crate::matching::stopwords::Stopwords;

/// Deduplicated lowercase alphabetic tokens with stopwords removed.
///
/// Backed by a `BTreeSet` so iteration (and therefore every response and
/// stored `skills` string) comes out in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeywordSet(BTreeSet<String>);

impl KeywordSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn contains(&self, keyword: &str) -> bool {
        self.0.contains(keyword)
    }

    pub fn intersection(&self, other: &KeywordSet) -> KeywordSet {
        KeywordSet(self.0.intersection(&other.0).cloned().collect())
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

impl<'a> FromIterator<&'a str> for KeywordSet {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        KeywordSet(iter.into_iter().map(String::from).collect())
    }
}

/// Lowercases `text`, splits it into maximal runs of ASCII letters and drops
/// stopwords. Every other character is a separator, so "C++" yields "c" and
/// "Python3" yields "python".
pub fn normalize(text: &str, stopwords: &Stopwords) -> KeywordSet {
    text.to_lowercase()
        .split(|c: char| !c.is_ascii_lowercase())
        .filter(|token| !token.is_empty())
        .filter(|token| !stopwords.contains(token))
        .collect()
}
