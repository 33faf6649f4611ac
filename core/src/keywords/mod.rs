pub mod tables;

use std::collections::HashSet;
use std::sync::Arc;

use lazy_static::lazy_static;

pub use tables::{DENIED_KEYWORDS, HEALTHCARE_KEYWORDS, SEARCH_DOMAIN_KEYWORDS};

lazy_static! {
    pub static ref ALLOW_SET: Arc<KeywordSet> = Arc::new(KeywordSet::from_words(HEALTHCARE_KEYWORDS));
    pub static ref DENY_SET: Arc<KeywordSet> = Arc::new(KeywordSet::from_words(DENIED_KEYWORDS));
    pub static ref SEARCH_DOMAIN_SET: Arc<KeywordSet> = Arc::new(
        KeywordSet::from_words(HEALTHCARE_KEYWORDS.iter().chain(SEARCH_DOMAIN_KEYWORDS))
    );
}

/// Builds the built-in tables up front so the first classification pays no setup cost.
pub fn init_keyword_tables() {
    lazy_static::initialize(&ALLOW_SET);
    lazy_static::initialize(&DENY_SET);
    lazy_static::initialize(&SEARCH_DOMAIN_SET);
    tracing::debug!(
        allow = ALLOW_SET.len(),
        deny = DENY_SET.len(),
        search_domain = SEARCH_DOMAIN_SET.len(),
        "keyword tables ready"
    );
}

/// An ordered, de-duplicated set of lower-cased keywords.
///
/// Order is the first-seen order and is what matched keywords are reported in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    entries: Vec<String>,
    index: HashSet<String>,
}

impl KeywordSet {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        set.extend(words);
        set
    }

    /// Adds keywords, trimming and lower-casing each one. Blank entries are skipped.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let normalized = word.as_ref().trim().to_lowercase();
            if normalized.is_empty() || self.index.contains(&normalized) {
                continue;
            }
            self.index.insert(normalized.clone());
            self.entries.push(normalized);
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// True when the keyword spans more than one word.
pub fn is_phrase(keyword: &str) -> bool {
    keyword.split_whitespace().nth(1).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_and_dedups() {
        let set = KeywordSet::from_words(["  Drug ", "drug", "", "DNA", "   "]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["drug", "dna"]);
        assert!(set.contains("drug"));
        assert!(!set.contains("Drug"));
    }

    #[test]
    fn test_builtin_tables_keep_phrases() {
        assert!(ALLOW_SET.contains("drug discovery"));
        assert!(ALLOW_SET.contains("trial"));
        assert!(DENY_SET.contains("video game"));
        assert_eq!(ALLOW_SET.len(), HEALTHCARE_KEYWORDS.len());
    }

    #[test]
    fn test_search_domain_is_superset_of_allow() {
        for kw in ALLOW_SET.iter() {
            assert!(SEARCH_DOMAIN_SET.contains(kw), "missing {kw}");
        }
        assert!(SEARCH_DOMAIN_SET.contains("side effect"));
    }

    #[test]
    fn test_is_phrase() {
        assert!(is_phrase("mechanism of action"));
        assert!(!is_phrase("high-throughput"));
        assert!(!is_phrase("drug"));
    }
}
