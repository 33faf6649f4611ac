//! Topic classifier: allow-then-deny keyword validation of queries and responses.

mod verdict;

use std::fmt;
use std::sync::Arc;

pub use verdict::{RejectReason, TextKind, Verdict};

use crate::keywords::{KeywordSet, ALLOW_SET, DENY_SET, SEARCH_DOMAIN_SET};
use crate::matcher::{KeywordMatcher, MatchMode, PreparedText};
use crate::tokenizer::Tokenizer;

/// Stateless classifier. Cloning is cheap; all tables sit behind `Arc`.
#[derive(Clone)]
pub struct TopicClassifier {
    tokenizer: Arc<dyn Tokenizer>,
    allow: KeywordMatcher,
    deny: KeywordMatcher,
    search_domain: KeywordMatcher,
}

impl fmt::Debug for TopicClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TopicClassifier")
            .field("tokenizer", &self.tokenizer.name())
            .field("match_mode", &self.allow.mode())
            .field("allow", &self.allow.keywords().len())
            .field("deny", &self.deny.keywords().len())
            .finish()
    }
}

impl TopicClassifier {
    /// Classifier over the built-in allow and deny tables.
    pub fn new(tokenizer: Arc<dyn Tokenizer>, mode: MatchMode) -> Self {
        Self::with_keywords(tokenizer, mode, ALLOW_SET.clone(), DENY_SET.clone())
    }

    pub fn with_keywords(
        tokenizer: Arc<dyn Tokenizer>,
        mode: MatchMode,
        allow: Arc<KeywordSet>,
        deny: Arc<KeywordSet>,
    ) -> Self {
        let allow = KeywordMatcher::new(mode, allow, tokenizer.as_ref());
        let deny = KeywordMatcher::new(mode, deny, tokenizer.as_ref());
        let search_domain = KeywordMatcher::new(
            MatchMode::Substring,
            SEARCH_DOMAIN_SET.clone(),
            tokenizer.as_ref(),
        );
        Self {
            tokenizer,
            allow,
            deny,
            search_domain,
        }
    }

    pub fn match_mode(&self) -> MatchMode {
        self.allow.mode()
    }

    pub fn tokenizer_name(&self) -> &str {
        self.tokenizer.name()
    }

    pub fn is_in_allow_set(&self, text: &str) -> bool {
        self.allow.any(&self.prepare(text))
    }

    pub fn is_in_deny_set(&self, text: &str) -> bool {
        self.deny.any(&self.prepare(text))
    }

    /// Allow check first, deny check second. The deny check wins when both match.
    pub fn validate(&self, kind: TextKind, text: &str) -> Verdict {
        let prepared = self.prepare(text);
        let matched_allow = self.allow.find(&prepared);
        let matched_deny = self.deny.find(&prepared);
        let verdict = Verdict::decide(kind, matched_allow, matched_deny);

        tracing::debug!(
            kind = kind.label(),
            tokens = prepared.tokens.len(),
            is_valid = verdict.is_valid,
            matched_allow = ?verdict.matched_allow,
            matched_deny = ?verdict.matched_deny,
            "topic validation"
        );
        verdict
    }

    pub fn validate_query(&self, query: &str) -> Verdict {
        self.validate(TextKind::Query, query)
    }

    pub fn validate_response(&self, response: &str) -> Verdict {
        self.validate(TextKind::Response, response)
    }

    /// Looser check used to scope search requests: substring match against the
    /// wider search-domain vocabulary.
    pub fn is_search_domain(&self, text: &str) -> bool {
        self.search_domain.any(&self.prepare(text))
    }

    fn prepare(&self, text: &str) -> PreparedText {
        PreparedText::new(text, self.tokenizer.as_ref())
    }
}
