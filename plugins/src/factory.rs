use std::sync::Arc;

use topicguard_core::api::{AppConfig, GuardError, TokenizerError, TokenizerKind, TopicClassifier};
use topicguard_core::keywords::init_keyword_tables;
use topicguard_core::tokenizer::Tokenizer;

use crate::tokenizer::{TreebankTokenizer, WordTokenizer};

pub fn build_tokenizer(cfg: &AppConfig) -> Result<Arc<dyn Tokenizer>, TokenizerError> {
    match cfg.tokenizer {
        TokenizerKind::Treebank => Ok(TreebankTokenizer::setup()?),
        TokenizerKind::Word => Ok(Arc::new(WordTokenizer)),
    }
}

/// Initializes the keyword tables and the tokenizer, then assembles a classifier.
///
/// Call once at startup; the returned classifier is cheap to clone.
pub fn build_classifier(cfg: &AppConfig) -> Result<TopicClassifier, GuardError> {
    init_keyword_tables();
    let tokenizer = build_tokenizer(cfg)?;
    let classifier = TopicClassifier::with_keywords(
        tokenizer,
        cfg.match_mode,
        cfg.keywords.allow_set(),
        cfg.keywords.deny_set(),
    );
    tracing::debug!(
        tokenizer = classifier.tokenizer_name(),
        match_mode = %classifier.match_mode(),
        "classifier ready"
    );
    Ok(classifier)
}
