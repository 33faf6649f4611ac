use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::keywords::{KeywordSet, ALLOW_SET, DENY_SET};
use crate::matcher::MatchMode;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub match_mode: MatchMode,

    #[serde(default)]
    pub tokenizer: TokenizerKind,

    #[serde(default)]
    pub keywords: KeywordsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.keywords.replace && self.keywords.extra_allow.iter().all(|k| k.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "keywords.replace = true needs a non-empty keywords.extra_allow".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerKind {
    /// Penn Treebank conventions: punctuation and contractions split off.
    #[default]
    Treebank,
    /// Alphanumeric runs only.
    Word,
}

impl fmt::Display for TokenizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenizerKind::Treebank => f.write_str("treebank"),
            TokenizerKind::Word => f.write_str("word"),
        }
    }
}

impl FromStr for TokenizerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "treebank" => Ok(TokenizerKind::Treebank),
            "word" => Ok(TokenizerKind::Word),
            other => Err(format!("unknown tokenizer: {other}")),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordsConfig {
    #[serde(default)]
    pub extra_allow: Vec<String>,

    #[serde(default)]
    pub extra_deny: Vec<String>,

    /// Use the extra lists instead of the built-in tables.
    #[serde(default)]
    pub replace: bool,
}

impl KeywordsConfig {
    pub fn allow_set(&self) -> Arc<KeywordSet> {
        merge(&ALLOW_SET, &self.extra_allow, self.replace)
    }

    pub fn deny_set(&self) -> Arc<KeywordSet> {
        merge(&DENY_SET, &self.extra_deny, self.replace)
    }
}

fn merge(builtin: &Arc<KeywordSet>, extra: &[String], replace: bool) -> Arc<KeywordSet> {
    if replace {
        return Arc::new(KeywordSet::from_words(extra));
    }
    if extra.is_empty() {
        return builtin.clone();
    }
    let mut set = KeywordSet::clone(builtin);
    set.extend(extra);
    Arc::new(set)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Fallback filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
