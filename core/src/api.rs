//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `topicguard_core::api` instead of reaching into internal modules.

pub use crate::classifier::{RejectReason, TextKind, TopicClassifier, Verdict};
pub use crate::config::{AppConfig, KeywordsConfig, LoggingConfig, TokenizerKind};
pub use crate::error::{ConfigError, GuardError, TokenizerError};
pub use crate::keywords::KeywordSet;
pub use crate::matcher::MatchMode;
pub use crate::tokenizer::Tokenizer;
