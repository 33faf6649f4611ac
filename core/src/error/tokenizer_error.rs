// core/src/error/tokenizer_error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenizerError {
    #[error("tokenizer pattern `{name}` failed to compile")]
    Pattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },
}
