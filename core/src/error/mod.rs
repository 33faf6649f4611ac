pub mod config_error;
pub mod tokenizer_error;

pub use config_error::ConfigError;
pub use tokenizer_error::TokenizerError;

use thiserror::Error;

/// Failures raised while assembling a classifier. Topic rejection is never an error.
#[derive(Debug, Error)]
pub enum GuardError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("tokenizer error: {0}")]
    Tokenizer(#[from] TokenizerError),
}
