pub mod factory;
pub mod tokenizer;

pub use factory::{build_classifier, build_tokenizer};
