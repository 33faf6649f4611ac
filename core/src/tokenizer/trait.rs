// core/src/tokenizer/trait.rs

/// Splits text into word-level tokens.
///
/// Implementations receive text that has already been lower-cased by the
/// classifier and must never emit empty tokens.
pub trait Tokenizer: Send + Sync {
    fn name(&self) -> &str;

    fn tokenize(&self, text: &str) -> Vec<String>;
}
