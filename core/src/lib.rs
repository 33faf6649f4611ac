pub mod api;
pub mod classifier;
pub mod config;
pub mod error;
pub mod keywords;
pub mod matcher;
pub mod tokenizer;
