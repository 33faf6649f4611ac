pub mod treebank;
pub mod word;

pub use treebank::TreebankTokenizer;
pub use word::WordTokenizer;
