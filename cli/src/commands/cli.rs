use clap::Parser;
use topicguard_core::api::{MatchMode, TokenizerKind};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchModeArg {
    Token,
    Phrase,
    Substring,
}

impl From<MatchModeArg> for MatchMode {
    fn from(arg: MatchModeArg) -> Self {
        match arg {
            MatchModeArg::Token => MatchMode::Token,
            MatchModeArg::Phrase => MatchMode::Phrase,
            MatchModeArg::Substring => MatchMode::Substring,
        }
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizerArg {
    Treebank,
    Word,
}

impl From<TokenizerArg> for TokenizerKind {
    fn from(arg: TokenizerArg) -> Self {
        match arg {
            TokenizerArg::Treebank => TokenizerKind::Treebank,
            TokenizerArg::Word => TokenizerKind::Word,
        }
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `<is_valid>::<message>`
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Keyword topic guard for healthcare and drug-discovery text")]
pub struct Args {
    /// validate_query | validate_response | check_domain
    pub action: String,

    /// Text to classify. Omit or pass `-` to read stdin.
    pub text: Option<String>,

    /// Config file (defaults: ./topicguard.toml, ~/.topicguard/config.toml).
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, value_enum)]
    pub match_mode: Option<MatchModeArg>,

    #[arg(long, value_enum)]
    pub tokenizer: Option<TokenizerArg>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}
