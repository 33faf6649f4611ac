use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::keywords::{is_phrase, KeywordSet};
use crate::tokenizer::Tokenizer;

/// How a keyword is compared against a piece of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Exact token equality. Multi-word keywords never match.
    #[default]
    Token,
    /// Token equality for single words, contiguous token runs for phrases.
    Phrase,
    /// Keyword occurs anywhere in the lower-cased text.
    Substring,
}

impl MatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMode::Token => "token",
            MatchMode::Phrase => "phrase",
            MatchMode::Substring => "substring",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "token" => Ok(MatchMode::Token),
            "phrase" => Ok(MatchMode::Phrase),
            "substring" => Ok(MatchMode::Substring),
            other => Err(format!("unknown match mode: {other}")),
        }
    }
}

/// Lower-cased text together with its tokens, computed once per classification.
#[derive(Debug, Clone)]
pub struct PreparedText {
    pub lowered: String,
    pub tokens: Vec<String>,
}

impl PreparedText {
    pub fn new(text: &str, tokenizer: &dyn Tokenizer) -> Self {
        let lowered = text.to_lowercase();
        let tokens = tokenizer.tokenize(&lowered);
        Self { lowered, tokens }
    }
}

/// A keyword set bound to a match mode.
///
/// In phrase mode each keyword is pre-tokenized with the classifier's tokenizer
/// so both sides of the comparison split the same way.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    mode: MatchMode,
    keywords: Arc<KeywordSet>,
    sequences: Vec<Vec<String>>,
}

impl KeywordMatcher {
    pub fn new(mode: MatchMode, keywords: Arc<KeywordSet>, tokenizer: &dyn Tokenizer) -> Self {
        let sequences = match mode {
            MatchMode::Phrase => keywords
                .iter()
                .map(|kw| {
                    if is_phrase(kw) {
                        tokenizer.tokenize(kw)
                    } else {
                        vec![kw.to_string()]
                    }
                })
                .collect(),
            MatchMode::Token | MatchMode::Substring => Vec::new(),
        };
        Self {
            mode,
            keywords,
            sequences,
        }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    /// True if any keyword matches.
    pub fn any(&self, text: &PreparedText) -> bool {
        let tokens = token_index(text);
        self.candidates().any(|(i, kw)| self.hit(i, kw, text, &tokens))
    }

    /// Every matching keyword, in keyword-set order.
    pub fn find(&self, text: &PreparedText) -> Vec<String> {
        let tokens = token_index(text);
        self.candidates()
            .filter(|(i, kw)| self.hit(*i, kw, text, &tokens))
            .map(|(_, kw)| kw.to_string())
            .collect()
    }

    fn candidates(&self) -> impl Iterator<Item = (usize, &str)> {
        self.keywords.iter().enumerate()
    }

    fn hit(&self, i: usize, keyword: &str, text: &PreparedText, tokens: &HashSet<&str>) -> bool {
        match self.mode {
            MatchMode::Token => tokens.contains(keyword),
            MatchMode::Substring => text.lowered.contains(keyword),
            MatchMode::Phrase => match self.sequences.get(i).map(Vec::as_slice) {
                None | Some([]) => false,
                Some([single]) => tokens.contains(single.as_str()),
                Some(seq) => text
                    .tokens
                    .windows(seq.len())
                    .any(|window| window == seq),
            },
        }
    }
}

fn token_index(text: &PreparedText) -> HashSet<&str> {
    text.tokens.iter().map(String::as_str).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SpaceTokenizer;

    impl Tokenizer for SpaceTokenizer {
        fn name(&self) -> &str {
            "space"
        }

        fn tokenize(&self, text: &str) -> Vec<String> {
            text.split_whitespace().map(str::to_string).collect()
        }
    }

    fn matcher(mode: MatchMode, words: &[&str]) -> KeywordMatcher {
        KeywordMatcher::new(mode, Arc::new(KeywordSet::from_words(words)), &SpaceTokenizer)
    }

    #[test]
    fn test_token_mode_ignores_phrases() {
        let m = matcher(MatchMode::Token, &["clinical trial", "drug"]);
        let text = PreparedText::new("Clinical Trial design", &SpaceTokenizer);
        assert!(!m.any(&text));

        let text = PreparedText::new("a new DRUG", &SpaceTokenizer);
        assert_eq!(m.find(&text), vec!["drug"]);
    }

    #[test]
    fn test_phrase_mode_matches_contiguous_runs() {
        let m = matcher(MatchMode::Phrase, &["clinical trial", "drug"]);
        let text = PreparedText::new("clinical trial design", &SpaceTokenizer);
        assert_eq!(m.find(&text), vec!["clinical trial"]);

        let text = PreparedText::new("trial clinical", &SpaceTokenizer);
        assert!(!m.any(&text));
    }

    #[test]
    fn test_substring_mode_matches_inside_words() {
        let m = matcher(MatchMode::Substring, &["genomics", "side effect"]);
        let text = PreparedText::new("Pharmacogenomics and a side effect", &SpaceTokenizer);
        assert_eq!(m.find(&text), vec!["genomics", "side effect"]);
    }

    #[test]
    fn test_empty_text_matches_nothing() {
        for mode in [MatchMode::Token, MatchMode::Phrase, MatchMode::Substring] {
            let m = matcher(mode, &["drug", "clinical trial"]);
            let text = PreparedText::new("", &SpaceTokenizer);
            assert!(!m.any(&text), "{mode}");
        }
    }

    #[test]
    fn test_parse_match_mode() {
        assert_eq!("Phrase".parse::<MatchMode>(), Ok(MatchMode::Phrase));
        assert_eq!(" token ".parse::<MatchMode>(), Ok(MatchMode::Token));
        assert!("fuzzy".parse::<MatchMode>().is_err());
    }
}
