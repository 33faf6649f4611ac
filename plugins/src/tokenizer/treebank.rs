//! Word tokenizer following Penn Treebank conventions.
//!
//! Text is split into sentences first, then each sentence is rewritten by an
//! ordered list of regex substitutions that pad punctuation, quotes and
//! contractions with spaces. The result is split on whitespace.
//!
//! Known gaps against NLTK's `word_tokenize`:
//! - sentences are split on terminal punctuation followed by whitespace, with
//!   no abbreviation model, so `e.g. ` or `dr. ` ends a sentence and its
//!   period is split off;
//! - the rule that splits a leading apostrophe from a following word
//!   (`'tis` aside) needs a negative lookahead and is not applied.

use std::sync::{Arc, OnceLock};

use regex::Regex;
use topicguard_core::api::{Tokenizer, TokenizerError};

/// A substitution step: `(name, pattern, replacement)`.
type RuleSpec = (&'static str, &'static str, &'static str);

/// Applied to the raw sentence.
const STARTING_QUOTES: &[RuleSpec] = &[
    ("quote_open_typographic", r"([«“‘„]|`+)", " ${1} "),
    ("quote_start", r#"^""#, "``"),
    ("quote_open_ticks", r"(``)", " ${1} "),
    ("quote_open_after_bracket", r#"([ (\[{<])("|'')"#, "${1} `` "),
];

const PUNCTUATION: &[RuleSpec] = &[
    ("colon_comma", r"([:,])([^\d])", " ${1} ${2}"),
    ("colon_comma_end", r"([:,])$", " ${1} "),
    ("ellipsis", r"\.{2,}", " ${0} "),
    ("symbols", r"[;@#$%&]", " ${0} "),
    ("final_period", r#"([^.])(\.)([\])}>"']*)\s*$"#, "${1} ${2}${3} "),
    ("question_exclaim", r"[?!]", " ${0} "),
    ("single_quote", r"([^'])' ", "${1} ' "),
    ("brackets", r"[\]\[(){}<>]", " ${0} "),
    ("asterisk", r"[*]", " ${0} "),
    ("double_dash", r"--", " -- "),
];

/// Applied after the sentence has been padded with a space on both ends.
const ENDING_QUOTES: &[RuleSpec] = &[
    ("quote_close_typographic", r"([»”’])", " ${1} "),
    ("quote_close_ticks", r"''", " '' "),
    ("quote_close", r#"""#, " '' "),
    ("quote_close_attached", r"(\S)('')", "${1} ${2} "),
    ("clitic_short", r"([^' ])('[sS]|'[mM]|'[dD]|') ", "${1} ${2} "),
    ("clitic_long", r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "${1} ${2} "),
];

const CONTRACTIONS: &[RuleSpec] = &[
    ("cannot", r"(?i)\b(can)(not)\b", " ${1} ${2} "),
    ("dye", r"(?i)\b(d)('ye)\b", " ${1} ${2} "),
    ("gimme", r"(?i)\b(gim)(me)\b", " ${1} ${2} "),
    ("gonna", r"(?i)\b(gon)(na)\b", " ${1} ${2} "),
    ("gotta", r"(?i)\b(got)(ta)\b", " ${1} ${2} "),
    ("lemme", r"(?i)\b(lem)(me)\b", " ${1} ${2} "),
    ("moren", r"(?i)\b(more)('n)\b", " ${1} ${2} "),
    ("wanna", r"(?i)\b(wan)(na)\s", " ${1} ${2} "),
    ("tis", r"(?i) ('t)(is)\b", " ${1} ${2} "),
    ("twas", r"(?i) ('t)(was)\b", " ${1} ${2} "),
];

/// Sentence boundary: terminal punctuation, optional closing marks, whitespace.
const SENTENCE_END: &str = r#"[.!?]+[\])}>"'»”’]*\s+"#;

struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

fn compile(specs: &[RuleSpec]) -> Result<Vec<Rule>, TokenizerError> {
    specs
        .iter()
        .map(|&(name, pattern, replacement)| {
            Regex::new(pattern)
                .map(|pattern| Rule {
                    pattern,
                    replacement,
                })
                .map_err(|source| TokenizerError::Pattern { name, source })
        })
        .collect()
}

fn apply(rules: &[Rule], text: String) -> String {
    rules.iter().fold(text, |acc, rule| {
        rule.pattern.replace_all(&acc, rule.replacement).into_owned()
    })
}

pub struct TreebankTokenizer {
    sentence_end: Regex,
    starting_quotes: Vec<Rule>,
    punctuation: Vec<Rule>,
    ending_quotes: Vec<Rule>,
    contractions: Vec<Rule>,
}

static SHARED: OnceLock<Arc<TreebankTokenizer>> = OnceLock::new();

impl TreebankTokenizer {
    pub fn new() -> Result<Self, TokenizerError> {
        let sentence_end = Regex::new(SENTENCE_END).map_err(|source| TokenizerError::Pattern {
            name: "sentence_end",
            source,
        })?;
        Ok(Self {
            sentence_end,
            starting_quotes: compile(STARTING_QUOTES)?,
            punctuation: compile(PUNCTUATION)?,
            ending_quotes: compile(ENDING_QUOTES)?,
            contractions: compile(CONTRACTIONS)?,
        })
    }

    /// Compiles the rule set once per process and hands out the shared instance.
    pub fn setup() -> Result<Arc<Self>, TokenizerError> {
        if let Some(shared) = SHARED.get() {
            return Ok(shared.clone());
        }
        let built = Arc::new(Self::new()?);
        tracing::debug!("treebank tokenizer compiled");
        Ok(SHARED.get_or_init(|| built).clone())
    }

    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut out = Vec::new();
        let mut start = 0;
        for m in self.sentence_end.find_iter(text) {
            out.push(&text[start..m.end()]);
            start = m.end();
        }
        if start < text.len() {
            out.push(&text[start..]);
        }
        out
    }

    fn tokenize_sentence(&self, sentence: &str, tokens: &mut Vec<String>) {
        let text = apply(&self.starting_quotes, sentence.to_string());
        let text = apply(&self.punctuation, text);
        let text = apply(&self.ending_quotes, format!(" {text} "));
        let text = apply(&self.contractions, text);
        tokens.extend(text.split_whitespace().map(str::to_string));
    }
}

impl Tokenizer for TreebankTokenizer {
    fn name(&self) -> &str {
        "treebank"
    }

    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        for sentence in self.sentences(text) {
            self.tokenize_sentence(sentence, &mut tokens);
        }
        tokens
    }
}
