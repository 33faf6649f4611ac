use serde_json::json;
use topicguard_core::api::{TextKind, TopicClassifier, Verdict};

use super::cli::OutputFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Validate(TextKind),
    CheckDomain,
}

impl Action {
    pub fn parse(action: &str) -> Option<Self> {
        match action {
            "validate_query" => Some(Action::Validate(TextKind::Query)),
            "validate_response" => Some(Action::Validate(TextKind::Response)),
            "check_domain" => Some(Action::CheckDomain),
            _ => None,
        }
    }
}

/// Resolves `action` and runs it. An unknown action yields `None`: nothing is
/// printed and `read_text` is never called.
pub fn dispatch<F>(
    classifier: &TopicClassifier,
    action: &str,
    format: OutputFormat,
    read_text: F,
) -> anyhow::Result<Option<String>>
where
    F: FnOnce() -> anyhow::Result<String>,
{
    let Some(parsed) = Action::parse(action) else {
        tracing::warn!(action, "unknown action, nothing to do");
        return Ok(None);
    };
    let text = read_text()?;
    run_action(classifier, parsed, &text, format).map(Some)
}

/// Runs one action and returns the line to print.
pub fn run_action(
    classifier: &TopicClassifier,
    action: Action,
    text: &str,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match action {
        Action::Validate(kind) => render_verdict(&classifier.validate(kind, text), format),
        Action::CheckDomain => {
            let in_domain = classifier.is_search_domain(text);
            match format {
                OutputFormat::Text => Ok(bool_literal(in_domain).to_string()),
                OutputFormat::Json => Ok(json!({ "is_search_domain": in_domain }).to_string()),
            }
        }
    }
}

pub fn render_verdict(verdict: &Verdict, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "{}::{}",
            bool_literal(verdict.is_valid),
            verdict.message
        )),
        OutputFormat::Json => Ok(serde_json::to_string(verdict)?),
    }
}

/// Consumers of this output parse `True` / `False`.
fn bool_literal(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}
