use std::fmt;

use serde::Serialize;

/// Which kind of text is being validated. Only the message label differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextKind {
    Query,
    Response,
}

impl TextKind {
    pub fn label(&self) -> &'static str {
        match self {
            TextKind::Query => "Query",
            TextKind::Response => "Response",
        }
    }
}

impl fmt::Display for TextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// No allow keyword matched.
    OffTopic,
    /// An allow keyword matched, and so did a deny keyword.
    DeniedTopic,
}

impl RejectReason {
    pub fn message(&self, kind: TextKind) -> String {
        match self {
            RejectReason::OffTopic => {
                format!("{kind} must be related to healthcare or drug discovery.")
            }
            RejectReason::DeniedTopic => format!(
                "{kind} contains topics that are not allowed (e.g., politics, sports, entertainment)."
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub is_valid: bool,
    pub message: String,
    pub reason: Option<RejectReason>,
    pub matched_allow: Vec<String>,
    pub matched_deny: Vec<String>,
}

impl Verdict {
    pub(crate) fn decide(kind: TextKind, matched_allow: Vec<String>, matched_deny: Vec<String>) -> Self {
        let reason = if matched_allow.is_empty() {
            Some(RejectReason::OffTopic)
        } else if !matched_deny.is_empty() {
            Some(RejectReason::DeniedTopic)
        } else {
            None
        };

        Self {
            is_valid: reason.is_none(),
            message: reason.map(|r| r.message(kind)).unwrap_or_default(),
            reason,
            matched_allow,
            matched_deny,
        }
    }

    /// The `(is_valid, message)` pair; `message` is empty when valid.
    pub fn into_pair(self) -> (bool, String) {
        (self.is_valid, self.message)
    }
}
