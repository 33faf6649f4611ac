use encoding_rs::{Encoding, UTF_8};
use std::io::Read;

pub const ENV_STDIN_ENCODING: &str = "TOPICGUARD_STDIN_ENCODING";

/// Reads the text to classify from stdin.
///
/// `TOPICGUARD_STDIN_ENCODING` names the input encoding; otherwise a BOM decides,
/// falling back to UTF-8. One trailing line break is dropped so that
/// `echo text | topicguard ...` classifies the same text as the positional form.
pub fn read_stdin_text() -> Result<String, std::io::Error> {
    let mut buf = Vec::new();
    std::io::stdin().read_to_end(&mut buf)?;
    let label = std::env::var(ENV_STDIN_ENCODING).ok();
    Ok(decode_input(&buf, label.as_deref()))
}

pub fn decode_input(bytes: &[u8], encoding_label: Option<&str>) -> String {
    let encoding = resolve_encoding(encoding_label);
    // `decode` sniffs a BOM first and strips it; invalid sequences become U+FFFD.
    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        tracing::warn!(encoding = used.name(), "stdin had malformed sequences, replaced");
    }
    strip_line_break(text.into_owned())
}

fn resolve_encoding(label: Option<&str>) -> &'static Encoding {
    let Some(label) = label.map(str::trim).filter(|l| !l.is_empty()) else {
        return UTF_8;
    };
    match Encoding::for_label(label.as_bytes()) {
        Some(encoding) => encoding,
        None => {
            tracing::warn!(
                label,
                "{} is not a known encoding, using UTF-8",
                ENV_STDIN_ENCODING
            );
            UTF_8
        }
    }
}

fn strip_line_break(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
