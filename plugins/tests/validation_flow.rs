//! End-to-end validation through the default tokenizer and the built-in tables.

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use topicguard_core::api::{AppConfig, MatchMode, RejectReason, TopicClassifier};
use topicguard_core::config::load_from;
use topicguard_plugins::build_classifier;

const QUERY_OFF_TOPIC: &str = "Query must be related to healthcare or drug discovery.";
const QUERY_DENIED: &str =
    "Query contains topics that are not allowed (e.g., politics, sports, entertainment).";

fn classifier(mode: MatchMode) -> TopicClassifier {
    let cfg = AppConfig {
        match_mode: mode,
        ..AppConfig::default()
    };
    build_classifier(&cfg).expect("build classifier")
}

#[test]
fn test_mechanism_of_action_query_is_valid() {
    let c = classifier(MatchMode::Token);
    let verdict =
        c.validate_query("What is the mechanism of action of this drug for cancer treatment?");
    assert_eq!(verdict.matched_allow, vec!["drug", "treatment"]);
    assert_eq!(verdict.into_pair(), (true, String::new()));
}

#[test]
fn test_football_query_is_denied() {
    let c = classifier(MatchMode::Token);
    let verdict =
        c.validate_query("Who won the football match and also discuss clinical trial design?");
    assert_eq!(verdict.matched_allow, vec!["clinical", "trial"]);
    assert_eq!(verdict.matched_deny, vec!["football"]);
    assert_eq!(verdict.into_pair(), (false, QUERY_DENIED.to_string()));
}

#[test]
fn test_empty_query() {
    let c = classifier(MatchMode::Token);
    assert_eq!(c.validate_query("").into_pair(), (false, QUERY_OFF_TOPIC.to_string()));
}

#[test]
fn test_uppercase_matches_like_lowercase() {
    let c = classifier(MatchMode::Token);
    assert_eq!(c.validate_query("DRUG"), c.validate_query("drug"));
    assert!(c.validate_query("DRUG").is_valid);
}

#[test]
fn test_punctuation_and_possessives_do_not_hide_keywords() {
    let c = classifier(MatchMode::Token);
    assert!(c.is_in_allow_set("Is this safe for the patient's liver?"));
    assert!(c.is_in_allow_set("(DNA)"));
    assert!(c.is_in_deny_set("Any news on the election?"));
}

#[test]
fn test_hyphenated_keyword_is_a_single_token() {
    let c = classifier(MatchMode::Token);
    assert!(!c.is_in_allow_set("high-throughput screening"));
    assert!(c.is_in_allow_set("structure-activity data for the ligand"));
}

#[test]
fn test_phrase_keywords_unreachable_in_token_mode() {
    let c = classifier(MatchMode::Token);
    let verdict = c.validate_query("Notes on in silico molecular docking");
    assert_eq!(verdict.reason, Some(RejectReason::OffTopic));

    let verdict = c.validate_query("A tv show about the hospital");
    assert!(verdict.is_valid);
}

#[test]
fn test_phrase_mode_matches_multi_word_keywords() {
    let c = classifier(MatchMode::Phrase);
    let verdict = c.validate_query("Notes on in silico molecular docking");
    assert_eq!(verdict.matched_allow, vec!["molecular docking", "in silico"]);
    assert!(verdict.is_valid);

    let verdict = c.validate_query("A tv show about the hospital");
    assert_eq!(verdict.matched_deny, vec!["tv show"]);
    assert_eq!(verdict.reason, Some(RejectReason::DeniedTopic));

    assert!(c.is_in_allow_set("high-throughput screening"));
}

#[test]
fn test_substring_mode_matches_inside_words() {
    let c = classifier(MatchMode::Substring);
    assert!(c.is_in_allow_set("pharmacogenomics"));
    assert!(!classifier(MatchMode::Token).is_in_allow_set("pharmacogenomics"));
}

#[test]
fn test_response_messages() {
    let c = classifier(MatchMode::Token);
    assert_eq!(
        c.validate_response("The weather is nice").into_pair(),
        (
            false,
            "Response must be related to healthcare or drug discovery.".to_string()
        )
    );
    assert_eq!(
        c.validate_response("Vaccine uptake among celebrities").into_pair(),
        (
            false,
            "Response contains topics that are not allowed (e.g., politics, sports, entertainment)."
                .to_string()
        )
    );
    assert_eq!(
        c.validate_response("The vaccine showed strong efficacy.").into_pair(),
        (true, String::new())
    );
}

#[test]
fn test_typographic_quotes_and_markdown_do_not_hide_keywords() {
    let c = classifier(MatchMode::Token);
    assert_eq!(
        c.validate_response("The “vaccine” was approved.").into_pair(),
        (true, String::new())
    );
    assert_eq!(
        c.validate_response("**Diagnosis**: benign").into_pair(),
        (true, String::new())
    );
    assert_eq!(
        c.validate_query("Any news on that drug..").into_pair(),
        (true, String::new())
    );
}

#[test]
fn test_config_file_extends_tables() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("topicguard.toml");
    std::fs::write(
        &path,
        "[keywords]\nextra_allow = [\"oncology\"]\nextra_deny = [\"crypto\"]\n",
    )
    .expect("write config");

    let cfg = load_from(&path.to_string_lossy()).expect("load config");
    let c = build_classifier(&cfg).expect("build classifier");

    assert!(c.validate_query("Advances in oncology").is_valid);
    assert_eq!(
        c.validate_query("Oncology funding via crypto").reason,
        Some(RejectReason::DeniedTopic)
    );
}

#[test]
fn test_search_domain_check() {
    let c = classifier(MatchMode::Token);
    assert!(c.is_search_domain("Known inhibitors of EGFR"));
    assert!(c.is_search_domain("adverse events reported for the compound"));
    assert!(!c.is_search_domain("Recipe for banana bread"));
}
