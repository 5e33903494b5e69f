//! Tests for CLI commands and configuration loading

use chrono::{TimeZone, Utc};
use clap::Parser;
use serde_json::Value;
use std::sync::Arc;
use triage_cli::commands;
use triage_cli::{Cli, CommandStatus, TriageConfig};
use triage_core::FixedClock;
use triage_engine::{RuleSet, TriageEngine};

fn engine() -> TriageEngine {
    let at = Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap();
    TriageEngine::new(RuleSet::default(), Arc::new(FixedClock::new(at))).unwrap()
}

fn parse(out: &[u8]) -> Value {
    serde_json::from_slice(out).unwrap()
}

#[test]
fn test_classify_writes_result() {
    let input = r#"{"symptoms": "Chronic back pain worsening", "duration": "> 7 days", "pain_level": 6}"#;
    let mut out = Vec::new();

    let status = commands::classify(&engine(), input.as_bytes(), &mut out).unwrap();

    assert_eq!(status, CommandStatus::Success);
    let json = parse(&out);
    assert_eq!(json["level"], "YELLOW");
    assert_eq!(json["reason"], "Moderate pain level (6/10); Persistent symptoms > 7 days");
    assert_eq!(json["observed_at"], "2025-01-15T10:00:00Z");
}

#[test]
fn test_classify_reports_validation_failure() {
    let input = r#"{"symptoms": "ab", "duration": "", "pain_level": 15}"#;
    let mut out = Vec::new();

    let status = commands::classify(&engine(), input.as_bytes(), &mut out).unwrap();

    assert_eq!(status, CommandStatus::Invalid);
    let json = parse(&out);
    assert_eq!(json["error"], "Validation failed");
    assert_eq!(json["details"].as_array().unwrap().len(), 3);
    assert_eq!(json["details"][1], "Duration is required");
}

#[test]
fn test_classify_rejects_malformed_json() {
    let mut out = Vec::new();
    let err = commands::classify(&engine(), "not json".as_bytes(), &mut out).unwrap_err();
    assert_eq!(err.to_string(), "Submission could not be parsed");
    assert!(out.is_empty());
}

#[test]
fn test_classify_null_fields_are_validation_failures() {
    let input = r#"{"symptoms": null, "duration": null, "fever": false}"#;
    let mut out = Vec::new();

    let status = commands::classify(&engine(), input.as_bytes(), &mut out).unwrap();

    assert_eq!(status, CommandStatus::Invalid);
    let json = parse(&out);
    assert_eq!(json["error"], "Validation failed");
    assert_eq!(
        json["details"],
        serde_json::json!([
            "Symptoms description must be at least 5 characters",
            "Duration is required"
        ])
    );
}

#[test]
fn test_validate_only_accepts_null_fever() {
    let mut out = Vec::new();
    let status = commands::validate_only(
        r#"{"symptoms": "Mild sore throat", "duration": "1-2 days", "fever": null}"#.as_bytes(),
        &mut out,
    )
    .unwrap();

    assert_eq!(status, CommandStatus::Success);
    assert_eq!(parse(&out)["valid"], true);
}

#[test]
fn test_validate_only() {
    let mut out = Vec::new();
    let status = commands::validate_only(
        r#"{"symptoms": "Feverish", "duration": "1-2 days", "fever": true, "temperature": 47}"#.as_bytes(),
        &mut out,
    )
    .unwrap();

    assert_eq!(status, CommandStatus::Invalid);
    let json = parse(&out);
    assert_eq!(json["valid"], false);
    assert_eq!(json["violations"][0], "Temperature must be between 35°C and 45°C");

    let mut out = Vec::new();
    let status = commands::validate_only(
        r#"{"symptoms": "Mild sore throat", "duration": "1-2 days"}"#.as_bytes(),
        &mut out,
    )
    .unwrap();
    assert_eq!(status, CommandStatus::Success);
    assert_eq!(parse(&out)["valid"], true);
}

#[test]
fn test_rules_prints_yaml() {
    let mut out = Vec::new();
    commands::rules(&RuleSet::default(), &mut out).unwrap();

    let yaml = String::from_utf8(out).unwrap();
    assert_eq!(RuleSet::from_yaml(&yaml).unwrap(), RuleSet::default());
}

#[test]
fn test_summarize_counts_records() {
    let input = r#"[
        {"triage_level": "RED", "status": "pending"},
        {"triage_level": "GREEN", "status": "resolved"},
        {"triage_level": "GREEN"}
    ]"#;
    let mut out = Vec::new();

    let summary = commands::summarize(input.as_bytes(), &mut out).unwrap();

    assert_eq!(summary.total, 3);
    assert_eq!(summary.red, 1);
    assert_eq!(summary.green, 2);
    assert_eq!(summary.pending, 2);
    assert_eq!(parse(&out)["resolved"], 1);
}

#[test]
fn test_config_defaults_when_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.yaml");
    let cli = Cli::parse_from(["triage", "rules"]);

    let config = TriageConfig::load(&path, &cli).unwrap();
    assert_eq!(config.rules, RuleSet::default());
    assert!(!config.logging.json);
}

#[test]
fn test_config_file_and_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("triage.yaml");
    std::fs::write(
        &config_path,
        "rules:\n  severe_pain_at_least: 9\nlogging:\n  filter: triage=warn\n",
    )
    .unwrap();

    let cli = Cli::parse_from(["triage", "--json-logs", "rules"]);
    let config = TriageConfig::load(&config_path, &cli).unwrap();
    assert_eq!(config.rules.severe_pain_at_least, 9);
    assert_eq!(config.logging.filter.as_deref(), Some("triage=warn"));
    assert!(config.logging.json);

    let rules_path = dir.path().join("rules.yaml");
    std::fs::write(&rules_path, "high_fever_above: 39.5\n").unwrap();
    let cli = Cli::parse_from(["triage", "rules", "--rules", rules_path.to_str().unwrap()]);
    let config = TriageConfig::load(&config_path, &cli).unwrap();
    assert_eq!(config.rules.high_fever_above, 39.5);
    assert_eq!(config.rules.severe_pain_at_least, 8);
}

#[test]
fn test_config_rejects_invalid_rules() {
    assert!(TriageConfig::from_yaml("rules:\n  moderate_pain_at_least: 10\n").is_err());
}

#[test]
fn test_classify_at_flag_parses() {
    let cli = Cli::parse_from(["triage", "classify", "--at", "2025-01-15T10:00:00Z"]);
    match cli.command {
        triage_cli::Commands::Classify { input, at } => {
            assert_eq!(input, "-");
            assert_eq!(at, Some(Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap()));
        }
        other => panic!("Wrong command: {:?}", other),
    }
}

#[test]
fn test_metrics_flag_is_global() {
    let cli = Cli::parse_from(["triage", "rules", "--metrics"]);
    assert!(cli.metrics);

    let cli = Cli::parse_from(["triage", "rules"]);
    assert!(!cli.metrics);
}
