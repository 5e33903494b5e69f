//! Command implementations over readers and writers

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::{Read, Write};
use std::process::ExitCode;
use tracing::debug;
use triage_core::{CaseStatus, CaseSubmission, Error, PriorityLevel, TriageSummary};
use triage_engine::{validate, RuleSet, TriageEngine};

/// Outcome of a command that inspected a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    /// Work completed
    Success,
    /// The submission failed validation
    Invalid,
}

impl CommandStatus {
    /// Process exit code: 0 on success, 2 on validation failure
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Success => ExitCode::SUCCESS,
            Self::Invalid => ExitCode::from(2),
        }
    }
}

/// A persisted case as exported by the caller's storage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseRecord {
    pub triage_level: PriorityLevel,
    #[serde(default)]
    pub status: CaseStatus,
}

/// Open a file, or stdin for `-`
pub fn open_input(path: &str) -> anyhow::Result<Box<dyn Read>> {
    if path == "-" {
        Ok(Box::new(std::io::stdin().lock()))
    } else {
        let file = std::fs::File::open(path).with_context(|| format!("Failed to open {}", path))?;
        Ok(Box::new(std::io::BufReader::new(file)))
    }
}

fn read_submission(input: impl Read) -> anyhow::Result<CaseSubmission> {
    serde_json::from_reader(input).context("Submission could not be parsed")
}

fn write_json(mut out: impl Write, value: &impl Serialize) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Validate and classify one submission, writing the result or the violations
pub fn classify(
    engine: &TriageEngine,
    input: impl Read,
    out: impl Write,
) -> anyhow::Result<CommandStatus> {
    let submission = read_submission(input)?;

    match engine.triage(&submission) {
        Ok(result) => {
            write_json(out, &result)?;
            Ok(CommandStatus::Success)
        }
        Err(Error::Validation(details)) => {
            write_json(out, &json!({ "error": "Validation failed", "details": details }))?;
            Ok(CommandStatus::Invalid)
        }
        Err(e) => Err(e.into()),
    }
}

/// Validate one submission without classifying it
pub fn validate_only(input: impl Read, out: impl Write) -> anyhow::Result<CommandStatus> {
    let submission = read_submission(input)?;
    let violations = validate(&submission);
    debug!(violations = violations.len(), "Validation complete");

    write_json(
        out,
        &json!({ "valid": violations.is_empty(), "violations": violations }),
    )?;

    Ok(if violations.is_empty() {
        CommandStatus::Success
    } else {
        CommandStatus::Invalid
    })
}

/// Print a rule set as YAML
pub fn rules(rules: &RuleSet, mut out: impl Write) -> anyhow::Result<()> {
    out.write_all(rules.to_yaml()?.as_bytes())?;
    Ok(())
}

/// Count exported case records by level and status
pub fn summarize(input: impl Read, out: impl Write) -> anyhow::Result<TriageSummary> {
    let records: Vec<CaseRecord> =
        serde_json::from_reader(input).context("Case records are not a valid JSON array")?;

    let summary: TriageSummary = records
        .iter()
        .map(|r| (r.triage_level, r.status))
        .collect();

    write_json(out, &summary)?;
    Ok(summary)
}
