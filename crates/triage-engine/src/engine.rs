//! Triage engine: validation, classification, and result assembly

use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use triage_core::{CaseSubmission, Clock, Error, Result, SystemClock, TriageResult};

use crate::classifier::TriageClassifier;
use crate::rules::RuleSet;
use crate::validator::{self, Violation};

/// Validates submissions and classifies the ones that pass.
///
/// Holds no mutable state and can be shared freely across threads.
pub struct TriageEngine {
    classifier: TriageClassifier,
    clock: Arc<dyn Clock>,
}

impl TriageEngine {
    /// Create an engine from a rule set and clock
    pub fn new(rules: RuleSet, clock: Arc<dyn Clock>) -> Result<Self> {
        Ok(Self {
            classifier: TriageClassifier::new(rules)?,
            clock,
        })
    }

    /// Built-in rules and wall-clock time
    pub fn with_defaults() -> Self {
        Self::from_classifier(TriageClassifier::default(), Arc::new(SystemClock))
    }

    /// Create an engine around an existing classifier
    pub fn from_classifier(classifier: TriageClassifier, clock: Arc<dyn Clock>) -> Self {
        Self { classifier, clock }
    }

    /// Load rules from a YAML file
    pub fn from_rules_file(path: impl AsRef<Path>, clock: Arc<dyn Clock>) -> Result<Self> {
        let rules = RuleSet::from_file(path)
            .map_err(|e| Error::config(format!("Failed to load rules: {}", e)))?;
        Self::new(rules, clock)
    }

    /// Check a submission; an empty list means it may be classified
    pub fn validate(&self, submission: &CaseSubmission) -> Vec<Violation> {
        validator::validate(submission)
    }

    /// Classify a submission that has already passed validation
    pub fn classify(&self, submission: &CaseSubmission) -> TriageResult {
        let result = self.classifier.classify(submission, self.clock.as_ref());

        metrics::counter!("triage_classifications_total", "level" => result.level().as_str())
            .increment(1);
        info!(
            level = %result.level(),
            reasons = result.reasons().len(),
            "Submission classified"
        );

        result
    }

    /// Validate, then classify. Invalid submissions never reach the classifier.
    pub fn triage(&self, submission: &CaseSubmission) -> Result<TriageResult> {
        let violations = self.validate(submission);
        if !violations.is_empty() {
            metrics::counter!("triage_validation_failures_total").increment(1);
            warn!(violations = violations.len(), "Submission failed validation");
            return Err(Error::validation(violations.iter().map(Violation::message)));
        }

        Ok(self.classify(submission))
    }

    /// The rule set in effect
    pub fn rules(&self) -> &RuleSet {
        self.classifier.rules()
    }
}

impl Default for TriageEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Register metric descriptions with the installed recorder
pub fn describe_metrics() {
    metrics::describe_counter!(
        "triage_classifications_total",
        "Total number of submissions classified, by level"
    );
    metrics::describe_counter!(
        "triage_validation_failures_total",
        "Total number of submissions rejected by validation"
    );
}
