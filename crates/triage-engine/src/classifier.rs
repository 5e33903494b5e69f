//! Tiered priority classification
//!
//! Rules are evaluated in three tiers of descending severity:
//! - RED: high fever, severe pain, and every emergency keyword present
//! - YELLOW: moderate fever, moderate pain, persistent duration; the first
//!   urgent keyword only when none of those fired
//! - GREEN: nothing matched
//!
//! A tier is only consulted when every tier above it produced no reasons.

use std::sync::OnceLock;
use tracing::debug;
use triage_core::{CaseSubmission, Clock, PriorityLevel, Result, TriageResult};

use crate::keywords::KeywordSet;
use crate::rules::RuleSet;
use crate::validator;

/// Sole reason given when no rule fires
pub const ROUTINE_CARE_REASON: &str = "Mild symptoms suitable for routine care";

/// Level and reason trail for a submission, before timestamping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub level: PriorityLevel,
    pub reasons: Vec<String>,
}

/// Rule-based triage classifier
#[derive(Debug, Clone)]
pub struct TriageClassifier {
    rules: RuleSet,
    emergency: KeywordSet,
    urgent: KeywordSet,
}

impl TriageClassifier {
    /// Create a classifier from a rule set
    pub fn new(rules: RuleSet) -> Result<Self> {
        rules.check()?;
        let emergency = rules.emergency.compile()?;
        let urgent = rules.urgent.compile()?;

        Ok(Self {
            rules,
            emergency,
            urgent,
        })
    }

    /// The rule set in effect
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Assign a level and reason trail. Pure; reads no clock.
    pub fn assess(&self, submission: &CaseSubmission) -> Assessment {
        let symptoms = submission.symptoms.to_lowercase();

        let reasons = self.emergency_reasons(submission, &symptoms);
        if !reasons.is_empty() {
            debug!(reasons = reasons.len(), "Emergency tier matched");
            return Assessment {
                level: PriorityLevel::Red,
                reasons,
            };
        }

        let reasons = self.urgent_reasons(submission, &symptoms);
        if !reasons.is_empty() {
            debug!(reasons = reasons.len(), "Urgent tier matched");
            return Assessment {
                level: PriorityLevel::Yellow,
                reasons,
            };
        }

        debug!("No tier matched, routine care");
        Assessment {
            level: PriorityLevel::Green,
            reasons: vec![ROUTINE_CARE_REASON.to_string()],
        }
    }

    /// Classify a validated submission and stamp it with the clock's current instant.
    ///
    /// The submission must have passed [`validator::validate`]; behavior on
    /// invalid input is unspecified and asserted against in debug builds.
    pub fn classify(&self, submission: &CaseSubmission, clock: &dyn Clock) -> TriageResult {
        debug_assert!(
            validator::validate(submission).is_empty(),
            "classify called on a submission that failed validation"
        );

        let Assessment { level, reasons } = self.assess(submission);
        TriageResult::new(level, reasons, clock.now())
    }

    fn emergency_reasons(&self, submission: &CaseSubmission, symptoms: &str) -> Vec<String> {
        let mut reasons = Vec::new();

        if let Some(t) = submission.fever_temperature() {
            if t > self.rules.high_fever_above {
                reasons.push(format!("High fever ({}°C)", t));
            }
        }

        if let Some(pain) = submission.pain_level {
            if pain >= self.rules.severe_pain_at_least {
                reasons.push(format!("Severe pain level ({}/10)", pain));
            }
        }

        reasons.extend(
            self.emergency
                .all_matches(symptoms)
                .into_iter()
                .map(|keyword| self.rules.emergency.reason_for(keyword)),
        );

        reasons
    }

    fn urgent_reasons(&self, submission: &CaseSubmission, symptoms: &str) -> Vec<String> {
        let mut reasons = Vec::new();

        if let Some(t) = submission.fever_temperature() {
            if t > self.rules.moderate_fever_above {
                reasons.push(format!("Moderate fever ({}°C)", t));
            }
        }

        if let Some(pain) = submission.pain_level {
            if (self.rules.moderate_pain_at_least..self.rules.severe_pain_at_least).contains(&pain) {
                reasons.push(format!("Moderate pain level ({}/10)", pain));
            }
        }

        if submission.duration_bucket() == Some(self.rules.persistent_duration) {
            reasons.push(format!("Persistent symptoms {}", self.rules.persistent_duration));
        }

        // Keyword scan only runs when no numeric or duration rule fired
        if reasons.is_empty() {
            if let Some(keyword) = self.urgent.first_match(symptoms) {
                reasons.push(self.rules.urgent.reason_for(keyword));
            }
        }

        reasons
    }
}

impl Default for TriageClassifier {
    fn default() -> Self {
        Self::new(RuleSet::default()).expect("built-in rule set is valid")
    }
}

fn default_classifier() -> &'static TriageClassifier {
    static DEFAULT: OnceLock<TriageClassifier> = OnceLock::new();
    DEFAULT.get_or_init(TriageClassifier::default)
}

/// Classify a validated submission with the built-in rule set
pub fn classify(submission: &CaseSubmission, clock: &dyn Clock) -> TriageResult {
    default_classifier().classify(submission, clock)
}
