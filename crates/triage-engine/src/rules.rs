//! Rule set definitions: thresholds and keyword lists

use serde::{Deserialize, Serialize};
use std::path::Path;
use triage_core::{DurationBucket, Error, Result};

use crate::keywords::KeywordSet;

/// Thresholds and keyword lists driving classification.
///
/// Any field left out of a YAML document keeps its built-in value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    /// Fever temperature strictly above which a case is RED (°C)
    pub high_fever_above: f64,

    /// Fever temperature strictly above which a case is YELLOW (°C)
    pub moderate_fever_above: f64,

    /// Pain level at or above which a case is RED
    pub severe_pain_at_least: i64,

    /// Pain level at or above which (and below severe) a case is YELLOW
    pub moderate_pain_at_least: i64,

    /// Duration bucket that counts as persistent symptoms
    pub persistent_duration: DurationBucket,

    /// Emergency keywords; every match contributes a reason
    pub emergency: KeywordRule,

    /// Urgent keywords; only the first match in list order contributes a reason
    pub urgent: KeywordRule,
}

/// An ordered keyword list and the prefix of the reason each match produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRule {
    /// Reason prefix, rendered as `"<reason>: <keyword>"`
    pub reason: String,

    /// Keywords in evaluation order
    pub keywords: Vec<String>,
}

impl KeywordRule {
    /// Build a rule from a reason prefix and keywords
    pub fn new<I, S>(reason: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            reason: reason.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    /// Reason phrase for a matched keyword
    pub fn reason_for(&self, keyword: &str) -> String {
        format!("{}: {}", self.reason, keyword)
    }

    /// Compile the keywords for matching
    pub fn compile(&self) -> Result<KeywordSet> {
        KeywordSet::new(&self.keywords)
    }
}

impl RuleSet {
    /// Load a rule set from a YAML string and check it
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let rules: Self = serde_yaml::from_str(yaml)?;
        rules.check()?;
        Ok(rules)
    }

    /// Load a rule set from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Render as YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Reject thresholds that would make tiers overlap and malformed keyword lists
    pub fn check(&self) -> Result<()> {
        if !self.high_fever_above.is_finite() || !self.moderate_fever_above.is_finite() {
            return Err(Error::config("fever thresholds must be finite"));
        }
        if self.moderate_fever_above > self.high_fever_above {
            return Err(Error::config(format!(
                "moderate_fever_above ({}) exceeds high_fever_above ({})",
                self.moderate_fever_above, self.high_fever_above
            )));
        }
        if self.moderate_pain_at_least > self.severe_pain_at_least {
            return Err(Error::config(format!(
                "moderate_pain_at_least ({}) exceeds severe_pain_at_least ({})",
                self.moderate_pain_at_least, self.severe_pain_at_least
            )));
        }
        if self.emergency.reason.is_empty() || self.urgent.reason.is_empty() {
            return Err(Error::config("keyword reason must not be empty"));
        }

        self.emergency.compile()?;
        self.urgent.compile()?;
        Ok(())
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            high_fever_above: 38.5,
            moderate_fever_above: 37.5,
            severe_pain_at_least: 8,
            moderate_pain_at_least: 5,
            persistent_duration: DurationBucket::OverSevenDays,
            emergency: KeywordRule::new(
                "Emergency symptom",
                [
                    "chest pain",
                    "heart attack",
                    "stroke",
                    "unconscious",
                    "severe bleeding",
                    "difficulty breathing",
                    "shortness of breath",
                    "suicide",
                    "overdose",
                    "severe accident",
                ],
            ),
            urgent: KeywordRule::new(
                "Concerning symptom",
                [
                    "persistent cough",
                    "vomiting",
                    "diarrhea",
                    "rash",
                    "swelling",
                    "dizziness",
                    "headache",
                    "infection",
                ],
            ),
        }
    }
}
