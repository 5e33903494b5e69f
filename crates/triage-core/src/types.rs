//! Core types for the triage engine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Treat an explicit `null` like an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A self-reported case as submitted by a patient.
///
/// Every field defaults when absent so that missing input is reported by
/// validation rather than rejected during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseSubmission {
    /// Free-text description of the symptoms
    #[serde(default, deserialize_with = "null_as_default")]
    pub symptoms: String,

    /// Elapsed-time bucket, normally one of [`DurationBucket`]'s wire strings
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration: String,

    /// Whether the patient reports a fever
    #[serde(default, deserialize_with = "null_as_default")]
    pub fever: bool,

    /// Body temperature in °C, meaningful only with `fever`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    /// Self-reported pain on a 0-10 scale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pain_level: Option<i64>,

    /// Known allergies, carried through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergies: Option<String>,
}

impl CaseSubmission {
    /// Create a submission with symptoms and duration, no fever or pain reported
    pub fn new(symptoms: impl Into<String>, duration: impl Into<String>) -> Self {
        Self {
            symptoms: symptoms.into(),
            duration: duration.into(),
            ..Default::default()
        }
    }

    /// Report a fever with the measured temperature
    pub fn with_fever(mut self, temperature: f64) -> Self {
        self.fever = true;
        self.temperature = Some(temperature);
        self
    }

    /// Report a pain level
    pub fn with_pain_level(mut self, pain_level: i64) -> Self {
        self.pain_level = Some(pain_level);
        self
    }

    /// Attach known allergies
    pub fn with_allergies(mut self, allergies: impl Into<String>) -> Self {
        self.allergies = Some(allergies.into());
        self
    }

    /// The duration as a known bucket, if it is one
    pub fn duration_bucket(&self) -> Option<DurationBucket> {
        DurationBucket::parse(&self.duration)
    }

    /// Temperature, only when a fever is reported
    pub fn fever_temperature(&self) -> Option<f64> {
        if self.fever {
            self.temperature
        } else {
            None
        }
    }
}

/// How long the symptoms have been present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DurationBucket {
    #[serde(rename = "< 1 hour")]
    UnderOneHour,
    #[serde(rename = "1-6 hours")]
    OneToSixHours,
    #[serde(rename = "6-24 hours")]
    SixToTwentyFourHours,
    #[serde(rename = "1-2 days")]
    OneToTwoDays,
    #[serde(rename = "2-7 days")]
    TwoToSevenDays,
    #[serde(rename = "> 7 days")]
    OverSevenDays,
}

impl DurationBucket {
    /// All buckets, shortest first
    pub const ALL: [DurationBucket; 6] = [
        Self::UnderOneHour,
        Self::OneToSixHours,
        Self::SixToTwentyFourHours,
        Self::OneToTwoDays,
        Self::TwoToSevenDays,
        Self::OverSevenDays,
    ];

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnderOneHour => "< 1 hour",
            Self::OneToSixHours => "1-6 hours",
            Self::SixToTwentyFourHours => "6-24 hours",
            Self::OneToTwoDays => "1-2 days",
            Self::TwoToSevenDays => "2-7 days",
            Self::OverSevenDays => "> 7 days",
        }
    }

    /// Exact match against the wire strings; no trimming or case folding
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.as_str() == s)
    }
}

impl fmt::Display for DurationBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DurationBucket {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| Error::invalid_value(format!("unknown duration '{}'", s)))
    }
}

/// Triage priority. Ordered so that `Red > Yellow > Green`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PriorityLevel {
    /// Routine care
    Green,
    /// Urgent, non-emergency
    Yellow,
    /// Emergency
    Red,
}

impl PriorityLevel {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "GREEN",
            Self::Yellow => "YELLOW",
            Self::Red => "RED",
        }
    }
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriorityLevel {
    type Err = Error;

    /// Case-insensitive, so `red` and `Red` both parse
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "RED" => Ok(Self::Red),
            "YELLOW" => Ok(Self::Yellow),
            "GREEN" => Ok(Self::Green),
            _ => Err(Error::invalid_value(format!("unknown priority level '{}'", s))),
        }
    }
}

/// Review workflow status of a case. Owned by the caller; the engine never changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    #[default]
    Pending,
    Reviewed,
    InProgress,
    Resolved,
}

impl CaseStatus {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Reviewed => "reviewed",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
        }
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "reviewed" => Ok(Self::Reviewed),
            "in_progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            _ => Err(Error::invalid_value(format!("invalid status '{}'", s))),
        }
    }
}

/// Outcome of classifying one submission.
///
/// Only built through [`TriageResult::new`], so `reason` always matches `reasons`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriageResult {
    level: PriorityLevel,
    reason: String,
    reasons: Vec<String>,
    observed_at: DateTime<Utc>,
}

impl TriageResult {
    /// Assemble a result; `reason` is the trail joined with `"; "`
    pub fn new(level: PriorityLevel, reasons: Vec<String>, observed_at: DateTime<Utc>) -> Self {
        Self {
            level,
            reason: reasons.join("; "),
            reasons,
            observed_at,
        }
    }

    /// Assigned priority
    pub fn level(&self) -> PriorityLevel {
        self.level
    }

    /// Reason trail as a single string
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Reason trail, one entry per fired rule
    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    /// When the classification happened
    pub fn observed_at(&self) -> DateTime<Utc> {
        self.observed_at
    }
}
