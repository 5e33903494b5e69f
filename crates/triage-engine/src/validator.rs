//! Submission validation
//!
//! Checks the structural and range constraints a submission must satisfy
//! before it may be classified. Every rule is checked independently and every
//! violation is reported; validation itself never fails.

use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::RangeInclusive;
use triage_core::CaseSubmission;

/// Minimum symptom description length, in characters after trimming
pub const MIN_SYMPTOMS_CHARS: usize = 5;

/// Accepted pain levels
pub const PAIN_LEVEL_RANGE: RangeInclusive<i64> = 0..=10;

/// Accepted body temperatures in °C when a fever is reported
pub const TEMPERATURE_RANGE_C: RangeInclusive<f64> = 35.0..=45.0;

/// A single reason a submission is not eligible for classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    SymptomsTooShort,
    DurationMissing,
    PainLevelOutOfRange,
    TemperatureOutOfRange,
}

impl Violation {
    /// User-facing message
    pub fn message(&self) -> &'static str {
        match self {
            Self::SymptomsTooShort => "Symptoms description must be at least 5 characters",
            Self::DurationMissing => "Duration is required",
            Self::PainLevelOutOfRange => "Pain level must be between 0 and 10",
            Self::TemperatureOutOfRange => "Temperature must be between 35°C and 45°C",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for Violation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Check a submission, returning every violation in rule order.
///
/// An empty list means the submission may be classified.
pub fn validate(submission: &CaseSubmission) -> Vec<Violation> {
    let mut violations = Vec::new();

    if submission.symptoms.trim().chars().count() < MIN_SYMPTOMS_CHARS {
        violations.push(Violation::SymptomsTooShort);
    }

    if submission.duration.is_empty() {
        violations.push(Violation::DurationMissing);
    }

    if let Some(pain) = submission.pain_level {
        if !PAIN_LEVEL_RANGE.contains(&pain) {
            violations.push(Violation::PainLevelOutOfRange);
        }
    }

    // NaN falls outside the range
    if let Some(temperature) = submission.fever_temperature() {
        if !TEMPERATURE_RANGE_C.contains(&temperature) {
            violations.push(Violation::TemperatureOutOfRange);
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_submission() {
        let submission = CaseSubmission::new("Mild sore throat", "1-2 days").with_pain_level(2);
        assert!(validate(&submission).is_empty());
    }

    #[test]
    fn test_symptoms_trimmed_before_length_check() {
        let submission = CaseSubmission::new("  ab   ", "1-2 days");
        assert_eq!(validate(&submission), vec![Violation::SymptomsTooShort]);

        let submission = CaseSubmission::new(" cough ", "1-2 days");
        assert!(validate(&submission).is_empty());
    }

    #[test]
    fn test_symptoms_length_counts_characters() {
        // five characters, more than five bytes
        let submission = CaseSubmission::new("fièvr", "1-2 days");
        assert!(validate(&submission).is_empty());
    }

    #[test]
    fn test_violations_accumulate() {
        let submission = CaseSubmission::new("ab", "").with_pain_level(15);
        assert_eq!(
            validate(&submission),
            vec![
                Violation::SymptomsTooShort,
                Violation::DurationMissing,
                Violation::PainLevelOutOfRange,
            ]
        );
    }

    #[test]
    fn test_pain_level_bounds() {
        for pain in [0, 10] {
            let submission = CaseSubmission::new("back pain", "1-2 days").with_pain_level(pain);
            assert!(validate(&submission).is_empty(), "pain {} should be valid", pain);
        }
        for pain in [-1, 11] {
            let submission = CaseSubmission::new("back pain", "1-2 days").with_pain_level(pain);
            assert_eq!(validate(&submission), vec![Violation::PainLevelOutOfRange]);
        }
    }

    #[test]
    fn test_temperature_checked_only_with_fever() {
        let mut submission = CaseSubmission::new("chills and aches", "1-2 days");
        submission.temperature = Some(50.0);
        assert!(validate(&submission).is_empty());

        let submission = CaseSubmission::new("chills and aches", "1-2 days").with_fever(50.0);
        assert_eq!(validate(&submission), vec![Violation::TemperatureOutOfRange]);

        let submission = CaseSubmission::new("chills and aches", "1-2 days").with_fever(34.9);
        assert_eq!(validate(&submission), vec![Violation::TemperatureOutOfRange]);

        let submission = CaseSubmission::new("chills and aches", "1-2 days").with_fever(45.0);
        assert!(validate(&submission).is_empty());
    }

    #[test]
    fn test_fever_without_temperature_is_valid() {
        let mut submission = CaseSubmission::new("chills and aches", "1-2 days");
        submission.fever = true;
        assert!(validate(&submission).is_empty());
    }

    #[test]
    fn test_nan_temperature_is_rejected() {
        let submission = CaseSubmission::new("chills and aches", "1-2 days").with_fever(f64::NAN);
        assert_eq!(validate(&submission), vec![Violation::TemperatureOutOfRange]);
    }
}
