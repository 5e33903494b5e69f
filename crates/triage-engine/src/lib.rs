//! Triage Engine
//!
//! Deterministic, auditable priority assignment for self-reported symptoms.
//!
//! A submission is first validated; only a submission with no violations is
//! classified. Classification evaluates three tiers in order:
//! - RED: high fever, severe pain, emergency keywords (all matches kept)
//! - YELLOW: moderate fever, moderate pain, persistent symptoms, or the
//!   first urgent keyword when nothing else in the tier fired
//! - GREEN: routine care
//!
//! Thresholds and keyword lists live in a [`RuleSet`] that can be loaded
//! from YAML.

pub mod classifier;
pub mod engine;
pub mod keywords;
pub mod rules;
pub mod validator;

pub use classifier::{classify, Assessment, TriageClassifier, ROUTINE_CARE_REASON};
pub use engine::{describe_metrics, TriageEngine};
pub use keywords::KeywordSet;
pub use rules::{KeywordRule, RuleSet};
pub use validator::{validate, Violation};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::{Assessment, TriageClassifier};
    pub use crate::engine::TriageEngine;
    pub use crate::rules::{KeywordRule, RuleSet};
    pub use crate::validator::{validate, Violation};
    pub use triage_core::prelude::*;
}
