//! Triage Core
//!
//! Core types, traits, and utilities shared across the triage components.
//!
//! This crate provides:
//! - The case submission and triage result types
//! - Priority levels, duration buckets, and workflow statuses
//! - Error types and result handling
//! - The injectable clock used to timestamp results
//! - Summary aggregation over triaged cases

pub mod clock;
pub mod error;
pub mod summary;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use summary::TriageSummary;
pub use types::{CaseStatus, CaseSubmission, DurationBucket, PriorityLevel, TriageResult};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::clock::{Clock, FixedClock, SystemClock};
    pub use crate::error::{Error, Result};
    pub use crate::types::{CaseStatus, CaseSubmission, DurationBucket, PriorityLevel, TriageResult};
}
