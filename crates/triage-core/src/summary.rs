//! Case count aggregation by priority and workflow status

use serde::{Deserialize, Serialize};

use crate::{CaseStatus, PriorityLevel};

/// Counts of triaged cases, as shown on a review dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageSummary {
    pub total: u64,
    pub red: u64,
    pub yellow: u64,
    pub green: u64,
    pub pending: u64,
    pub reviewed: u64,
    pub in_progress: u64,
    pub resolved: u64,
}

impl TriageSummary {
    /// Create an empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one case
    pub fn record(&mut self, level: PriorityLevel, status: CaseStatus) {
        self.record_many(level, status, 1);
    }

    /// Count `count` cases sharing a level and status
    pub fn record_many(&mut self, level: PriorityLevel, status: CaseStatus, count: u64) {
        self.total += count;

        match level {
            PriorityLevel::Red => self.red += count,
            PriorityLevel::Yellow => self.yellow += count,
            PriorityLevel::Green => self.green += count,
        }

        match status {
            CaseStatus::Pending => self.pending += count,
            CaseStatus::Reviewed => self.reviewed += count,
            CaseStatus::InProgress => self.in_progress += count,
            CaseStatus::Resolved => self.resolved += count,
        }
    }
}

impl FromIterator<(PriorityLevel, CaseStatus)> for TriageSummary {
    fn from_iter<I: IntoIterator<Item = (PriorityLevel, CaseStatus)>>(iter: I) -> Self {
        let mut summary = Self::new();
        for (level, status) in iter {
            summary.record(level, status);
        }
        summary
    }
}
