//! Independent processing of package records using rayon
//!
//! Every record is read and summarised on its own, so the work splits
//! across threads without coordination. Outcomes keep the input order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::PackageRecord;
use crate::error::InputError;
use crate::summary::TrainingSummary;
use crate::training::Training;

/// Configuration for batch processing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Spread records across the rayon thread pool
    pub parallel: bool,

    /// Drop every outcome after the first failed record
    pub stop_on_error: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            stop_on_error: false,
        }
    }
}

/// Result of a single package record
#[derive(Debug, Clone, PartialEq)]
pub struct PackageOutcome {
    /// Line the package was read from
    pub line: u64,
    /// Code as it appeared in the input
    pub code: String,
    pub result: Result<TrainingSummary, InputError>,
}

impl PackageOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

fn process_record(record: &PackageRecord) -> PackageOutcome {
    let result = record.read().map(|workout| workout.summary());

    if let Err(e) = &result {
        warn!(line = record.line, code = %record.code, error = %e, "Rejected package");
    }

    PackageOutcome {
        line: record.line,
        code: record.code.clone(),
        result,
    }
}

/// Turn every record into a summary or an invalid-input error
pub fn process_packages(records: &[PackageRecord], config: &BatchConfig) -> Vec<PackageOutcome> {
    debug!(
        records = records.len(),
        parallel = config.parallel,
        "Processing package batch"
    );

    let mut outcomes: Vec<PackageOutcome> = if config.parallel {
        records.par_iter().map(process_record).collect()
    } else if config.stop_on_error {
        let mut outcomes = Vec::with_capacity(records.len());
        for record in records {
            let outcome = process_record(record);
            let failed = !outcome.is_success();
            outcomes.push(outcome);
            if failed {
                break;
            }
        }
        outcomes
    } else {
        records.iter().map(process_record).collect()
    };

    if config.stop_on_error {
        if let Some(first_failure) = outcomes.iter().position(|o| !o.is_success()) {
            outcomes.truncate(first_failure + 1);
        }
    }

    let report = BatchReport::from_outcomes(&outcomes);
    info!(
        total = report.total,
        succeeded = report.succeeded,
        failed = report.failed,
        "Batch processed"
    );

    outcomes
}

/// Counts of a processed batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BatchReport {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchReport {
    pub fn from_outcomes(outcomes: &[PackageOutcome]) -> Self {
        let succeeded = outcomes.iter().filter(|o| o.is_success()).count();
        Self {
            total: outcomes.len(),
            succeeded,
            failed: outcomes.len() - succeeded,
        }
    }

    /// Check if every record produced a summary
    pub fn is_fully_successful(&self) -> bool {
        self.failed == 0
    }

    /// Get human-readable summary
    pub fn to_string_pretty(&self) -> String {
        format!(
            "Batch Summary\n  \
             Total Packages: {}\n  \
             Successful: {}\n  \
             Failed: {}",
            self.total, self.succeeded, self.failed
        )
    }
}
