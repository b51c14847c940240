//! Batch input of sensor packages
//!
//! Packages are read from CSV (`code,v1,v2,...` per line) and then turned into
//! summaries one by one, optionally in parallel. A record that fails never
//! affects the records around it.

pub mod csv;
pub mod parallel;

use crate::error::InputError;
use crate::package::read_package;
use crate::training::Workout;

pub use self::csv::{parse_packages, read_packages_file};
pub use parallel::{process_packages, BatchConfig, BatchReport, PackageOutcome};

/// One CSV record: the code, its values and the line they were read from
#[derive(Debug, Clone, PartialEq)]
pub struct PackageRecord {
    /// 1-based line in the source file
    pub line: u64,

    /// Code as it appeared in the input
    pub code: String,

    /// Parsed values, or why the record could not be parsed
    pub values: Result<Vec<f64>, InputError>,
}

impl PackageRecord {
    pub fn new(line: u64, code: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            line,
            code: code.into(),
            values: Ok(values),
        }
    }

    /// A record that is rejected before its package is read
    pub fn rejected(line: u64, code: impl Into<String>, error: InputError) -> Self {
        Self {
            line,
            code: code.into(),
            values: Err(error),
        }
    }

    /// Build the workout this record describes
    pub fn read(&self) -> Result<Workout, InputError> {
        match &self.values {
            Ok(values) => read_package(&self.code, values),
            Err(e) => Err(e.clone()),
        }
    }
}
