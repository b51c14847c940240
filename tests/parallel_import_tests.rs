//! Integration tests for batch package processing
//!
//! Covers reading package files from disk, per-record error isolation and
//! ordering under parallel processing.

use std::io::Write;
use tempfile::NamedTempFile;
use trainstats::import::{
    parse_packages, process_packages, read_packages_file, BatchConfig, BatchReport,
};
use trainstats::{InputError, TrainStatsError};

fn write_packages(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_batch_from_file() {
    let file = write_packages(
        "# code,values...\n\
         SWM,720,1,80,25,40\n\
         RUN,15000,1,75\n\
         WLK,9000,1,75,180\n",
    );

    let records = read_packages_file(file.path()).unwrap();
    assert_eq!(records.len(), 3);

    let outcomes = process_packages(&records, &BatchConfig::default());
    let report = BatchReport::from_outcomes(&outcomes);
    assert!(report.is_fully_successful());

    let types: Vec<String> = outcomes
        .iter()
        .map(|o| o.result.as_ref().unwrap().training_type.clone())
        .collect();
    assert_eq!(types, vec!["Swimming", "Running", "SportsWalking"]);
}

#[test]
fn test_bad_records_do_not_affect_others() {
    let records = parse_packages(
        "RUN,15000,1,75\n\
         XYZ,1,2,3\n\
         WLK,9000,1,75\n\
         RUN,15000,0,75\n\
         SWM,720,1,80,25,40\n"
            .as_bytes(),
    )
    .unwrap();

    let outcomes = process_packages(&records, &BatchConfig::default());
    assert_eq!(outcomes.len(), 5);

    assert!(outcomes[0].is_success());
    assert!(matches!(
        outcomes[1].result,
        Err(InputError::UnknownCode { .. })
    ));
    assert!(matches!(
        outcomes[2].result,
        Err(InputError::ArityMismatch { .. })
    ));
    assert!(matches!(
        outcomes[3].result,
        Err(InputError::InvalidValue { .. })
    ));
    assert!(outcomes[4].is_success());

    let calories = outcomes[0].result.as_ref().unwrap().calories;
    assert!((calories - 699.75).abs() < 1e-9);

    let report = BatchReport::from_outcomes(&outcomes);
    assert_eq!(report.total, 5);
    assert_eq!(report.failed, 3);
}

#[test]
fn test_unparsable_fields_do_not_affect_others() {
    let file = write_packages(
        "RUN,15000,1,75\n\
         RUN,15000,1,75,\n\
         WLK,9000,one,75,180\n\
         ,1,2,3\n\
         SWM,720,1,80,25,40\n",
    );

    let records = read_packages_file(file.path()).unwrap();
    let outcomes = process_packages(&records, &BatchConfig::default());
    assert_eq!(outcomes.len(), 5);

    assert!(outcomes[0].is_success());
    assert!(matches!(
        outcomes[1].result,
        Err(InputError::NotANumber { .. })
    ));
    assert!(matches!(
        outcomes[2].result,
        Err(InputError::NotANumber { .. })
    ));
    assert_eq!(outcomes[2].line, 3);
    assert_eq!(outcomes[3].result, Err(InputError::MissingCode));
    assert!(outcomes[4].is_success());

    let report = BatchReport::from_outcomes(&outcomes);
    assert_eq!(report.succeeded, 2);
    assert_eq!(report.failed, 3);
}

#[test]
fn test_large_batch_keeps_order() {
    let content: String = (1..=500)
        .map(|i| format!("RUN,{},1,70\n", i * 100))
        .collect();
    let records = parse_packages(content.as_bytes()).unwrap();

    let parallel = process_packages(&records, &BatchConfig::default());
    let sequential = process_packages(
        &records,
        &BatchConfig {
            parallel: false,
            stop_on_error: false,
        },
    );

    assert_eq!(parallel, sequential);
    for (index, outcome) in parallel.iter().enumerate() {
        assert_eq!(outcome.line, index as u64 + 1);
    }

    let distances: Vec<f64> = parallel
        .iter()
        .map(|o| o.result.as_ref().unwrap().distance)
        .collect();
    assert!(distances.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_missing_file() {
    let err = read_packages_file("/nonexistent/packages.csv").unwrap_err();
    assert!(matches!(err, TrainStatsError::Io(_)));
    assert!(!err.is_invalid_input());
}

#[test]
fn test_malformed_value_reports_line() {
    let file = write_packages("RUN,15000,1,75\nRUN,15000,one,75\n");
    let records = read_packages_file(file.path()).unwrap();
    let outcomes = process_packages(&records, &BatchConfig::default());

    let failed: Vec<_> = outcomes.iter().filter(|o| !o.is_success()).collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].line, 2);

    let err = TrainStatsError::from(failed[0].result.clone().unwrap_err());
    assert!(err.is_invalid_input());
    assert!(err.user_message().contains("'one' is not a number"));
}
