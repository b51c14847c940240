use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::PackageRecord;
use crate::error::{InputError, Result};

/// Parse headerless package CSV, one package per record.
///
/// Records may have any number of fields; lines starting with `#` are
/// comments. Only unreadable CSV fails the whole parse. A record with a
/// missing code or a non-numeric value is kept as a rejected record.
pub fn parse_packages<R: Read>(reader: R) -> Result<Vec<PackageRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut records = Vec::new();

    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        records.push(to_package_record(line, &record));
    }

    tracing::debug!(count = records.len(), "Parsed package records");
    Ok(records)
}

fn to_package_record(line: u64, record: &StringRecord) -> PackageRecord {
    let mut fields = record.iter();
    let code = match fields.next() {
        Some(code) if !code.is_empty() => code,
        _ => return PackageRecord::rejected(line, "", InputError::MissingCode),
    };

    let values = fields
        .map(|field| {
            field.parse::<f64>().map_err(|e| InputError::NotANumber {
                value: field.to_string(),
                reason: e.to_string(),
            })
        })
        .collect::<std::result::Result<Vec<f64>, InputError>>();

    match values {
        Ok(values) => PackageRecord::new(line, code, values),
        Err(e) => PackageRecord::rejected(line, code, e),
    }
}

/// Read a package CSV file from disk
pub fn read_packages_file<P: AsRef<Path>>(path: P) -> Result<Vec<PackageRecord>> {
    let file = File::open(path.as_ref())?;
    parse_packages(file)
}
