//! CSV intake parsing.

use crate::model::RawRecord;

use super::FormatError;

/// Parse headerless CSV lines into raw records.
///
/// Fields are trimmed, blank lines are discarded, and anything past the
/// fourth field is ignored. A line with fewer than four fields fails with
/// its 1-based line number and the count found.
pub(crate) fn parse(content: &str) -> Result<Vec<RawRecord>, FormatError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;

        // A whitespace-only line trims down to one empty field.
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }

        if record.len() < 4 {
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            return Err(FormatError::CsvFieldCount {
                line,
                found: record.len(),
            });
        }

        records.push(RawRecord {
            name: record[0].to_string(),
            email: record[1].to_string(),
            phone: record[2].to_string(),
            joined: record[3].to_string(),
        });
    }

    Ok(records)
}
