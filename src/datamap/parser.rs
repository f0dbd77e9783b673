use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::datamap::DatamapLine;
use crate::error::{Error, Result};

/// Parse datamap lines from a header-less CSV stream.
///
/// Each record must have exactly 4 fields in the order
/// `key, sheet, datatype, cellref`. A record with any other field count
/// aborts the whole parse; no partial line list is returned. Field values
/// are taken verbatim, including cell references that would fail the A1
/// check elsewhere.
pub fn parse_datamap_lines<R: Read>(reader: R) -> Result<Vec<DatamapLine>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut lines = Vec::new();

    for (idx, record) in csv_reader.records().enumerate() {
        let record = record?;
        if record.len() != 4 {
            return Err(Error::MalformedRecord {
                row: idx + 1,
                found: record.len(),
            });
        }

        lines.push(DatamapLine {
            key: record[0].to_string(),
            sheet: record[1].to_string(),
            data_type: record[2].to_string(),
            cell_ref: record[3].to_string(),
        });
    }

    debug!(count = lines.len(), "parsed datamap lines");
    Ok(lines)
}

/// Parse datamap lines from a CSV file on disk.
pub fn parse_datamap_file<P: AsRef<Path>>(path: P) -> Result<Vec<DatamapLine>> {
    let file = File::open(path.as_ref())?;
    parse_datamap_lines(file)
}
