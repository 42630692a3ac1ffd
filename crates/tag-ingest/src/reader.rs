//! CSV reading into row records.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use tag_model::RowRecord;

use crate::columns::ColumnLayout;
use crate::error::{IngestError, Result};

/// Template offered to users who need a starting point.
pub const SAMPLE_CSV: &str = "Style Number,Size,Color,(Do not touch) Order Id\n\
                              QRV1,M,Red,ORD1001\n";

/// Parse a cutting list from any byte stream.
///
/// The first line is the header. Every non-blank data line yields exactly one
/// record, in stream order. Any structural error aborts the whole read.
pub fn ingest_reader<R: Read>(input: R) -> Result<Vec<RowRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let layout = ColumnLayout::from_headers(reader.headers()?);
    layout.warn_missing();

    let mut rows = Vec::new();
    let mut record = StringRecord::new();
    while reader.read_record(&mut record)? {
        if is_blank(&record) {
            continue;
        }
        rows.push(layout.extract(&record));
    }

    debug!(row_count = rows.len(), "cutting list parsed");
    Ok(rows)
}

/// Parse the cutting list stored at `path`.
pub fn ingest_path(path: &Path) -> Result<Vec<RowRecord>> {
    let start = Instant::now();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let rows = ingest_reader(file)?;
    info!(
        path = %path.display(),
        row_count = rows.len(),
        duration_ms = start.elapsed().as_millis(),
        "cutting list ingested"
    );
    Ok(rows)
}

/// A line with nothing on it parses as a single empty field.
fn is_blank(record: &StringRecord) -> bool {
    record.len() == 1 && record.get(0).is_some_and(str::is_empty)
}
