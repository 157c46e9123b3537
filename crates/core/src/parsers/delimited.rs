//! Comma-separated scheduler output with `PID`, `Start` and `End` columns.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::{IntervalRecord, RejectedRecord, Timeline};

/// Columns every input table must carry. Others are ignored.
pub const REQUIRED_COLUMNS: [&str; 3] = ["PID", "Start", "End"];

#[derive(Debug, Error)]
pub enum InputError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("missing column `{0}` in header")]
    MissingColumn(&'static str),
    #[error("malformed input: {0}")]
    Malformed(#[from] csv::Error),
}

/// Read a timeline from a file on disk.
///
/// An input with a header but no data rows is not an error here; the
/// caller decides what an empty timeline means.
pub fn read_timeline_file(path: &Path) -> Result<(Timeline, Vec<RejectedRecord>), InputError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => InputError::NotFound {
            path: path.to_path_buf(),
        },
        _ => InputError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    read_timeline(file)
}

/// Read a timeline from any byte source.
///
/// Headers and fields are trimmed. A row that does not deserialize into
/// an [`IntervalRecord`] fails the whole input; a row that deserializes
/// but is invalid (e.g. ends before it starts) is skipped.
pub fn read_timeline<R: Read>(reader: R) -> Result<(Timeline, Vec<RejectedRecord>), InputError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?;
    if let Some(missing) = REQUIRED_COLUMNS
        .into_iter()
        .find(|column| !headers.iter().any(|h| h == *column))
    {
        return Err(InputError::MissingColumn(missing));
    }

    let records = rdr
        .deserialize::<IntervalRecord>()
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(rows = records.len(), "read interval records");

    Ok(Timeline::from_records(records))
}
