use thiserror::Error;

use super::interval::IntervalRecord;

/// Why a record was left out of the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("end time is before start time")]
    EndBeforeStart,
    #[error("start or end time is not a finite number")]
    NonFinite,
}

/// A record that failed validation, with its 1-based data row number.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRecord {
    pub row: usize,
    pub record: IntervalRecord,
    pub error: RecordError,
}

/// Validated interval records in input order.
///
/// Input order is the draw order and is never changed. Every record
/// satisfies `start <= end` with both ends finite.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    records: Vec<IntervalRecord>,
}

impl Timeline {
    /// Validate `records`, keeping the good ones in order.
    ///
    /// Invalid records are skipped and returned alongside the timeline;
    /// a bad row never fails the whole input.
    pub fn from_records(
        records: impl IntoIterator<Item = IntervalRecord>,
    ) -> (Self, Vec<RejectedRecord>) {
        let mut kept = Vec::new();
        let mut rejected = Vec::new();

        for (i, record) in records.into_iter().enumerate() {
            match validate(&record) {
                Ok(()) => kept.push(record),
                Err(error) => {
                    let row = i + 1;
                    tracing::warn!(
                        row,
                        pid = record.identifier,
                        start = record.start,
                        end = record.end,
                        "skipping interval record: {error}"
                    );
                    rejected.push(RejectedRecord { row, record, error });
                }
            }
        }

        (Self { records: kept }, rejected)
    }

    pub fn records(&self) -> &[IntervalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Latest end time, or `None` for an empty timeline.
    pub fn max_end(&self) -> Option<f64> {
        self.records.iter().map(|r| r.end).reduce(f64::max)
    }
}

fn validate(record: &IntervalRecord) -> Result<(), RecordError> {
    if !record.start.is_finite() || !record.end.is_finite() {
        return Err(RecordError::NonFinite);
    }
    if record.end < record.start {
        return Err(RecordError::EndBeforeStart);
    }
    Ok(())
}
