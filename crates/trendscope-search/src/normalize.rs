//! Normalization of provider timeline data into an [`InterestTable`].

use chrono::{DateTime, Timelike, Utc};
use trendscope_core::Tabular;

use crate::error::ProviderFailure;
use crate::types::TimelinePoint;

/// Highest interest score the provider reports.
pub const MAX_INTEREST: u8 = 100;

/// Column name of the partial-period flag in CSV exports.
pub const PARTIAL_COLUMN: &str = "isPartial";

/// One time bucket: a score per keyword plus the partial-period flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterestRow {
    pub timestamp: DateTime<Utc>,
    /// Scores in `0..=100`, in the table's keyword order.
    pub values: Vec<u8>,
    /// The bucket is still open and its data incomplete.
    pub is_partial: bool,
}

/// Interest-over-time for a set of keywords.
///
/// Rows are strictly ascending by timestamp. Every row carries exactly one
/// value per keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterestTable {
    keywords: Vec<String>,
    rows: Vec<InterestRow>,
}

impl InterestTable {
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    #[must_use]
    pub fn rows(&self) -> &[InterestRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The first `n` rows, for raw-data previews.
    #[must_use]
    pub fn head(&self, n: usize) -> &[InterestRow] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// All scores for one keyword, oldest first.
    #[must_use]
    pub fn column(&self, keyword: &str) -> Option<Vec<u8>> {
        let idx = self.keywords.iter().position(|k| k == keyword)?;
        Some(self.rows.iter().map(|row| row.values[idx]).collect())
    }

    /// View of the table without the partial-period flag column.
    #[must_use]
    pub fn series(&self) -> InterestSeries<'_> {
        InterestSeries { table: self }
    }

    /// Timestamp format for display and export: date-only when every bucket
    /// starts at midnight UTC (daily or coarser data).
    fn timestamp_format(&self) -> &'static str {
        let all_midnight = self
            .rows
            .iter()
            .all(|row| row.timestamp.num_seconds_from_midnight() == 0);
        if all_midnight {
            "%Y-%m-%d"
        } else {
            "%Y-%m-%d %H:%M:%S"
        }
    }

    fn header_cells(&self) -> Vec<String> {
        let mut headers = Vec::with_capacity(self.keywords.len() + 2);
        headers.push("date".to_string());
        headers.extend(self.keywords.iter().cloned());
        headers
    }

    fn row_cells(&self, row: &InterestRow, format: &str) -> Vec<String> {
        let mut cells = Vec::with_capacity(row.values.len() + 2);
        cells.push(row.timestamp.format(format).to_string());
        cells.extend(row.values.iter().map(ToString::to_string));
        cells
    }
}

impl Tabular for InterestTable {
    fn headers(&self) -> Vec<String> {
        let mut headers = self.header_cells();
        headers.push(PARTIAL_COLUMN.to_string());
        headers
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let format = self.timestamp_format();
        self.rows
            .iter()
            .map(|row| {
                let mut cells = self.row_cells(row, format);
                cells.push(row.is_partial.to_string());
                cells
            })
            .collect()
    }
}

/// Chart-ready view of an [`InterestTable`]: the same rows, minus the
/// partial-period flag.
#[derive(Debug, Clone, Copy)]
pub struct InterestSeries<'a> {
    table: &'a InterestTable,
}

impl Tabular for InterestSeries<'_> {
    fn headers(&self) -> Vec<String> {
        self.table.header_cells()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let format = self.table.timestamp_format();
        self.table
            .rows
            .iter()
            .map(|row| self.table.row_cells(row, format))
            .collect()
    }
}

/// Converts raw timeline points into an [`InterestTable`] for `keywords`.
///
/// Points are sorted by timestamp; a repeated timestamp keeps its first
/// occurrence.
///
/// # Errors
///
/// Returns [`ProviderFailure::MalformedTimeline`] if a point's `time` is not
/// Unix seconds, its value count differs from the keyword count, or a score
/// exceeds [`MAX_INTEREST`].
pub(crate) fn normalize_timeline(
    keywords: &[String],
    points: Vec<TimelinePoint>,
) -> Result<InterestTable, ProviderFailure> {
    let mut rows = points
        .into_iter()
        .map(|point| to_row(keywords.len(), point))
        .collect::<Result<Vec<_>, _>>()?;

    rows.sort_by_key(|row| row.timestamp);
    let before = rows.len();
    rows.dedup_by_key(|row| row.timestamp);
    if rows.len() != before {
        tracing::debug!(
            dropped = before - rows.len(),
            "dropped duplicate timeline buckets"
        );
    }

    Ok(InterestTable {
        keywords: keywords.to_vec(),
        rows,
    })
}

fn to_row(expected: usize, point: TimelinePoint) -> Result<InterestRow, ProviderFailure> {
    let secs = point.time.parse::<i64>().map_err(|e| {
        ProviderFailure::MalformedTimeline(format!("time '{}' is not Unix seconds: {e}", point.time))
    })?;
    let timestamp = DateTime::from_timestamp(secs, 0).ok_or_else(|| {
        ProviderFailure::MalformedTimeline(format!("time {secs} is out of range"))
    })?;

    if point.value.len() != expected {
        return Err(ProviderFailure::MalformedTimeline(format!(
            "bucket {} has {} values for {expected} keywords",
            point.formatted_time.as_deref().unwrap_or(&point.time),
            point.value.len()
        )));
    }
    if let Some(score) = point.value.iter().find(|v| **v > MAX_INTEREST) {
        return Err(ProviderFailure::MalformedTimeline(format!(
            "score {score} exceeds {MAX_INTEREST}"
        )));
    }

    Ok(InterestRow {
        timestamp,
        values: point.value,
        is_partial: point.is_partial,
    })
}
