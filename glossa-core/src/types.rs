//! Domain types shared across the pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the paginated remote collection. Read-only to the pipeline;
/// identity is the opaque `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteItem {
    pub id: String,
    pub title: String,
    pub handle: String,
}

/// The translatable field attached to a [`RemoteItem`], if any.
///
/// `raw_value` is the JSON-encoded content exactly as stored remotely; it is
/// parsed into a content tree before translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatableRecord {
    pub owner_item_id: String,
    pub field_id: String,
    pub namespace: String,
    pub key: String,
    pub raw_value: String,
}

/// Per-key decision made by the field classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldClassification {
    /// Copy the entry unchanged, at any depth.
    Skip,
    /// Translate the value, keep the original key (stable for round-trip matching).
    TranslateValueOnly,
    /// Translate both, inserting the value under the translated key.
    TranslateKeyAndValue,
}

/// Outcome of processing one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Success,
    Skipped,
    Error,
}

/// Per-item record accumulated into a [`RunReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResult {
    pub item_id: String,
    pub status: ItemStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl BatchResult {
    pub fn success(item_id: impl Into<String>) -> Self {
        Self { item_id: item_id.into(), status: ItemStatus::Success, reason: None }
    }

    pub fn skipped(item_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { item_id: item_id.into(), status: ItemStatus::Skipped, reason: Some(reason.into()) }
    }

    pub fn error(item_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { item_id: item_id.into(), status: ItemStatus::Error, reason: Some(reason.into()) }
    }
}

/// Aggregate outcome of a bulk translation run.
///
/// Created at run start, appended to until the run settles, then immutable.
/// `details` preserves completion order, not submission order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub total_items: usize,
    pub processed: usize,
    pub succeeded: usize,
    pub errored: usize,
    pub skipped: usize,
    /// False when the scan ended early (page error or safety ceiling).
    pub complete_scan: bool,
    /// True when the run was cancelled before all batches ran.
    pub cancelled: bool,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub details: Vec<BatchResult>,
}

impl RunReport {
    pub fn new(total_items: usize, complete_scan: bool) -> Self {
        Self {
            total_items,
            processed: 0,
            succeeded: 0,
            errored: 0,
            skipped: 0,
            complete_scan,
            cancelled: false,
            started_at: Utc::now(),
            finished_at: None,
            details: Vec::with_capacity(total_items),
        }
    }

    /// Append one item outcome and bump the matching counter.
    pub fn record(&mut self, result: BatchResult) {
        self.processed += 1;
        match result.status {
            ItemStatus::Success => self.succeeded += 1,
            ItemStatus::Skipped => self.skipped += 1,
            ItemStatus::Error => self.errored += 1,
        }
        self.details.push(result);
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counters_follow_details() {
        let mut report = RunReport::new(3, true);
        report.record(BatchResult::success("1"));
        report.record(BatchResult::skipped("2", "no record"));
        report.record(BatchResult::error("3", "write failed"));
        report.finish();

        assert_eq!(report.processed, 3);
        assert_eq!(report.succeeded, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.errored, 1);
        assert_eq!(report.details.len(), 3);
        assert!(report.finished_at.is_some());
    }

    #[test]
    fn test_batch_result_constructors() {
        let ok = BatchResult::success("42");
        assert_eq!(ok.status, ItemStatus::Success);
        assert!(ok.reason.is_none());

        let err = BatchResult::error("42", "invalid content");
        assert_eq!(err.reason.as_deref(), Some("invalid content"));
    }
}
