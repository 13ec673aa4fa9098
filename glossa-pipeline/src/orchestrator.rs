//! Batched bulk translation with per-item failure isolation.

use std::sync::Arc;
use std::time::Duration;

use futures::stream::{FuturesUnordered, StreamExt};
use glossa_core::{BatchResult, CollectionClient, GlossaError, RemoteItem, Result, RunReport};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::budget::RateBudget;
use crate::scanner::CollectionScanner;
use crate::tree::TreeTranslator;

/// Wait before the second write attempt when the remote throttles without
/// suggesting an interval.
pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_millis(1000);

/// Per-run settings.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub source_lang: String,
    pub target_lang: String,
    /// Locale the translation is registered under remotely; usually the
    /// target language, but remotes may use richer tags ("fr-CA").
    pub target_locale: String,
    /// Namespace/key addressing the translatable record on each item.
    pub namespace: String,
    pub key: String,
    /// Items processed concurrently; also the peak in-flight item count.
    pub batch_size: usize,
    pub page_size: u32,
    /// Optional safety cap on the number of items scanned.
    pub item_limit: Option<usize>,
    /// Fixed courtesy delay between batches, independent of budget tracking.
    pub inter_batch_delay: Duration,
}

impl RunOptions {
    pub fn new(source_lang: impl Into<String>, target_lang: impl Into<String>) -> Self {
        let target_lang = target_lang.into();
        Self {
            source_lang: source_lang.into(),
            target_locale: target_lang.clone(),
            target_lang,
            namespace: "custom".to_string(),
            key: "specification".to_string(),
            batch_size: 5,
            page_size: 250,
            item_limit: None,
            inter_batch_delay: Duration::from_millis(2000),
        }
    }

    #[must_use]
    pub fn with_target_locale(mut self, locale: impl Into<String>) -> Self {
        self.target_locale = locale.into();
        self
    }

    #[must_use]
    pub fn with_record_address(
        mut self,
        namespace: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        self.namespace = namespace.into();
        self.key = key.into();
        self
    }

    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    #[must_use]
    pub fn with_item_limit(mut self, item_limit: usize) -> Self {
        self.item_limit = Some(item_limit);
        self
    }

    #[must_use]
    pub fn with_inter_batch_delay(mut self, delay: Duration) -> Self {
        self.inter_batch_delay = delay;
        self
    }
}

/// Drives scanner, tree translator and write-back over the whole collection.
///
/// Items run in fixed-size batches; a batch settles fully (success or
/// failure) before the next one starts, bounding peak concurrency at the
/// batch size. Item outcomes land in the report in completion order. No item
/// failure ever aborts the run; the report always comes back.
pub struct BulkTranslator {
    client: Arc<dyn CollectionClient>,
    budget: Arc<RateBudget>,
    translator: Arc<TreeTranslator>,
}

impl BulkTranslator {
    pub fn new(
        client: Arc<dyn CollectionClient>,
        budget: Arc<RateBudget>,
        translator: Arc<TreeTranslator>,
    ) -> Self {
        Self { client, budget, translator }
    }

    /// Run one bulk translation pass.
    ///
    /// Cancellation is honored between batches: in-flight items run to
    /// completion, no further batch starts, and the report comes back marked
    /// cancelled.
    pub async fn run(&self, options: &RunOptions, cancel: CancellationToken) -> RunReport {
        let scanner = CollectionScanner::new(self.client.clone(), self.budget.clone());
        let scan = scanner.scan_all(options.page_size, options.item_limit).await;

        glossa_telemetry::info!(
            total = scan.items.len(),
            pages = scan.pages_fetched,
            complete = scan.complete,
            "Collection scan finished; starting translation"
        );

        let mut report = RunReport::new(scan.items.len(), scan.complete);
        let batch_size = options.batch_size.max(1);

        for (index, batch) in scan.items.chunks(batch_size).enumerate() {
            if cancel.is_cancelled() {
                glossa_telemetry::warn!(
                    processed = report.processed,
                    "Run cancelled; skipping remaining batches"
                );
                report.cancelled = true;
                break;
            }

            // The delay between batches is the widest cancellation window;
            // race the sleep against the token so a cancel landing here never
            // starts another batch.
            if index > 0 {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        glossa_telemetry::warn!(
                            processed = report.processed,
                            "Run cancelled during batch delay; skipping remaining batches"
                        );
                        report.cancelled = true;
                        break;
                    }
                    _ = tokio::time::sleep(options.inter_batch_delay) => {}
                }
            }

            let mut in_flight: FuturesUnordered<_> =
                batch.iter().map(|item| self.process_item(item, options)).collect();
            while let Some(result) = in_flight.next().await {
                report.record(result);
            }

            glossa_telemetry::info!(
                batch = index + 1,
                processed = report.processed,
                succeeded = report.succeeded,
                errored = report.errored,
                "Batch settled"
            );
        }

        report.finish();
        report
    }

    async fn process_item(&self, item: &RemoteItem, options: &RunOptions) -> BatchResult {
        self.budget.ensure_available().await;

        let record = match self
            .client
            .get_record(&item.id, &options.namespace, &options.key)
            .await
        {
            Ok(Some(record)) => record,
            Ok(None) => {
                glossa_telemetry::debug!(item = %item.id, title = %item.title, "No translatable record; skipping");
                return BatchResult::skipped(&item.id, "no translatable record");
            }
            Err(error) => {
                return BatchResult::error(&item.id, format!("record fetch failed: {error}"));
            }
        };

        // Malformed stored JSON is not transient; record the error and move on.
        let tree: Value = match serde_json::from_str(&record.raw_value) {
            Ok(tree) => tree,
            Err(_) => return BatchResult::error(&item.id, "invalid content"),
        };

        let translated = self
            .translator
            .translate(&tree, &options.source_lang, &options.target_lang)
            .await;

        let content = match serde_json::to_string(&translated) {
            Ok(content) => content,
            Err(error) => {
                return BatchResult::error(&item.id, format!("serialization failed: {error}"));
            }
        };

        match self.write_with_retry(&record.field_id, &options.target_locale, &content).await {
            Ok(()) => {
                glossa_telemetry::info!(item = %item.id, title = %item.title, "Translated");
                BatchResult::success(&item.id)
            }
            Err(error) => BatchResult::error(&item.id, format!("write-back failed: {error}")),
        }
    }

    /// Bounded write-back state machine:
    /// attempt 1 → on throttle → wait → attempt 2 → terminal.
    ///
    /// Everything but a throttle is assumed non-transient (bad permissions,
    /// malformed payload, stale digest) and surfaces immediately.
    async fn write_with_retry(&self, field_id: &str, locale: &str, content: &str) -> Result<()> {
        match self.client.write_record(field_id, locale, content).await {
            Err(GlossaError::Throttled { retry_after }) => {
                let wait = retry_after.unwrap_or(DEFAULT_RETRY_INTERVAL);
                glossa_telemetry::warn!(
                    field_id,
                    wait_ms = wait.as_millis() as u64,
                    "Write-back throttled; retrying once"
                );
                tokio::time::sleep(wait).await;
                self.client.write_record(field_id, locale, content).await
            }
            other => other,
        }
    }
}
