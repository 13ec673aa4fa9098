//! Full enumeration of the paginated remote collection.

use std::sync::Arc;

use glossa_core::{CollectionClient, RemoteItem};

use crate::budget::RateBudget;

/// Hard ceiling on pages walked in one pass. Hitting it ends the scan as a
/// partial result rather than an error.
pub const MAX_PAGES: usize = 500;

/// What one scan pass produced.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub items: Vec<RemoteItem>,
    pub pages_fetched: usize,
    /// False when a page error or the page ceiling ended the scan early.
    /// A partial item set is better than none; callers report it, not fail it.
    pub complete: bool,
}

/// Walks cursor links until the remote signals no further page.
///
/// Cursors are not durable across runs; a scan restarts only from the
/// beginning, and once a `None` cursor is observed the pass is over.
pub struct CollectionScanner {
    client: Arc<dyn CollectionClient>,
    budget: Arc<RateBudget>,
}

impl CollectionScanner {
    pub fn new(client: Arc<dyn CollectionClient>, budget: Arc<RateBudget>) -> Self {
        Self { client, budget }
    }

    /// Materialize the full item set, requesting budget clearance before
    /// every page fetch. `item_limit` is a caller-requested cap and counts
    /// as a complete scan when reached.
    pub async fn scan_all(&self, page_size: u32, item_limit: Option<usize>) -> ScanOutcome {
        let mut items: Vec<RemoteItem> = Vec::new();
        let mut cursor: Option<String> = None;
        let mut pages_fetched = 0usize;

        loop {
            if pages_fetched >= MAX_PAGES {
                glossa_telemetry::warn!(
                    pages = pages_fetched,
                    "Page ceiling reached; reporting partial scan"
                );
                return ScanOutcome { items, pages_fetched, complete: false };
            }

            self.budget.ensure_available().await;

            match self.client.list_page(cursor.as_deref(), page_size).await {
                Ok((page_items, next_cursor)) => {
                    pages_fetched += 1;
                    items.extend(page_items);
                    glossa_telemetry::info!(
                        page = pages_fetched,
                        total = items.len(),
                        "Fetched collection page"
                    );

                    if let Some(limit) = item_limit {
                        if items.len() >= limit {
                            items.truncate(limit);
                            return ScanOutcome { items, pages_fetched, complete: true };
                        }
                    }

                    match next_cursor {
                        Some(next) => cursor = Some(next),
                        None => return ScanOutcome { items, pages_fetched, complete: true },
                    }
                }
                Err(error) => {
                    glossa_telemetry::warn!(
                        page = pages_fetched + 1,
                        error = %error,
                        "Page fetch failed; aborting scan with partial results"
                    );
                    return ScanOutcome { items, pages_fetched, complete: false };
                }
            }
        }
    }
}
