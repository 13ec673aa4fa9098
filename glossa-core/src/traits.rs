//! Seams between the pipeline and concrete transports.
//!
//! The pipeline only ever talks to the remote collection, the budget probe and
//! the translation backends through these traits, so wire formats stay
//! interchangeable.

use crate::error::Result;
use crate::types::{RemoteItem, TranslatableRecord};
use async_trait::async_trait;

/// Access to the paginated remote collection and its translatable records.
#[async_trait]
pub trait CollectionClient: Send + Sync {
    /// Fetch one page of items. A `None` returned cursor means the listing is
    /// exhausted; a scan must not resume from a stale cursor afterwards.
    async fn list_page(
        &self,
        cursor: Option<&str>,
        page_size: u32,
    ) -> Result<(Vec<RemoteItem>, Option<String>)>;

    /// Fetch the translatable record for one item, if present.
    async fn get_record(
        &self,
        item_id: &str,
        namespace: &str,
        key: &str,
    ) -> Result<Option<TranslatableRecord>>;

    /// Persist translated content for a record's field in the given locale.
    ///
    /// Throttling must surface as [`GlossaError::Throttled`] so the caller can
    /// honor a server-suggested retry interval. The write is a pure overwrite:
    /// re-running with identical content is a remote no-op.
    ///
    /// [`GlossaError::Throttled`]: crate::GlossaError::Throttled
    async fn write_record(&self, field_id: &str, locale: &str, content: &str) -> Result<()>;
}

/// Lightweight probe for the remote account's remaining request budget.
#[async_trait]
pub trait BudgetProbe: Send + Sync {
    /// Best-effort check of currently available request-cost points.
    async fn probe_available(&self) -> Result<u32>;
}

/// Sink for request-cost metadata observed on completed remote calls.
///
/// Remote responses often carry "currently available" budget as a side
/// effect; feeding it back amortizes the cost of dedicated probes.
pub trait BudgetObserver: Send + Sync {
    fn observe(&self, points_remaining: u32);
}

/// One translation backend.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Translate a single string. Any failure is fair game for the caller to
    /// fall through to the next backend.
    async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String>;
}
