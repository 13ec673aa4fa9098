//! Bulk translation pipeline: scan a paginated remote collection, translate
//! each item's structured content tree, and write the results back, all under
//! a shared request-cost budget.
//!
//! The pieces compose top-down:
//!
//! - [`BulkTranslator`] orchestrates a whole run in fixed-size batches.
//! - [`CollectionScanner`] enumerates the collection ahead of processing.
//! - [`TreeTranslator`] walks one item's JSON content, consulting the
//!   [`FieldClassifier`] per mapping key.
//! - [`RateBudget`] gates every remote call on a cached cost estimate.

pub mod budget;
pub mod classify;
pub mod orchestrator;
pub mod scanner;
pub mod tree;

pub use budget::{BudgetConfig, BudgetStatus, RateBudget};
pub use classify::{FieldClassifier, KeyPolicy, DEFAULT_ALWAYS_TRANSLATE, DEFAULT_NEVER_TRANSLATE};
pub use orchestrator::{BulkTranslator, RunOptions, DEFAULT_RETRY_INTERVAL};
pub use scanner::{CollectionScanner, ScanOutcome, MAX_PAGES};
pub use tree::TreeTranslator;
