//! # glossa-remote
//!
//! Shopify-flavored adapters binding the Glossa core traits to a shop admin
//! API: [`ShopAdminClient`] implements [`glossa_core::CollectionClient`]
//! (cursor-paginated product listing, metafield fetch, translation write-back)
//! and [`GraphqlCostProbe`] implements [`glossa_core::BudgetProbe`].
//!
//! The pipeline itself never sees this crate's wire formats; swap in a
//! different implementation of the core traits to target another remote.

pub mod client;
pub mod config;
pub mod probe;

pub use client::ShopAdminClient;
pub use config::{ShopConfig, DEFAULT_API_VERSION};
pub use probe::{GraphqlCostProbe, DEFAULT_BUDGET_POINTS};
