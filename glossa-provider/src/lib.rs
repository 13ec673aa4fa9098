//! # glossa-provider
//!
//! Translation backends for Glossa (Google, DeepL, Azure, Yandex, MyMemory).
//!
//! ## Overview
//!
//! Each backend implements [`glossa_core::TranslationProvider`] over its
//! vendor HTTP API. [`ProviderChain`] composes them in priority order with
//! fall-through on failure and a deterministic `"[<LANG>] <text>"` terminal
//! fallback, so single-string translation never fails outright.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use glossa_provider::{DeepL, DeepLConfig, MyMemory, ProviderChain};
//!
//! # fn main() -> glossa_core::Result<()> {
//! let chain = ProviderChain::new(vec![
//!     Arc::new(DeepL::new(DeepLConfig::new(std::env::var("DEEPL_API_KEY").unwrap()))?),
//!     Arc::new(MyMemory::new()?),
//! ])?;
//! # Ok(())
//! # }
//! ```

pub mod azure;
pub mod chain;
pub mod deepl;
pub mod google;
pub mod mock;
pub mod mymemory;
pub mod yandex;

pub use azure::{AzureConfig, AzureTranslate, AZURE_API_BASE, AZURE_DEFAULT_REGION};
pub use chain::{fallback_marker, ProviderChain};
pub use deepl::{DeepL, DeepLConfig, DEEPL_API_BASE};
pub use google::{GoogleTranslate, GoogleTranslateConfig, GOOGLE_TRANSLATE_API_BASE};
pub use mock::MockProvider;
pub use mymemory::{MyMemory, MYMEMORY_API_BASE};
pub use yandex::{YandexConfig, YandexTranslate, YANDEX_API_BASE};
