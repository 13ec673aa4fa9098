//! # glossa-core
//!
//! Core traits and types for the Glossa bulk translation pipeline.
//!
//! ## Overview
//!
//! This crate provides the foundational abstractions the rest of the
//! workspace builds on:
//!
//! - [`CollectionClient`] / [`BudgetProbe`] / [`TranslationProvider`] - the
//!   seams to concrete transports
//! - [`RemoteItem`] / [`TranslatableRecord`] - the remote data model
//! - [`BatchResult`] / [`RunReport`] - per-run accounting
//! - [`GlossaError`] / [`Result`] - unified error handling
//!
//! The content tree being translated is plain [`serde_json::Value`]: string
//! leaves are translatable, arrays and objects recurse, and every other
//! scalar passes through untouched.

pub mod error;
pub mod traits;
pub mod types;

pub use error::{GlossaError, Result};
pub use traits::{BudgetObserver, BudgetProbe, CollectionClient, TranslationProvider};
pub use types::{
    BatchResult, FieldClassification, ItemStatus, RemoteItem, RunReport, TranslatableRecord,
};
