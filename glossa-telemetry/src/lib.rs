//! # glossa-telemetry
//!
//! Structured logging for Glossa using `tracing`.
//!
//! ## Usage
//!
//! ```rust
//! use glossa_telemetry::{init_telemetry, info};
//!
//! init_telemetry("my-service");
//! info!("service started");
//! ```

pub mod init;

// Re-export tracing macros for convenience
pub use tracing::{debug, error, info, instrument, trace, warn, Span};

pub use init::init_telemetry;
