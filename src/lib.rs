//! AIWF Client - typed HTTP client for AIWF agent servers
//!
//! This library calls agents exposed by `aiwf serve` over HTTP and ships the
//! command-line example that translates two sample texts.

#![forbid(unsafe_code)]

pub mod cli;
pub mod core;

// Re-export key types for convenience
pub use core::{
    client::AiwfClient,
    config::ClientConfig,
    errors::{ClientError, Result},
    models::{AgentCall, AgentList, HealthStatus, Trace, TranslateRequest, TranslateResponse},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
