//! # Account Telemetry
//!
//! Logging setup shared by the ERC-1271 account binaries.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use account_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() {
//!     init_logging(&TelemetryConfig::from_env()).expect("Failed to init logging");
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SIGCHECK_SERVICE_NAME` | `sig-check` | Service name attached to the startup event |
//! | `SIGCHECK_LOG_LEVEL` / `RUST_LOG` | `warn` | Log level filter |
//! | `SIGCHECK_JSON_LOGS` | `false` | Emit JSON lines instead of human-readable output |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{build_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter {filter:?}: {reason}")]
    InvalidFilter { filter: String, reason: String },

    #[error("Failed to install log subscriber: {0}")]
    SubscriberInit(String),
}
