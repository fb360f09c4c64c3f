//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use serde::Deserialize;
use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Human-readable output for development
    #[default]
    Development,
    /// JSON structured output for production
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Later calls are ignored. Output goes to stderr so command output on stdout
/// stays machine-readable. `RUST_LOG` overrides the profile's default filter.
///
/// - **Development**: human-readable, `curricula=debug`
/// - **Production**: JSON lines, `curricula=info`
/// - **Test**: bare registry; use [`init_test_capture`](super::init_test_capture)
///
/// # Example
///
/// ```
/// use curricula_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter_or(DEVELOPMENT_FILTER))
            .init(),
        Profile::Production => tracing_subscriber::fmt()
            .json()
            .with_writer(std::io::stderr)
            .with_env_filter(filter_or(PRODUCTION_FILTER))
            .init(),
        Profile::Test => tracing_subscriber::registry().init(),
    });
}

const DEVELOPMENT_FILTER: &str = "curricula=debug";
const PRODUCTION_FILTER: &str = "curricula=info";

/// `RUST_LOG` if set and parseable, else `default`
fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}
