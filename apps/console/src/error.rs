//! # Console Error Types
//!
//! ```text
//! CoreError ───┐
//! ConfigError ─┼──► ConsoleError ──► main() ──► stderr, exit 1
//! io::Error ───┤
//! serde_json ──┘
//! ```
//!
//! Inside an interactive session, core errors are reported to the user and
//! the menu continues; only I/O failures end the session.

use thiserror::Error;

use factura_core::CoreError;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading stdin or writing stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Core(#[from] CoreError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;
