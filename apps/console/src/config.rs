//! Console configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults; command-line flags applied afterwards take priority.
//!
//! | Variable         | Values                  | Default             |
//! |------------------|-------------------------|---------------------|
//! | `FACTURA_MODE`   | `demo`, `interactive`   | `demo`              |
//! | `FACTURA_OUTPUT` | `text`, `json`          | `text`              |
//! | `FACTURA_LOG`    | tracing filter          | `warn,factura=info` |
//!
//! `RUST_LOG`, when set, overrides `FACTURA_LOG`.

use std::str::FromStr;

/// Default log filter when neither `RUST_LOG` nor `FACTURA_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn,factura=info";

/// Which flow the binary runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Prices a fixed sample invoice and exits.
    #[default]
    Demo,
    /// Menu-driven session on stdin/stdout.
    Interactive,
}

impl FromStr for Mode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "demo" => Ok(Mode::Demo),
            "interactive" => Ok(Mode::Interactive),
            _ => Err(()),
        }
    }
}

/// How invoices are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fixed-width text receipt.
    #[default]
    Text,
    /// JSON invoice summary.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(()),
        }
    }
}

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub mode: Mode,
    pub output: OutputFormat,
    /// `FACTURA_LOG` filter; `RUST_LOG` still wins at subscriber init.
    pub log_filter: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            mode: Mode::default(),
            output: OutputFormat::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Load configuration through a variable lookup (`std::env::var` in
    /// the binary).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mode = match lookup("FACTURA_MODE") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidValue("FACTURA_MODE".to_string()))?,
            None => Mode::default(),
        };

        let output = match lookup("FACTURA_OUTPUT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidValue("FACTURA_OUTPUT".to_string()))?,
            None => OutputFormat::default(),
        };

        let log_filter = lookup("FACTURA_LOG")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(ConsoleConfig {
            mode,
            output,
            log_filter,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
