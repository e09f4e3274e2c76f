//! # Factura Console
//!
//! Entry point for the invoicing demo and the interactive console.
//!
//! ## Usage
//! ```bash
//! # Price the sample invoice (default)
//! cargo run -p factura-console
//!
//! # Menu-driven session
//! cargo run -p factura-console -- --interactive
//!
//! # Sample invoice as a JSON summary
//! cargo run -p factura-console -- --json
//! ```
//!
//! ## Startup Sequence
//! 1. Load configuration from the environment
//! 2. Apply command-line flags
//! 3. Initialize tracing (logging, to stderr)
//! 4. Run demo or interactive mode

mod config;
mod demo;
mod error;
mod output;
mod session;

use std::env;
use std::io;

use factura_core::TaxRegistry;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{ConsoleConfig, Mode, OutputFormat};
use crate::error::ConsoleResult;
use crate::session::Session;

const USAGE: &str = "\
Factura - itemized invoices with per-category tax

Usage: factura [OPTIONS]

Options:
      --demo           Price the sample invoice and exit (default)
  -i, --interactive    Start the interactive menu
      --json           Write invoices as JSON summaries
  -h, --help           Show this help message

Environment:
  FACTURA_MODE     demo | interactive
  FACTURA_OUTPUT   text | json
  FACTURA_LOG      log filter (RUST_LOG takes priority)";

/// What the command line asked for.
#[derive(Debug, PartialEq, Eq)]
enum Startup {
    Run(ConsoleConfig),
    Help,
    UnknownOption(String),
}

/// Loads configuration through `lookup`, then applies command-line flags.
fn startup(
    args: impl IntoIterator<Item = String>,
    lookup: impl Fn(&str) -> Option<String>,
) -> ConsoleResult<Startup> {
    let mut config = ConsoleConfig::from_lookup(lookup)?;

    for arg in args {
        match arg.as_str() {
            "--demo" => config.mode = Mode::Demo,
            "--interactive" | "-i" => config.mode = Mode::Interactive,
            "--json" => config.output = OutputFormat::Json,
            "--help" | "-h" => return Ok(Startup::Help),
            _ => return Ok(Startup::UnknownOption(arg)),
        }
    }

    Ok(Startup::Run(config))
}

fn main() -> ConsoleResult<()> {
    let config = match startup(env::args().skip(1), |key| env::var(key).ok())? {
        Startup::Run(config) => config,
        Startup::Help => {
            println!("{USAGE}");
            return Ok(());
        }
        Startup::UnknownOption(option) => {
            eprintln!("Unknown option: {option}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    init_tracing(&config.log_filter);
    info!(mode = ?config.mode, output = ?config.output, "Configuration loaded");

    let stdout = io::stdout();
    match config.mode {
        Mode::Demo => demo::run_demo(&mut stdout.lock(), config.output)?,
        Mode::Interactive => {
            let registry = TaxRegistry::standard();
            let mut session = Session::new(io::stdin().lock(), stdout.lock(), &registry, config.output);
            session.run()?;
            info!(items = session.invoice().count(), "Interactive session ended");
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages (item appends)
/// - `FACTURA_LOG=factura=trace` - Used when `RUST_LOG` is unset
/// - Default: `warn,factura=info`
///
/// Logs go to stderr so receipts on stdout stay clean.
fn init_tracing(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConsoleError;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|a| a.to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_flags_override_environment() {
        let outcome = startup(args(&["-i", "--json"]), |key: &str| {
            (key == "FACTURA_MODE").then(|| "demo".to_string())
        })
        .unwrap();

        let Startup::Run(config) = outcome else {
            panic!("expected a runnable config, got {outcome:?}");
        };
        assert_eq!(config.mode, Mode::Interactive);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_help_and_unknown_option() {
        assert_eq!(startup(args(&["--help"]), no_env).unwrap(), Startup::Help);
        assert_eq!(
            startup(args(&["--demo", "--verbose"]), no_env).unwrap(),
            Startup::UnknownOption("--verbose".to_string())
        );
    }

    #[test]
    fn test_invalid_environment_is_a_config_error() {
        let err = startup(args(&[]), |key: &str| {
            (key == "FACTURA_OUTPUT").then(|| "xml".to_string())
        })
        .unwrap_err();

        assert!(matches!(err, ConsoleError::Config(_)));
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid value for FACTURA_OUTPUT"
        );
    }
}
