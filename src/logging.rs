//! Logging infrastructure using tracing + tracing-subscriber
//!
//! The generator's product output (progress lines, summary) goes to stdout;
//! diagnostics stay on stderr so the two streams never interleave.

use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Map the CLI verbosity flags onto a log level.
pub fn level_from_flags(verbose: u8, quiet: bool) -> Level {
    if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

/// Initialize the console subscriber.
///
/// `RUST_LOG` takes precedence over the computed level, which allows
/// per-module filtering without extra flags.
pub fn init(level: Level) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| Error::Internal(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_flags() {
        assert_eq!(level_from_flags(0, false), Level::INFO);
        assert_eq!(level_from_flags(1, false), Level::DEBUG);
        assert_eq!(level_from_flags(2, false), Level::TRACE);
    }

    #[test]
    fn test_quiet_wins_over_verbose() {
        assert_eq!(level_from_flags(2, true), Level::ERROR);
    }
}
