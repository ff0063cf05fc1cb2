//! Tracing setup for the `expense` binary
//!
//! Library code only emits events; installing a subscriber is left to the
//! binary so embedding front ends keep control of their own output.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_DIRECTIVE: &str = "expense_tracker=warn";

/// Installs the global fmt subscriber once. Later calls are no-ops.
///
/// Output goes to stderr so that command output on stdout stays clean.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        // Another subscriber may already be installed by an embedding host.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
    }

    #[test]
    fn default_directive_parses() {
        let parsed: Result<tracing_subscriber::filter::Directive, _> = DEFAULT_DIRECTIVE.parse();
        assert!(parsed.is_ok());
    }
}
