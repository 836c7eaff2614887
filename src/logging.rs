//! Tracing setup for the binary
//!
//! Logs go to stderr so report output on stdout stays clean. `RUST_LOG`
//! overrides the verbosity flags.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Default filter for a `-v` count
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "buildcost=warn",
        1 => "buildcost=info",
        _ => "buildcost=debug",
    }
}

/// Install the global subscriber; later calls are no-ops
pub fn init(verbosity: u8) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(0), "buildcost=warn");
        assert_eq!(default_directive(1), "buildcost=info");
        assert_eq!(default_directive(4), "buildcost=debug");
    }

    #[test]
    fn test_init_twice() {
        init(0);
        init(2);
    }
}
