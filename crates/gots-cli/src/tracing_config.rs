//! Log output for the `gots` binary.
//!
//! ```bash
//! GOTS_LOG=debug gots generate sdk.json
//! GOTS_LOG="gots_lib::convert=debug" gots generate sdk.json
//! ```
//!
//! `GOTS_LOG` takes precedence over `RUST_LOG`. Without either, warnings and
//! errors are shown. Output always goes to stderr so it never mixes with
//! generated code on stdout.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

fn build_filter() -> EnvFilter {
    let directives = std::env::var("GOTS_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| DEFAULT_FILTER.to_string());
    EnvFilter::builder().parse_lossy(directives)
}

/// Install the global subscriber.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
