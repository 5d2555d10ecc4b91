// src/logger.rs
// =============================================================================
// Sets up tracing for the CLI.
//
// Logs always go to stderr: stdout is reserved for the report so that
// `--json` output and `list` output can be piped straight into other tools.
// RUST_LOG overrides the level picked here.
// =============================================================================

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_cli_logger(verbose: bool) {
    let default_filter = if verbose {
        "index_guardian=debug"
    } else {
        "index_guardian=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
