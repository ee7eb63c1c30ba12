use tracing_subscriber::{EnvFilter, fmt};

/// Initialize diagnostic logging.
///
/// The level is controlled through `RUST_LOG`, default `warn` so events do not
/// interleave with the interactive menus. Events are written to stderr.
///
/// Examples:
/// - RUST_LOG=debug verifyx
/// - RUST_LOG=verifyx=trace verifyx
pub fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    tracing::debug!("Logger initialized");
}
