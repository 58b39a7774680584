use tracing_subscriber::EnvFilter;

/// Maps the `-v` count to a filter directive.
pub fn level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Installs a stderr subscriber. Stdout is reserved for the summary line.
///
/// Does nothing if a global subscriber is already set.
pub fn init(verbose: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level(verbose)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
