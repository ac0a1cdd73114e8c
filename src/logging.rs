// 📝 Diagnostics
// tracing subscriber on stderr, filtered by RUST_LOG

use tracing_subscriber::EnvFilter;

/// Filter used when RUST_LOG is unset or invalid
pub const DEFAULT_FILTER: &str = "warn";

/// Install the process-wide subscriber.
///
/// Logs go to stderr so they never interleave with menu prompts on stdout.
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init();
        init();
        tracing::info!("logging initialized");
    }
}
