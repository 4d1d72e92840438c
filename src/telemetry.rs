use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Events go to stderr so stdout stays
/// reserved for lookup output. `RUST_LOG` overrides the `warn` default.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
