use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global tracing subscriber. RUST_LOG takes precedence over the
/// configured default level. Safe to call more than once; later calls are
/// no-ops.
pub fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_tracing("debug");
        init_tracing("info");
    }
}
