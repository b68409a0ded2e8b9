//! Logging setup for Nacre applications and tests.

/// Installs the global tracing subscriber.
///
/// Call once at startup; panics if a subscriber is already installed.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter("debug,nacre_control=trace")
        .init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_init_installs_global_subscriber() {
        super::init();
    }
}
