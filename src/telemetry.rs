/// Installs the `tracing` subscriber.
///
/// Verbosity comes from `RUST_LOG` (for example `RUST_LOG=storefront_checkout=debug`)
/// and defaults to `warn`. Output goes to stderr; stdout carries command output.
pub fn setup_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    // try_init so that tests and embedders that already installed a subscriber keep theirs
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
