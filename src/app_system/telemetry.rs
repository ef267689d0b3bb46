/// Configure tracing once for the whole process.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` applies. Output goes to
/// stderr so it never mixes with the form output on stdout.
///
/// ```bash
/// RUST_LOG=debug cargo run                          # everything
/// RUST_LOG=agri_market::service=debug cargo run    # just the service
/// ```
pub fn setup_tracing(default_filter: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
