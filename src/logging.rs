use tracing_subscriber::EnvFilter;

/// Setup logging of events reported by domain-sd and its test suite.
///
/// Use the RUST_LOG environment variable to override the defaults.
///
/// E.g. To see why names are rejected by the classifier:
///   RUST_LOG=domain_sd::name=TRACE
///
/// Or to enable trace level logging but not for the test suite itself:
///   RUST_LOG=TRACE,classify=OFF
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_thread_ids(true)
        .without_time()
        .try_init()
        .ok();
}
