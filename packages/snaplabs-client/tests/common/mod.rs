// Common test utilities

pub mod mock_api;

pub use mock_api::*;

/// Initialize tracing to respect the RUST_LOG environment variable.
/// Uses try_init() to avoid panicking if already initialized.
/// Run tests with: RUST_LOG=debug cargo test -- --nocapture
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
