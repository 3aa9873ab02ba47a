//! Logging bootstrap shared by unit and integration tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: OnceCell<()> = OnceCell::new();

/// Install the test subscriber once per process.
///
/// The filter comes from `TEST_LOG`, falling back to `RUST_LOG`, falling
/// back to `warn`. Output goes through the test writer so cargo captures
/// it per test, and timestamps are dropped so log output stays stable.
/// Safe to call from any number of test binaries or `ctor` hooks; later
/// calls are no-ops.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = ["TEST_LOG", "RUST_LOG"]
            .iter()
            .find_map(|var| std::env::var(var).ok())
            .map(EnvFilter::new)
            .unwrap_or_else(|| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
