pub mod builders;

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Install a per-test tracing subscriber once per test binary.
///
/// Output goes through the test writer, so it is only shown for failing
/// tests (or with `--nocapture`). `RUST_LOG` overrides the default of
/// debug output for this crate and warnings elsewhere.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("warn,layerdag=debug"));

        // Another harness may already own the global subscriber.
        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(false)
            .try_init();
    });
}

/// Parse a `(from, to)` edge list written as `"a->b b->c"`.
pub fn parse_edge_pairs(list: &str) -> Vec<(String, String)> {
    list.split_whitespace()
        .filter_map(|pair| pair.split_once("->"))
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect()
}
