//! Test utilities shared across the kifu crates.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install a test-friendly tracing subscriber once per test binary.
///
/// Verbosity follows `RUST_LOG` and defaults to `warn`. Output goes through
/// the libtest writer so it only shows for failing tests.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Byte span of the first occurrence of `needle` in `source`.
///
/// Panics if `needle` does not occur; meant for building expected spans in
/// assertions.
pub fn span_of(source: &str, needle: &str) -> std::ops::Range<usize> {
    let start = source
        .find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not found in {source:?}"));
    start..start + needle.len()
}
