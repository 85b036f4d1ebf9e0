//! Tracing/logging setup shared by binaries and tests that drive the stores.

/// Tracing configuration (filters, layers).
pub mod tracing;

/// Initialize process-wide tracing with the default filter (`info`).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
