//! Logging bootstrap: the engine emits diagnostics through the `log` facade;
//! the CLI wires them to stderr once per process. User-facing feedback stays
//! on `ui::messages`.

use flexi_logger::{Logger, LoggerHandle};
use std::sync::OnceLock;

static LOGGER: OnceLock<Option<LoggerHandle>> = OnceLock::new();

/// Initialize stderr logging, honoring RUST_LOG. Idempotent, and a failed
/// start (e.g. a second logger in the same process) is not fatal: the CLI
/// works without diagnostics.
pub fn init() {
    LOGGER.get_or_init(|| {
        Logger::try_with_env_or_str("warn")
            .ok()
            .and_then(|logger| logger.log_to_stderr().start().ok())
    });
}
