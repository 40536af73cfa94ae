//! Logging configuration using tracing
//!
//! All diagnostics go to stderr: the host application shows the shim's
//! stderr in its own log viewer, and stdout must stay clean in case the
//! host reads it.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the logging subsystem.
///
/// Log level is controlled by the `EDSHIM_LOG` environment variable.
///
/// # Examples
/// ```bash
/// EDSHIM_LOG=debug edshim /path/to/project -g file.cs:10
/// ```
pub fn init() {
    // Default to info for our own crates, allow override via EDSHIM_LOG
    let env_filter = EnvFilter::try_from_env("EDSHIM_LOG")
        .unwrap_or_else(|_| EnvFilter::new("editor_shim=info,edshim_core=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();
}
