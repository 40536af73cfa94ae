//! Editor Launch Forwarding Shim
//!
//! Intercepts file-open requests emitted by a sandboxed host application
//! in the calling convention of one fixed reference editor, and forwards
//! them to the user's configured target editor: directly, through a
//! sandbox-escaping bridge launcher, or as a custom-scheme URI.
//!
//! The pipeline is strictly sequential and stateless per invocation:
//! argument parser → path resolver → target resolver → dispatcher.

// Module declarations
pub mod args;
pub mod config;
pub mod dispatch;
pub mod resolve;

use edshim_core::prelude::*;

// Re-export main entry points
pub use dispatch::DispatchOutcome;

/// Run the full forwarding pipeline for one invocation.
///
/// `args` is the raw argv minus the program name. Configuration is read
/// fresh; nothing is cached across invocations. The target's captured
/// stderr is relayed to the shim's own stderr so the host's log viewer
/// shows target-side failures, and a target exiting nonzero is reported
/// as a dispatch error rather than success.
pub fn run(args: &[String]) -> Result<DispatchOutcome> {
    let parsed = args::parse(args)?;
    let resolved = resolve::resolve_location(&parsed.location, parsed.project_dir.as_deref())?;

    let settings = config::load_settings()?;
    let target = config::resolve_target(&settings)?;

    let outcome = dispatch::dispatch(&resolved, &target, &settings.bridge)?;

    if !outcome.stderr.is_empty() {
        eprint!("{}", outcome.stderr);
    }

    if !outcome.success() {
        return Err(Error::dispatch(format!(
            "target exited with code {}",
            outcome.exit_code
        )));
    }

    info!(
        "dispatched {} to {} target",
        resolved.absolute_path.display(),
        target.command
    );
    Ok(outcome)
}
