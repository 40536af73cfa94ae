//! Dispatching the resolved request to the target editor.
//!
//! Builds the target's expected argument form per transport, spawns it as
//! a child process, and reports the outcome. The child's stdout is
//! discarded (the shim's own stdout must stay clean for the host) and its
//! stderr is captured for the host's log viewer.

use crate::config::{BridgeSettings, EditorTarget, Transport};
use edshim_core::{Error, ResolvedLocation, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// Outcome of a dispatch: the only thing propagated back to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Exit code of the target (or bridge) process
    pub exit_code: i32,
    /// Captured stderr text, relayed to the host's log viewer
    pub stderr: String,
}

impl DispatchOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Command Construction
// ─────────────────────────────────────────────────────────────────────────────

/// Build the full argv for the target, per transport.
///
/// The position suffix uses the source notation `:line[:column]`; targets
/// expecting a different notation wrap the call in their own script. When
/// the target does not support positions the suffix is stripped here, so
/// user scripts never have to understand it.
pub fn build_command(
    location: &ResolvedLocation,
    target: &EditorTarget,
    bridge: &BridgeSettings,
) -> Vec<String> {
    let file_arg = if target.supports_position {
        format!("{}{}", location.path().display(), location.position_suffix())
    } else {
        location.path().display().to_string()
    };

    match target.transport {
        Transport::Direct => vec![target.command.clone(), file_arg],

        Transport::SandboxEscape => {
            let mut argv = bridge.command.clone();
            argv.push(target.command.clone());
            argv.push(file_arg);
            argv
        }

        Transport::UriScheme => {
            vec![bridge.uri_opener.clone(), build_uri(location, target, bridge)]
        }
    }
}

/// Characters percent-encoded in the URI path. `/` and `:` stay literal
/// so the path and position suffix remain readable to the handler.
const URI_PATH_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'%')
    .add(b'{')
    .add(b'}');

/// Build the `<scheme>://file<path>[:line[:col]]` URI for the uri-scheme
/// transport (the reference editor's own handler form).
fn build_uri(location: &ResolvedLocation, target: &EditorTarget, bridge: &BridgeSettings) -> String {
    let path = location.path().display().to_string();
    let encoded = utf8_percent_encode(&path, URI_PATH_SET);

    let suffix = if target.supports_position {
        location.position_suffix()
    } else {
        String::new()
    };

    format!("{}://file{}{}", bridge.uri_scheme, encoded, suffix)
}

// ─────────────────────────────────────────────────────────────────────────────
// Execution
// ─────────────────────────────────────────────────────────────────────────────

/// Invoke the target and wait for it.
///
/// No artificial timeout is applied: opening an editor is expected to be
/// near-instantaneous, or the target is itself a fire-and-forget
/// launcher. A child that cannot be started, or that dies to a signal
/// without an exit code, is a dispatch error; the shim itself never
/// crashes on it.
pub fn dispatch(
    location: &ResolvedLocation,
    target: &EditorTarget,
    bridge: &BridgeSettings,
) -> Result<DispatchOutcome> {
    let argv = build_command(location, target, bridge);
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| Error::dispatch("empty command line"))?;

    info!("dispatching: {:?}", argv);

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| Error::dispatch(format!("failed to start {}: {}", program, e)))?;

    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    let exit_code = output.status.code().ok_or_else(|| {
        Error::dispatch(format!(
            "{} terminated without an exit code: {}",
            program,
            stderr.trim()
        ))
    })?;

    debug!("target exited with code {}", exit_code);

    Ok(DispatchOutcome { exit_code, stderr })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
