//! Configuration types for the target editor and its transport

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Transport
// ─────────────────────────────────────────────────────────────────────────────

/// How the shim reaches the target editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Transport {
    /// Target runs in the same sandbox as the shim; direct execution
    #[default]
    Direct,
    /// Target runs on the host outside the sandbox; invoked through the
    /// bridge launcher (e.g. `flatpak-spawn --host`)
    SandboxEscape,
    /// Target is addressed by a custom URI scheme; the shim builds the
    /// URI and hands it to a generic opener
    UriScheme,
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings
// ─────────────────────────────────────────────────────────────────────────────

/// Target editor settings (`[target]` section).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TargetSettings {
    /// Editor command: an absolute path to a script/executable, or a
    /// bare name looked up on PATH for the direct transport.
    #[serde(default)]
    pub command: String,

    /// Whether the target understands a `:line:column` suffix. When
    /// false the shim passes the bare path.
    #[serde(default = "default_true")]
    pub supports_position: bool,

    /// Transport used to reach the target.
    #[serde(default)]
    pub transport: Transport,
}

impl Default for TargetSettings {
    fn default() -> Self {
        Self {
            command: String::new(),
            supports_position: true,
            transport: Transport::Direct,
        }
    }
}

/// Bridge settings (`[bridge]` section): how to cross the sandbox
/// boundary for the non-direct transports.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BridgeSettings {
    /// Launcher prefix for the sandbox-escape transport.
    #[serde(default = "default_bridge_command")]
    pub command: Vec<String>,

    /// Opener handed the constructed URI for the uri-scheme transport.
    #[serde(default = "default_uri_opener")]
    pub uri_opener: String,

    /// Scheme for the uri-scheme transport (`<scheme>://file<path>`).
    #[serde(default = "default_uri_scheme")]
    pub uri_scheme: String,
}

impl Default for BridgeSettings {
    fn default() -> Self {
        Self {
            command: default_bridge_command(),
            uri_opener: default_uri_opener(),
            uri_scheme: default_uri_scheme(),
        }
    }
}

/// Top-level configuration file contents.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub target: TargetSettings,

    #[serde(default)]
    pub bridge: BridgeSettings,
}

fn default_true() -> bool {
    true
}

fn default_bridge_command() -> Vec<String> {
    vec!["flatpak-spawn".to_string(), "--host".to_string()]
}

fn default_uri_opener() -> String {
    "xdg-open".to_string()
}

fn default_uri_scheme() -> String {
    "vscode".to_string()
}

// ─────────────────────────────────────────────────────────────────────────────
// EditorTarget
// ─────────────────────────────────────────────────────────────────────────────

/// A validated target editor, ready for dispatch.
///
/// Lifetime is one invocation; nothing is cached across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorTarget {
    /// Command to invoke (or, for uri-scheme, ignored in favor of the URI)
    pub command: String,
    /// Whether the target accepts a position suffix
    pub supports_position: bool,
    /// Transport used to reach the target
    pub transport: Transport,
}
