//! Target editor configuration
//!
//! The target editor is declared, never auto-detected: it is an opaque
//! user-supplied executable whose capabilities the shim cannot introspect
//! without speculatively running it. Configuration is re-read on every
//! invocation so user changes take effect immediately.

pub mod settings;
pub mod types;

pub use settings::{config_path, load_settings, resolve_target, CONFIG_ENV_VAR};
pub use types::{BridgeSettings, EditorTarget, Settings, TargetSettings, Transport};
