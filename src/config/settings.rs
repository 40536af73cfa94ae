//! Settings loading and target resolution
//!
//! The configuration lives at a fixed, well-known location established by
//! the packaging layer, and is re-read on every invocation.

use super::types::{EditorTarget, Settings, Transport};
use edshim_core::prelude::*;
use std::path::{Path, PathBuf};

/// Environment override for the configuration path (packaging, tests).
pub const CONFIG_ENV_VAR: &str = "EDSHIM_CONFIG";

const CONFIG_DIR: &str = "edshim";
const CONFIG_FILENAME: &str = "config.toml";

/// The well-known configuration file path.
///
/// `$EDSHIM_CONFIG` when set, otherwise `<config_dir>/edshim/config.toml`.
pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        return PathBuf::from(path);
    }

    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
        .join(CONFIG_FILENAME)
}

/// Load settings from the well-known configuration file.
///
/// Unlike a tool that can fall back to sensible defaults, the shim cannot
/// invent a target editor: a missing or unreadable file is an error in
/// the target-unavailable class, surfaced to the host's log viewer.
pub fn load_settings() -> Result<Settings> {
    let path = config_path();
    load_settings_from(&path)
}

fn load_settings_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(Error::config_not_found(path));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::config_invalid(format!("failed to read {}: {}", path.display(), e)))?;

    let settings: Settings = toml::from_str(&content)
        .map_err(|e| Error::config_invalid(format!("failed to parse {}: {}", path.display(), e)))?;

    debug!("loaded settings from {:?}", path);
    Ok(settings)
}

/// Validate the configured target and produce an [`EditorTarget`].
///
/// Only the direct transport is probed for existence: the other two run
/// on the host or behind a URI handler, which the sandbox cannot inspect.
pub fn resolve_target(settings: &Settings) -> Result<EditorTarget> {
    let command = settings.target.command.trim();
    if command.is_empty() {
        return Err(Error::target_unavailable(
            "no target editor command configured",
        ));
    }

    if settings.target.transport == Transport::Direct {
        check_direct_command(command)?;
    }

    Ok(EditorTarget {
        command: command.to_string(),
        supports_position: settings.target.supports_position,
        transport: settings.target.transport,
    })
}

/// Check that a direct-transport command can actually be executed.
fn check_direct_command(command: &str) -> Result<()> {
    let path = Path::new(command);

    // A command with a path separator must name an existing executable
    // file; a bare name must be found on PATH.
    if path.components().count() > 1 {
        if !path.is_file() {
            return Err(Error::target_unavailable(format!(
                "target does not exist or is not a file: {}",
                command
            )));
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let executable = path
                .metadata()
                .map(|m| m.permissions().mode() & 0o111 != 0)
                .unwrap_or(false);
            if !executable {
                return Err(Error::target_unavailable(format!(
                    "target is not executable: {}",
                    command
                )));
            }
        }
    } else if which::which(command).is_err() {
        return Err(Error::target_unavailable(format!(
            "command not found on PATH: {}",
            command
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::TargetSettings;
    use std::fs;
    use tempfile::TempDir;

    fn settings_with(command: &str, transport: Transport) -> Settings {
        Settings {
            target: TargetSettings {
                command: command.to_string(),
                supports_position: true,
                transport,
            },
            ..Settings::default()
        }
    }

    #[test]
    fn test_load_settings_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let err = load_settings_from(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_load_settings_malformed_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[target\ncommand=").unwrap();

        let err = load_settings_from(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
    }

    #[test]
    fn test_load_settings_reads_target() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            "[target]\ncommand = \"/usr/bin/true\"\ntransport = \"direct\"\n",
        )
        .unwrap();

        let settings = load_settings_from(&path).unwrap();
        assert_eq!(settings.target.command, "/usr/bin/true");
    }

    #[test]
    fn test_resolve_target_empty_command() {
        let err = resolve_target(&settings_with("", Transport::Direct)).unwrap_err();
        assert!(matches!(err, Error::TargetUnavailable { .. }));

        // Whitespace-only counts as empty
        let err = resolve_target(&settings_with("   ", Transport::Direct)).unwrap_err();
        assert!(matches!(err, Error::TargetUnavailable { .. }));
    }

    #[test]
    fn test_resolve_target_direct_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("no-such-editor.sh");

        let err = resolve_target(&settings_with(
            missing.to_str().unwrap(),
            Transport::Direct,
        ))
        .unwrap_err();
        assert!(matches!(err, Error::TargetUnavailable { .. }));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_resolve_target_direct_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let script = temp_dir.path().join("editor.sh");
        fs::write(&script, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        }

        let target =
            resolve_target(&settings_with(script.to_str().unwrap(), Transport::Direct)).unwrap();
        assert_eq!(target.transport, Transport::Direct);
        assert!(target.supports_position);
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_target_direct_non_executable_file() {
        let temp_dir = TempDir::new().unwrap();
        let script = temp_dir.path().join("editor.sh");
        fs::write(&script, "#!/bin/sh\n").unwrap();

        let err = resolve_target(&settings_with(script.to_str().unwrap(), Transport::Direct))
            .unwrap_err();
        assert!(matches!(err, Error::TargetUnavailable { .. }));
        assert!(err.to_string().contains("not executable"));
    }

    #[test]
    fn test_resolve_target_bare_name_not_on_path() {
        let err = resolve_target(&settings_with(
            "definitely-not-a-real-editor-4f2a",
            Transport::Direct,
        ))
        .unwrap_err();
        assert!(matches!(err, Error::TargetUnavailable { .. }));
    }

    #[test]
    fn test_resolve_target_sandbox_escape_is_not_probed() {
        // The target lives outside the sandbox; existence cannot be
        // checked from here
        let target = resolve_target(&settings_with(
            "/host/only/path/editor.sh",
            Transport::SandboxEscape,
        ))
        .unwrap();
        assert_eq!(target.transport, Transport::SandboxEscape);
    }

    #[test]
    fn test_resolve_target_uri_scheme_is_not_probed() {
        let target = resolve_target(&settings_with("ignored", Transport::UriScheme)).unwrap();
        assert_eq!(target.transport, Transport::UriScheme);
    }
}
