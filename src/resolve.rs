//! Path resolution for extracted file locations.
//!
//! Downstream tools (host-bridge launchers, URI handlers) may run with a
//! different working directory or on the other side of a sandbox, so the
//! path handed to them must be absolute and canonical. Resolution failure
//! is surfaced rather than silently falling back to the raw path.

use edshim_core::prelude::*;
use edshim_core::{FileLocation, ResolvedLocation};
use std::path::{Path, PathBuf};

/// Resolve a file location to a canonical absolute path.
///
/// Relative paths resolve against `project_dir` when the host supplied
/// one, otherwise against the shim's working directory. Symlinks are
/// resolved and relative segments removed, so repeated resolution of the
/// same input is idempotent. Line and column pass through untouched.
pub fn resolve_location(
    location: &FileLocation,
    project_dir: Option<&Path>,
) -> Result<ResolvedLocation> {
    let raw = Path::new(&location.path);

    let joined: PathBuf = if raw.is_absolute() {
        raw.to_path_buf()
    } else {
        match project_dir {
            Some(dir) => dir.join(raw),
            None => std::env::current_dir()
                .map_err(|e| {
                    Error::path_resolution(raw, format!("cannot determine working directory: {e}"))
                })?
                .join(raw),
        }
    };

    let canonical = dunce::canonicalize(&joined)
        .map_err(|e| Error::path_resolution(&joined, e.to_string()))?;

    debug!("resolved {:?} -> {:?}", location.path, canonical);

    Ok(ResolvedLocation::new(
        canonical,
        location.line,
        location.column,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::write(path, "// test").unwrap();
    }

    #[test]
    fn test_resolve_absolute_path() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("Foo.cs");
        touch(&file);

        let loc = FileLocation::new(file.to_str().unwrap(), Some(50), Some(10));
        let resolved = resolve_location(&loc, None).unwrap();

        assert!(resolved.absolute_path.is_absolute());
        assert_eq!(resolved.line, Some(50));
        assert_eq!(resolved.column, Some(10));
    }

    #[test]
    fn test_resolve_relative_against_project_dir() {
        let temp_dir = TempDir::new().unwrap();
        let scripts = temp_dir.path().join("Assets").join("Scripts");
        fs::create_dir_all(&scripts).unwrap();
        let file = scripts.join("Foo.cs");
        touch(&file);

        let loc = FileLocation::new("Assets/Scripts/Foo.cs", Some(5), None);
        let resolved = resolve_location(&loc, Some(temp_dir.path())).unwrap();

        assert_eq!(resolved.absolute_path, dunce::canonicalize(&file).unwrap());
        assert_eq!(resolved.line, Some(5));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("Foo.cs");
        touch(&file);

        let first = resolve_location(
            &FileLocation::new(file.to_str().unwrap(), None, None),
            None,
        )
        .unwrap();
        let second = resolve_location(
            &FileLocation::new(first.absolute_path.to_str().unwrap(), None, None),
            None,
        )
        .unwrap();

        assert_eq!(first.absolute_path, second.absolute_path);
    }

    #[test]
    fn test_resolve_normalizes_dot_segments() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("Foo.cs");
        touch(&file);

        let loc = FileLocation::new("./Foo.cs", None, None);
        let resolved = resolve_location(&loc, Some(temp_dir.path())).unwrap();

        assert_eq!(
            resolved.absolute_path,
            dunce::canonicalize(&file).unwrap()
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_follows_symlinks() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("Foo.cs");
        touch(&file);
        let link = temp_dir.path().join("link.cs");
        std::os::unix::fs::symlink(&file, &link).unwrap();

        let loc = FileLocation::new(link.to_str().unwrap(), None, None);
        let resolved = resolve_location(&loc, None).unwrap();

        assert_eq!(resolved.absolute_path, dunce::canonicalize(&file).unwrap());
    }

    #[test]
    fn test_resolve_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let loc = FileLocation::new("does/not/exist.cs", Some(3), None);

        let err = resolve_location(&loc, Some(temp_dir.path())).unwrap_err();
        assert!(matches!(err, Error::PathResolution { .. }));
        assert_eq!(err.exit_code(), 3);
    }
}
