//! Artifact installation into the shared plugin directory

use plugmill_foundation::{InstalledArtifact, PlugmillError, PlugmillResult};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Create the shared plugin directory if absent. Idempotent.
///
/// Called once per run before any build; failure here is fatal since no
/// plugin can be installed without it.
pub fn ensure_plugin_dir(dir: &Path) -> PlugmillResult<()> {
    fs::create_dir_all(dir).map_err(|e| {
        PlugmillError::environment(format!(
            "cannot create plugin directory {}: {}",
            dir.display(),
            e
        ))
    })
}

/// Copy `artifact` into `dir` under its original filename, overwriting
/// any previous install of the same plugin.
///
/// This is the pipeline's only persistent effect. Errors are per-plugin:
/// the caller records them and moves on.
pub fn install(artifact: &Path, dir: &Path) -> PlugmillResult<InstalledArtifact> {
    let file_name = artifact.file_name().ok_or_else(|| {
        PlugmillError::config(format!("artifact {} has no filename", artifact.display()))
    })?;
    let dest = dir.join(file_name);
    fs::copy(artifact, &dest)?;
    debug!(dest = %dest.display(), "copied artifact");

    Ok(InstalledArtifact {
        source: artifact.to_path_buf(),
        dest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn ensure_plugin_dir_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("shared/plugins");
        ensure_plugin_dir(&target).unwrap();
        ensure_plugin_dir(&target).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn installs_under_the_original_filename() {
        let dir = TempDir::new().unwrap();
        let artifact = dir.path().join("counter.wasm");
        fs::write(&artifact, b"\0asm-v1").unwrap();
        let shared = dir.path().join("shared");
        ensure_plugin_dir(&shared).unwrap();

        let installed = install(&artifact, &shared).unwrap();
        assert_eq!(installed.dest, shared.join("counter.wasm"));
        assert_eq!(fs::read(&installed.dest).unwrap(), b"\0asm-v1");
    }

    #[test]
    fn reinstall_overwrites_the_previous_artifact() {
        let dir = TempDir::new().unwrap();
        let artifact = dir.path().join("counter.wasm");
        let shared = dir.path().join("shared");
        ensure_plugin_dir(&shared).unwrap();

        fs::write(&artifact, b"old").unwrap();
        install(&artifact, &shared).unwrap();
        fs::write(&artifact, b"new").unwrap();
        install(&artifact, &shared).unwrap();

        assert_eq!(fs::read(shared.join("counter.wasm")).unwrap(), b"new");
    }

    #[test]
    fn copy_into_missing_directory_fails_per_plugin() {
        let dir = TempDir::new().unwrap();
        let artifact = dir.path().join("counter.wasm");
        fs::write(&artifact, b"\0asm").unwrap();

        let err = install(&artifact, &dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, PlugmillError::Io(_)));
    }
}
