//! Host project layout resolution
//!
//! The orchestrator operates on a fixed directory convention: the host
//! application lives at the invocation root, plugin subprojects under
//! `plugins/`, and installed artifacts in the host's per-user runtime
//! plugin directory (`<config_dir>/<app>/plugins`), which the host scans
//! at startup.

use plugmill_foundation::{PlugmillError, PlugmillResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory under the host root holding plugin subprojects, and the
/// directory under the host's config dir receiving installed artifacts.
pub const PLUGINS_DIR: &str = "plugins";

/// The slice of a Cargo manifest the layout cares about.
#[derive(Debug, Deserialize)]
struct Manifest {
    package: Option<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: Option<String>,
}

/// Resolved filesystem layout for one orchestrator run.
///
/// Fixed for the duration of the run; all paths are derived once, before
/// any build is attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostLayout {
    /// Host application root (the invocation directory).
    pub host_root: PathBuf,
    /// Host application name, from the manifest or the directory name.
    pub app_name: String,
    /// Directory whose immediate subdirectories are plugin projects.
    pub plugins_root: PathBuf,
    /// Shared directory the host scans for installed plugins.
    pub plugin_dir: PathBuf,
}

impl HostLayout {
    /// Resolve the layout rooted at `host_root`.
    ///
    /// The app name comes from `[package].name` in the root manifest,
    /// falling back to the root directory name for workspace-only
    /// manifests.
    pub fn discover(host_root: impl Into<PathBuf>) -> PlugmillResult<Self> {
        let host_root = host_root.into();
        let app_name = read_app_name(&host_root)?;

        let config_dir = dirs::config_dir().ok_or_else(|| {
            PlugmillError::environment("no user configuration directory available")
        })?;
        let plugin_dir = config_dir.join(&app_name).join(PLUGINS_DIR);
        let plugins_root = host_root.join(PLUGINS_DIR);

        debug!(
            app = %app_name,
            plugin_dir = %plugin_dir.display(),
            "resolved host layout"
        );

        Ok(Self {
            host_root,
            app_name,
            plugins_root,
            plugin_dir,
        })
    }
}

fn read_app_name(host_root: &Path) -> PlugmillResult<String> {
    let manifest_path = host_root.join("Cargo.toml");
    let raw = fs::read_to_string(&manifest_path).map_err(|e| {
        PlugmillError::manifest(format!("cannot read {}: {}", manifest_path.display(), e))
    })?;
    let manifest: Manifest = toml::from_str(&raw).map_err(|e| {
        PlugmillError::manifest(format!("cannot parse {}: {}", manifest_path.display(), e))
    })?;

    if let Some(name) = manifest.package.and_then(|p| p.name) {
        return Ok(name);
    }

    // Workspace-only manifest: fall back to the directory name.
    host_root
        .canonicalize()
        .ok()
        .as_deref()
        .unwrap_or(host_root)
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_owned)
        .ok_or_else(|| PlugmillError::manifest("host root has no usable directory name"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn app_name_comes_from_the_package_section() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("Cargo.toml"),
            "[package]\nname = \"fox-host\"\nversion = \"0.1.0\"\nedition = \"2021\"\n",
        )
        .unwrap();

        let layout = HostLayout::discover(dir.path()).unwrap();
        assert_eq!(layout.app_name, "fox-host");
        assert_eq!(layout.plugins_root, dir.path().join("plugins"));
        assert!(layout.plugin_dir.ends_with("fox-host/plugins"));
    }

    #[test]
    fn workspace_manifest_falls_back_to_directory_name() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("my-host");
        fs::create_dir(&root).unwrap();
        fs::write(
            root.join("Cargo.toml"),
            "[workspace]\nmembers = [\"crates/*\"]\n",
        )
        .unwrap();

        let layout = HostLayout::discover(&root).unwrap();
        assert_eq!(layout.app_name, "my-host");
    }

    #[test]
    fn missing_manifest_is_a_manifest_error() {
        let dir = TempDir::new().unwrap();
        let err = HostLayout::discover(dir.path()).unwrap_err();
        assert!(matches!(err, PlugmillError::Manifest { .. }));
    }
}
