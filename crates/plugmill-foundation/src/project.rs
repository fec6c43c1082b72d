//! Plugin project model and build conventions

use serde::Serialize;
use std::path::PathBuf;

/// Compilation target every plugin is built for.
pub const BYTECODE_TARGET: &str = "wasm32-unknown-unknown";

/// Build profile used for the host and every plugin.
pub const BUILD_PROFILE: &str = "release";

/// File extension of the artifacts the host loads.
pub const ARTIFACT_EXTENSION: &str = "wasm";

/// An independently buildable plugin subproject.
///
/// Identity is the directory name under the plugins root. Projects are
/// discovered once per run and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginProject {
    /// Directory name relative to the plugins root.
    pub name: String,
    /// Path to the project root.
    pub root: PathBuf,
}

impl PluginProject {
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
        }
    }

    /// Build-output root where the project's bytecode artifacts land.
    pub fn artifact_dir(&self) -> PathBuf {
        self.root
            .join("target")
            .join(BYTECODE_TARGET)
            .join(BUILD_PROFILE)
    }
}
