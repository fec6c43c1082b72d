//! Bytecode artifact location
//!
//! A build-output tree mixes the plugin artifact with fingerprints, deps,
//! and incremental state, and test builds can leave extra candidates. The
//! locator walks the tree read-only and orders candidates shallowest path
//! first, then lexicographically by full path, so repeated runs always
//! select the same file.

use plugmill_foundation::project::ARTIFACT_EXTENSION;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// All bytecode artifacts under `root`, deterministically ordered.
///
/// A missing `root` yields an empty list: a failed build simply produced
/// nothing to find, which the caller downgrades to a per-plugin failure.
pub fn bytecode_artifacts(root: &Path) -> Vec<PathBuf> {
    let mut found: Vec<(usize, PathBuf)> = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry.path().extension().and_then(|ext| ext.to_str()) == Some(ARTIFACT_EXTENSION)
        })
        .map(|entry| (entry.depth(), entry.into_path()))
        .collect();

    found.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
    found.into_iter().map(|(_, path)| path).collect()
}

/// First artifact under `root` in the documented order, if any.
pub fn first_artifact(root: &Path) -> Option<PathBuf> {
    bytecode_artifacts(root).into_iter().next()
}
