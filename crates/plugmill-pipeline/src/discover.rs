//! Plugin project discovery

use plugmill_foundation::{PluginProject, PlugmillResult};
use std::fs;
use std::path::Path;
use tracing::debug;

/// List the immediate subdirectories of `plugins_root` as plugin
/// projects, sorted by name.
///
/// A missing root means zero plugins, not an error. Hidden directories
/// and plain files are skipped.
pub fn discover_projects(plugins_root: &Path) -> PlugmillResult<Vec<PluginProject>> {
    if !plugins_root.is_dir() {
        debug!(root = %plugins_root.display(), "plugins root missing, nothing to build");
        return Ok(Vec::new());
    }

    let mut projects = Vec::new();
    for entry in fs::read_dir(plugins_root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        projects.push(PluginProject::new(name, entry.path()));
    }
    projects.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(projects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn missing_root_is_zero_plugins() {
        let dir = TempDir::new().unwrap();
        let projects = discover_projects(&dir.path().join("plugins")).unwrap();
        assert!(projects.is_empty());
    }

    #[test]
    fn lists_subdirectories_sorted_by_name() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("beta")).unwrap();
        fs::create_dir(dir.path().join("alpha")).unwrap();

        let projects = discover_projects(dir.path()).unwrap();
        let names: Vec<_> = projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "beta"]);
        assert_eq!(projects[0].root, dir.path().join("alpha"));
    }

    #[test]
    fn skips_files_and_hidden_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("counter")).unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join("README.md"), "notes").unwrap();

        let projects = discover_projects(dir.path()).unwrap();
        let names: Vec<_> = projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["counter"]);
    }
}
