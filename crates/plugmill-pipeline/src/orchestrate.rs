//! Sequential pipeline over discovered plugin projects
//!
//! A run is a fold: each project passes through build, locate, and
//! install, and every failure along the way becomes a report entry
//! instead of an abort. Only environment setup and the host build are
//! fatal.

use crate::build::{HostBuild, PluginBuild};
use crate::{discover, install};
use plugmill_foundation::{
    BuildOutcome, PluginProject, PluginStatus, PlugmillResult, RunReport,
};
use std::path::PathBuf;
use tracing::{info, warn};

/// The whole build-and-install pipeline for one host project.
///
/// Generic over its build collaborators so the control flow can be
/// exercised with scripted builders in tests.
pub struct Pipeline<H, B> {
    host: H,
    plugins: B,
    plugins_root: PathBuf,
    plugin_dir: PathBuf,
}

impl<H: HostBuild, B: PluginBuild> Pipeline<H, B> {
    pub fn new(
        host: H,
        plugins: B,
        plugins_root: impl Into<PathBuf>,
        plugin_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            host,
            plugins,
            plugins_root: plugins_root.into(),
            plugin_dir: plugin_dir.into(),
        }
    }

    /// Run the full pipeline and produce the per-plugin report.
    ///
    /// Stages: ensure the shared plugin directory exists, build the host,
    /// discover plugin projects, then process each project in name order.
    /// An `Err` here means the run never reached the per-plugin stage.
    pub fn run(&self) -> PlugmillResult<RunReport> {
        install::ensure_plugin_dir(&self.plugin_dir)?;
        self.host.build()?;

        let projects = discover::discover_projects(&self.plugins_root)?;
        info!(count = projects.len(), "discovered plugin projects");

        let mut report = RunReport::default();
        for project in projects {
            let status = self.process(&project);
            report.push(project, status);
        }
        Ok(report)
    }

    /// Build, locate, and install one plugin. Never fails the run.
    fn process(&self, project: &PluginProject) -> PluginStatus {
        match self.plugins.build(project) {
            BuildOutcome::Failure { reason } => {
                warn!(plugin = %project.name, %reason, "plugin build failed");
                PluginStatus::BuildFailed { reason }
            }
            BuildOutcome::Success { artifacts } => match artifacts.first() {
                None => {
                    warn!(
                        plugin = %project.name,
                        "build succeeded but produced no bytecode artifact"
                    );
                    PluginStatus::NoArtifact
                }
                Some(artifact) => match install::install(artifact, &self.plugin_dir) {
                    Ok(installed) => {
                        info!(
                            plugin = %project.name,
                            dest = %installed.dest.display(),
                            "installed"
                        );
                        PluginStatus::Installed(installed)
                    }
                    Err(e) => {
                        warn!(plugin = %project.name, error = %e, "install failed");
                        PluginStatus::InstallFailed {
                            reason: e.to_string(),
                        }
                    }
                },
            },
        }
    }
}
