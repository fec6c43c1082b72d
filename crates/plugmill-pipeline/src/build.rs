//! Host and plugin build invocations
//!
//! Build steps are opaque collaborators: the orchestrator consumes their
//! pass/fail signal (plus located artifacts), never their output. The
//! traits keep the orchestrator independent of the concrete toolchain and
//! make it testable with scripted builders.

use crate::locate;
use crate::process::run_cmd_in;
use plugmill_foundation::project::BYTECODE_TARGET;
use plugmill_foundation::{BuildOutcome, PluginProject, PlugmillError, PlugmillResult};
use std::path::PathBuf;
use tracing::{debug, info};

/// Builds the host application once per run. Failure is fatal.
pub trait HostBuild {
    fn build(&self) -> PlugmillResult<()>;
}

/// Builds one plugin subproject in isolation.
///
/// Implementations must scope any working-directory change to the spawned
/// process and report every failure through the returned outcome.
pub trait PluginBuild {
    fn build(&self, project: &PluginProject) -> BuildOutcome;
}

/// `cargo build --release` in the host root.
pub struct CargoHostBuilder {
    host_root: PathBuf,
}

impl CargoHostBuilder {
    pub fn new(host_root: impl Into<PathBuf>) -> Self {
        Self {
            host_root: host_root.into(),
        }
    }
}

impl HostBuild for CargoHostBuilder {
    fn build(&self) -> PlugmillResult<()> {
        info!(root = %self.host_root.display(), "building host application");
        let status = run_cmd_in(&self.host_root, "cargo", &["build", "--release"])?;
        if !status.success() {
            return Err(PlugmillError::host_build(status.to_string()));
        }
        Ok(())
    }
}

/// `cargo build --release --target wasm32-unknown-unknown`, scoped to the
/// plugin project root.
///
/// On success the outcome carries every bytecode artifact found under the
/// project's build-output tree, in the locator's documented order.
pub struct CargoPluginBuilder;

impl PluginBuild for CargoPluginBuilder {
    fn build(&self, project: &PluginProject) -> BuildOutcome {
        info!(plugin = %project.name, "building plugin");
        let status = match run_cmd_in(
            &project.root,
            "cargo",
            &["build", "--release", "--target", BYTECODE_TARGET],
        ) {
            Ok(status) => status,
            Err(e) => return BuildOutcome::failure(e.to_string()),
        };
        if !status.success() {
            return BuildOutcome::failure(format!("cargo exited with {status}"));
        }

        let artifacts = locate::bytecode_artifacts(&project.artifact_dir());
        debug!(
            plugin = %project.name,
            count = artifacts.len(),
            "located bytecode artifacts"
        );
        BuildOutcome::success(artifacts)
    }
}
