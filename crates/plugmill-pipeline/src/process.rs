//! Child process helpers

use plugmill_foundation::{PlugmillError, PlugmillResult};
use std::path::Path;
use std::process::{Command, ExitStatus};

/// Run a command with an explicit working directory and return its exit
/// status.
///
/// Stdout/stderr are inherited so build output streams straight to the
/// user; callers inspect only the status. The working directory is scoped
/// to the child process, the orchestrator's own cwd is never touched.
pub fn run_cmd_in(dir: &Path, program: &str, args: &[&str]) -> PlugmillResult<ExitStatus> {
    Command::new(program)
        .args(args)
        .current_dir(dir)
        .status()
        .map_err(|e| {
            PlugmillError::environment(format!(
                "failed to run: {} {}: {}",
                program,
                args.join(" "),
                e
            ))
        })
}
