//! plugmill: build the host application, then build every plugin under
//! `plugins/` and install the artifacts into the host's runtime plugin
//! directory.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use plugmill_config::{logging, HostLayout};
use plugmill_foundation::project::BYTECODE_TARGET;
use plugmill_foundation::{PluginStatus, RunReport};
use plugmill_pipeline::{CargoHostBuilder, CargoPluginBuilder, Pipeline};
use std::process::{Command, Stdio};

#[derive(Parser)]
#[command(name = "plugmill")]
#[command(about = "Build the host application and install its plugins", long_about = None)]
#[command(version)]
struct Cli {}

fn main() -> Result<()> {
    let Cli {} = Cli::parse();
    logging::initialize();

    preflight()?;

    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let layout = HostLayout::discover(cwd)?;

    println!(
        "{}",
        format!("Building {} and its plugins...\n", layout.app_name).bold()
    );

    let pipeline = Pipeline::new(
        CargoHostBuilder::new(layout.host_root.clone()),
        CargoPluginBuilder,
        layout.plugins_root.clone(),
        layout.plugin_dir.clone(),
    );
    let report = pipeline.run()?;

    render_summary(&report, &layout);
    Ok(())
}

/// Fail fast when cargo is missing; warn when the bytecode target is not
/// installed (each plugin build would fail on its own otherwise).
fn preflight() -> Result<()> {
    which::which("cargo").context("cargo not found on PATH")?;

    let installed = Command::new("rustup")
        .args(["target", "list", "--installed"])
        .stderr(Stdio::null())
        .output();
    if let Ok(output) = installed {
        let targets = String::from_utf8_lossy(&output.stdout);
        if output.status.success()
            && !targets.lines().any(|t| t.trim() == BYTECODE_TARGET)
        {
            println!(
                "{}",
                format!("⚠ Target {BYTECODE_TARGET} is not installed; plugin builds will fail")
                    .yellow()
            );
            println!(
                "  Install it with: {}\n",
                format!("rustup target add {BYTECODE_TARGET}").cyan()
            );
        }
    }
    Ok(())
}

fn render_summary(report: &RunReport, layout: &HostLayout) {
    println!("\n{}", "✓ Host build complete".green());
    if report.is_empty() {
        println!("{}", "No plugin projects found.".yellow());
        return;
    }

    for entry in report.iter() {
        let name = entry.project.name.as_str();
        match &entry.status {
            PluginStatus::Installed(artifact) => println!(
                "  {} {} → {}",
                "✓".green(),
                name,
                artifact.dest.display().to_string().cyan()
            ),
            PluginStatus::BuildFailed { reason } => {
                println!("  {} {}: build failed ({})", "✗".red(), name, reason)
            }
            PluginStatus::NoArtifact => println!(
                "  {} {}: no bytecode artifact produced",
                "✗".red(),
                name
            ),
            PluginStatus::InstallFailed { reason } => {
                println!("  {} {}: install failed ({})", "✗".red(), name, reason)
            }
        }
    }

    println!();
    let installed = report.installed();
    let failed = report.failed();
    if failed == 0 {
        println!(
            "{}",
            format!("✓ {}/{} plugin(s) installed", installed, report.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "⚠ {}/{} plugin(s) installed, {} failed",
                installed,
                report.len(),
                failed
            )
            .yellow()
            .bold()
        );
    }

    if installed > 0 {
        println!(
            "\nRun {} to load the installed plugins.",
            layout.app_name.cyan()
        );
    }
}
