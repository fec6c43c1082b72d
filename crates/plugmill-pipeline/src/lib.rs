//! Build-and-install pipeline for host plugins
//!
//! The pipeline builds the host application once, discovers plugin
//! subprojects, compiles each to a bytecode artifact, and installs the
//! artifacts into the shared plugin directory. Per-plugin failures are
//! captured as report entries so one broken plugin never aborts the rest;
//! only environment setup and the host build can end a run early.

pub mod build;
pub mod discover;
pub mod install;
pub mod locate;
pub mod orchestrate;
mod process;

pub use build::{CargoHostBuilder, CargoPluginBuilder, HostBuild, PluginBuild};
pub use orchestrate::Pipeline;
