//! Configuration layer for plugmill
//!
//! Resolves the host project layout once per run and owns logging
//! initialization for the binary.

pub mod layout;
pub mod logging;

pub use layout::HostLayout;
