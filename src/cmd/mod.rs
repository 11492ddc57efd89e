//! Command handlers for the img-slim CLI
//!
//! This module contains all command implementations, organized by
//! functionality. Each submodule handles a specific CLI command.

pub mod compare;
pub mod completions;
pub mod init;
pub mod optimize;
pub mod tools;

// Re-export command functions for convenient access
pub use compare::cmd_compare;
pub use completions::cmd_completions;
pub use init::cmd_init;
pub use optimize::cmd_optimize;
pub use tools::cmd_tools;
