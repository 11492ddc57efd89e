//! Completions command implementation
//!
//! Handles the `img-slim completions` command which generates
//! shell completion scripts for bash, zsh, fish, etc.

use clap_complete::{generate, Shell};

/// Generate shell completion scripts
///
/// Outputs completion script for the specified shell to stdout.
/// Users can redirect this to their shell's completion directory.
///
/// # Examples
///
/// ```bash
/// # Bash
/// img-slim completions bash > /etc/bash_completion.d/img-slim
///
/// # Zsh
/// img-slim completions zsh > ~/.zfunc/_img-slim
///
/// # Fish
/// img-slim completions fish > ~/.config/fish/completions/img-slim.fish
/// ```
pub fn cmd_completions(shell: Shell) {
    // We need to re-create the command structure here since Cli is in main.rs
    use clap::{Arg, ArgAction, Command};

    let mut cmd = Command::new("img-slim")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Batch image asset optimizer")
        .arg(
            Arg::new("no-emoji")
                .long("no-emoji")
                .help("Disable emoji output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(Command::new("optimize").about("Optimize the configured image files"))
        .subcommand(Command::new("compare").about("Compare two image files"))
        .subcommand(Command::new("tools").about("Check encoder tool availability"))
        .subcommand(Command::new("init").about("Initialize img-slim configuration"))
        .subcommand(Command::new("completions").about("Generate shell completions"));

    let bin_name = "img-slim".to_string();
    generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
}
