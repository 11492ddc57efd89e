use clap::{Parser, Subcommand};
use clap_complete::Shell;
use img_slim::cmd;
use img_slim::config::BackendKind;
use std::process;

/// Batch image asset optimizer
///
/// img-slim recompresses a configured list of PNG/JPEG assets in place,
/// generates WebP siblings, and only ever commits an optimized file when it
/// is smaller than the original.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable emoji output (useful for CI/CD or accessibility)
    #[arg(long, global = true)]
    no_emoji: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Optimize the configured image files
    Optimize {
        /// Show which files would be optimized without making changes
        #[arg(short, long)]
        dry_run: bool,

        /// Output the run summary as JSON (for CI/CD integration)
        #[arg(long)]
        json: bool,

        /// Encoder backend to use (overrides the configured one)
        #[arg(short, long, value_enum)]
        backend: Option<BackendKind>,
    },

    /// Compare two image files
    Compare {
        /// Before file
        before: String,

        /// After file
        after: String,
    },

    /// Check encoder tool availability
    Tools,

    /// Initialize img-slim configuration
    Init,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    // Set console emoji mode based on CLI flag
    if cli.no_emoji {
        std::env::set_var("NO_EMOJI", "1");
    }

    let result = match &cli.command {
        Some(Commands::Optimize {
            dry_run,
            json,
            backend,
        }) => cmd::cmd_optimize(*dry_run, *json, *backend),
        Some(Commands::Compare { before, after }) => cmd::cmd_compare(before, after),
        Some(Commands::Tools) => cmd::cmd_tools(),
        Some(Commands::Init) => cmd::cmd_init(),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(*shell);
            Ok(())
        }
        None => {
            // No subcommand provided, show help
            println!("img-slim v{}", env!("CARGO_PKG_VERSION"));
            println!("Batch image asset optimizer\n");
            println!("Usage: img-slim <COMMAND>\n");
            println!("Commands:");
            println!("  optimize     Optimize the configured image files");
            println!("  compare      Compare two image files");
            println!("  tools        Check encoder tool availability");
            println!("  init         Initialize img-slim configuration");
            println!("  completions  Generate shell completions");
            println!("\nRun 'img-slim <COMMAND> --help' for more information on a command.");
            Ok(())
        }
    };

    if let Err(e) = result {
        use img_slim::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}
