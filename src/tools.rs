//! Tool detection and verification module
//!
//! Detects the presence and versions of the external compressors the
//! subprocess backend shells out to:
//! - oxipng (required for PNG recompression)
//! - cjpeg, from mozjpeg (required for JPEG recompression)
//! - cwebp (optional, for WebP siblings)
//!
//! The native backend needs none of these.

use crate::infra::{CommandExecutor, RealCommandExecutor};
use console::style;
use thiserror::Error;

/// Errors that can occur during tool operations
#[derive(Error, Debug)]
pub enum ToolError {
    /// I/O error during tool execution
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Tool execution failed
    #[error("Failed to get version for {0}")]
    VersionFailed(String),

    /// Required tool is missing
    #[error("Required tool missing: {0}")]
    MissingTool(String),
}

/// Represents an external compressor with detection capabilities
///
/// # Examples
///
/// ```
/// use img_slim::tools::ToolChain;
///
/// let toolchain = ToolChain::new();
///
/// match toolchain.check_required() {
///     Ok(_) => println!("All required encoders found"),
///     Err(e) => eprintln!("Missing encoders: {}", e),
/// }
/// ```
#[derive(Debug)]
pub struct Tool<CE: CommandExecutor = RealCommandExecutor> {
    /// Human-readable name
    pub name: &'static str,
    /// Binary name in PATH
    pub binary: &'static str,
    /// Flag to get version (e.g., "--version")
    pub version_flag: &'static str,
    /// Whether this tool is required for the subprocess backend
    pub required: bool,
    /// Command executor for running version checks
    cmd_executor: CE,
}

impl<CE: CommandExecutor> Tool<CE> {
    /// Create a new Tool with a custom command executor
    pub fn with_executor(
        name: &'static str,
        binary: &'static str,
        version_flag: &'static str,
        required: bool,
        cmd_executor: CE,
    ) -> Self {
        Self {
            name,
            binary,
            version_flag,
            required,
            cmd_executor,
        }
    }

    /// Check if the tool is installed and available in PATH
    pub fn is_installed(&self) -> bool {
        which::which(self.binary).is_ok()
    }

    /// Get the version string of the installed tool
    pub fn version(&self) -> Result<String, ToolError> {
        let output = self
            .cmd_executor
            .execute(|cmd| cmd.arg(self.version_flag), self.binary)?;

        if !output.status.success() {
            return Err(ToolError::VersionFailed(self.name.to_string()));
        }

        // cwebp and cjpeg report their version on stderr; fall back to it
        // when stdout is empty.
        let stream = if output.stdout.is_empty() {
            &output.stderr
        } else {
            &output.stdout
        };

        let version = String::from_utf8_lossy(stream)
            .lines()
            .next()
            .unwrap_or("")
            .to_string();

        Ok(version)
    }

    /// Check and report the tool status
    pub fn check(&self) -> ToolStatus {
        if self.is_installed() {
            match self.version() {
                Ok(version) => ToolStatus::Available(version),
                Err(_) => ToolStatus::InstalledButVersionUnknown,
            }
        } else {
            ToolStatus::Missing
        }
    }
}

impl Tool<RealCommandExecutor> {
    /// Create a new Tool with real command execution
    pub fn new(
        name: &'static str,
        binary: &'static str,
        version_flag: &'static str,
        required: bool,
    ) -> Self {
        Self::with_executor(name, binary, version_flag, required, RealCommandExecutor)
    }
}

/// Status of a tool check
#[derive(Debug)]
pub enum ToolStatus {
    /// Tool is available and version was successfully retrieved
    Available(String),
    /// Tool binary exists but version check failed
    InstalledButVersionUnknown,
    /// Tool binary not found
    Missing,
}

/// All external compressors the subprocess backend can use
pub struct ToolChain<CE: CommandExecutor = RealCommandExecutor> {
    /// oxipng PNG recompressor (required)
    pub oxipng: Tool<CE>,
    /// cjpeg JPEG encoder from mozjpeg (required)
    pub cjpeg: Tool<CE>,
    /// cwebp WebP encoder (optional)
    pub cwebp: Tool<CE>,
}

impl Default for ToolChain<RealCommandExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolChain<RealCommandExecutor> {
    /// Create a new ToolChain with real command execution
    pub fn new() -> Self {
        Self::with_executor(RealCommandExecutor)
    }
}

impl<CE: CommandExecutor + Clone> ToolChain<CE> {
    /// Create a new ToolChain with a custom command executor
    pub fn with_executor(cmd_executor: CE) -> Self {
        Self {
            oxipng: Tool::with_executor(
                "oxipng",
                "oxipng",
                "--version",
                true,
                cmd_executor.clone(),
            ),
            cjpeg: Tool::with_executor(
                "cjpeg (mozjpeg)",
                "cjpeg",
                "-version",
                true,
                cmd_executor.clone(),
            ),
            cwebp: Tool::with_executor("cwebp", "cwebp", "-version", false, cmd_executor),
        }
    }
}

impl<CE: CommandExecutor> ToolChain<CE> {
    /// Check all tools and report their status
    pub fn check_all(&self) -> Result<(), ToolError> {
        println!("\n{} Checking encoder tools...", style("🔧").bold());

        let tools = [&self.oxipng, &self.cjpeg, &self.cwebp];

        let mut missing_required: Vec<&Tool<CE>> = Vec::new();
        let mut missing_optional: Vec<&Tool<CE>> = Vec::new();

        for tool in &tools {
            match tool.check() {
                ToolStatus::Available(version) => {
                    println!(
                        "   {} {} - {}",
                        style("✓").green(),
                        style(tool.name).bold(),
                        style(version).dim()
                    );
                }
                ToolStatus::InstalledButVersionUnknown => {
                    println!(
                        "   {} {} - {}",
                        style("✓").green(),
                        style(tool.name).bold(),
                        style("(version unknown)").dim()
                    );
                }
                ToolStatus::Missing => {
                    if tool.required {
                        println!(
                            "   {} {} - {}",
                            style("✗").red(),
                            style(tool.name).bold(),
                            style("NOT FOUND").red()
                        );
                        missing_required.push(*tool);
                    } else {
                        println!(
                            "   {} {} - {} {}",
                            style("○").yellow(),
                            style(tool.name).bold(),
                            style("NOT FOUND").yellow(),
                            style("(optional)").dim()
                        );
                        missing_optional.push(*tool);
                    }
                }
            }
        }

        if !missing_required.is_empty() {
            println!("\n{} Missing required tools:", style("❌").bold());
            for tool in &missing_required {
                println!("   • {}", tool.name);
            }
            println!("\n{} Installation instructions:", style("💡").bold());
            print_installation_instructions(&missing_required);
            return Err(ToolError::MissingTool(
                "Required tools are missing. Please install them and try again.".to_string(),
            ));
        }

        if !missing_optional.is_empty() {
            println!("\n{} Optional tools not found:", style("ℹ️").bold());
            println!("   Without these, some outputs are skipped:");
            for tool in &missing_optional {
                println!("   • {}", tool.name);
            }
            println!("\n{} You can install them for better results:", style("💡").bold());
            print_installation_instructions(&missing_optional);
        }

        Ok(())
    }

    /// Check only required tools (faster check)
    ///
    /// Verifies oxipng and cjpeg are available in PATH. Consulted before a
    /// subprocess-backend run; the native backend skips this entirely.
    ///
    /// # Errors
    /// Returns error if any required tool is missing
    pub fn check_required(&self) -> Result<(), ToolError> {
        let tools = [&self.oxipng, &self.cjpeg];

        for tool in &tools {
            if !tool.is_installed() {
                return Err(ToolError::MissingTool(format!(
                    "{} is required but not found in PATH",
                    tool.name
                )));
            }
        }

        Ok(())
    }
}

/// Per-tool install instructions
pub fn install_instructions(binary: &str) -> &'static str {
    match binary {
        "oxipng" => "cargo install oxipng",
        "cjpeg" => "brew install mozjpeg (macOS) / apt install libjpeg-turbo-progs (Linux)",
        "cwebp" => "brew install webp (macOS) / apt install webp (Linux)",
        _ => "see the project README",
    }
}

fn print_installation_instructions<CE: CommandExecutor>(tools: &[&Tool<CE>]) {
    for tool in tools {
        match tool.binary {
            "oxipng" => {
                println!("\n   oxipng:");
                println!("     cargo install oxipng");
            }
            "cjpeg" => {
                println!("\n   cjpeg (mozjpeg):");
                println!("     # macOS");
                println!("     brew install mozjpeg");
                println!("     # Linux (Debian/Ubuntu)");
                println!("     sudo apt install libjpeg-turbo-progs");
            }
            "cwebp" => {
                println!("\n   cwebp:");
                println!("     # macOS");
                println!("     brew install webp");
                println!("     # Linux (Debian/Ubuntu)");
                println!("     sudo apt install webp");
            }
            _ => {}
        }
    }
}
