//! External component tool (the shadcn CLI run through npx)
//!
//! Provides the [`ComponentTool`] seam the installer talks to, and
//! [`ToolManager`], the real implementation that spawns the CLI.

use super::resolver::ComponentId;
use crate::events::{Event, EventSink};
use std::future::Future;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

/// Timeout for a single component install (npx may download the CLI first)
const INSTALL_TIMEOUT: Duration = Duration::from_secs(120);

/// Timeout for the availability probe
const PROBE_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration for a component CLI and the project layout it manages
#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// Display name for user-facing messages
    pub display_name: &'static str,
    /// Launcher binary (e.g., "npx")
    pub program: &'static str,
    /// Package the launcher runs (e.g., "shadcn@latest")
    pub package: &'static str,
    /// File at the project root marking the project as initialized
    pub marker_file: &'static str,
    /// Directory, relative to the project root, holding installed components
    pub component_dir: &'static str,
    /// Extension of an installed component file
    pub component_extension: &'static str,
    /// URL to the documentation
    pub docs_url: &'static str,
}

impl ToolConfig {
    /// Command that initializes a project for this tool
    pub fn init_command(&self) -> String {
        format!("{} {} init", self.program, self.package)
    }

    /// Command that adds one component
    pub fn add_command(&self, id: ComponentId) -> String {
        format!("{} {}", self.program, self.add_args(id).join(" "))
    }

    fn add_args(&self, id: ComponentId) -> Vec<&'static str> {
        vec![self.package, "add", id.as_str(), "--yes", "--overwrite"]
    }
}

/// Why a single component install failed
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("failed to start installer: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("installer exited with code {}", .0.map_or("unknown".to_string(), |c| c.to_string()))]
    Exit(Option<i32>),

    #[error("installer timed out after {0} seconds")]
    Timeout(u64),

    #[error("failed to wait for installer: {0}")]
    Wait(#[source] std::io::Error),
}

/// The external installer boundary
///
/// `add` is only ever awaited one call at a time.
pub trait ComponentTool: Send + Sync {
    fn config(&self) -> &ToolConfig;

    /// Whether the tool can be run at all
    fn probe(&self) -> impl Future<Output = bool> + Send;

    /// Install one component into the project at `root`
    fn add(
        &self,
        id: ComponentId,
        root: &Path,
        sink: &dyn EventSink,
    ) -> impl Future<Output = Result<(), InstallError>> + Send;
}

/// Runs the real component CLI
pub struct ToolManager {
    config: ToolConfig,
}

impl ToolManager {
    /// Create a new tool manager with the given configuration
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }
}

impl ComponentTool for ToolManager {
    fn config(&self) -> &ToolConfig {
        &self.config
    }

    async fn probe(&self) -> bool {
        let status = TokioCommand::new(self.config.program)
            .arg(self.config.package)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .status();

        matches!(timeout(PROBE_TIMEOUT, status).await, Ok(Ok(s)) if s.success())
    }

    /// Streams installer output to the sink line by line; only the exit
    /// status decides success
    async fn add(
        &self,
        id: ComponentId,
        root: &Path,
        sink: &dyn EventSink,
    ) -> Result<(), InstallError> {
        let mut child = TokioCommand::new(self.config.program)
            .args(self.config.add_args(id))
            .current_dir(root)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(InstallError::Spawn)?;

        let (Some(stdout), Some(stderr)) = (child.stdout.take(), child.stderr.take()) else {
            return Err(InstallError::Spawn(std::io::Error::other(
                "installer output was not captured",
            )));
        };

        let mut stdout_reader = BufReader::new(stdout).lines();
        let mut stderr_reader = BufReader::new(stderr).lines();

        let run = async {
            let mut stdout_open = true;
            let mut stderr_open = true;
            while stdout_open || stderr_open {
                tokio::select! {
                    line = stdout_reader.next_line(), if stdout_open => match line {
                        Ok(Some(line)) => sink.emit(&Event::InstallerOutput(line)),
                        _ => stdout_open = false,
                    },
                    line = stderr_reader.next_line(), if stderr_open => match line {
                        Ok(Some(line)) => sink.emit(&Event::InstallerOutput(line)),
                        _ => stderr_open = false,
                    },
                }
            }
            child.wait().await
        };

        let result = timeout(INSTALL_TIMEOUT, run).await;
        match result {
            Ok(Ok(status)) if status.success() => Ok(()),
            Ok(Ok(status)) => Err(InstallError::Exit(status.code())),
            Ok(Err(e)) => Err(InstallError::Wait(e)),
            Err(_) => {
                let _ = child.kill().await;
                Err(InstallError::Timeout(INSTALL_TIMEOUT.as_secs()))
            }
        }
    }
}

/// Pre-configured tool manager for shadcn/ui
pub fn shadcn_tool() -> ToolManager {
    ToolManager::new(shadcn_config())
}

pub fn shadcn_config() -> ToolConfig {
    ToolConfig {
        display_name: "shadcn/ui",
        program: "npx",
        package: "shadcn@latest",
        marker_file: "components.json",
        component_dir: "components/ui",
        component_extension: "tsx",
        docs_url: "https://ui.shadcn.com/docs",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_command() {
        let config = shadcn_config();
        assert_eq!(
            config.add_command(ComponentId::DropdownMenu),
            "npx shadcn@latest add dropdown-menu --yes --overwrite"
        );
        assert_eq!(config.init_command(), "npx shadcn@latest init");
    }

    #[test]
    fn test_exit_error_message() {
        assert_eq!(
            InstallError::Exit(Some(1)).to_string(),
            "installer exited with code 1"
        );
        assert_eq!(
            InstallError::Exit(None).to_string(),
            "installer exited with code unknown"
        );
    }

    #[tokio::test]
    async fn test_missing_program_is_spawn_error() {
        let tool = ToolManager::new(ToolConfig {
            program: "pagegen-no-such-launcher",
            ..shadcn_config()
        });
        let dir = tempfile::tempdir().unwrap();

        assert!(!tool.probe().await);
        let err = tool
            .add(ComponentId::Button, dir.path(), &crate::events::NullSink)
            .await
            .unwrap_err();
        assert!(matches!(err, InstallError::Spawn(_)));
    }
}
