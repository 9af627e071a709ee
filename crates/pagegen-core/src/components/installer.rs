//! Reconcile required components against a host project

use super::resolver::ComponentId;
use super::tool::ComponentTool;
use crate::events::{Event, EventSink};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why the whole install stage was skipped
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Precondition {
    #[error("{tool} is not initialized in this project ({} not found)", .marker.display())]
    NotInitialized {
        tool: &'static str,
        marker: PathBuf,
        init_command: String,
    },

    #[error("{tool} CLI not available. Skipping component auto-install.")]
    ToolUnavailable {
        tool: &'static str,
        docs_url: &'static str,
    },
}

impl Precondition {
    /// What the user can do about it
    pub fn hint(&self) -> String {
        match self {
            Precondition::NotInitialized { init_command, .. } => {
                format!("Please run: {}", init_command)
            }
            Precondition::ToolUnavailable { docs_url, .. } => {
                format!("Install the components manually: {}", docs_url)
            }
        }
    }
}

/// Per-component result of one install pass
///
/// Every required component lands in exactly one of the three sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallOutcome {
    pub installed: BTreeSet<ComponentId>,
    pub skipped: BTreeSet<ComponentId>,
    pub failed: BTreeSet<ComponentId>,
}

impl InstallOutcome {
    /// Union of all three partitions
    pub fn all(&self) -> BTreeSet<ComponentId> {
        self.installed
            .iter()
            .chain(&self.skipped)
            .chain(&self.failed)
            .copied()
            .collect()
    }

    /// True when the sets are pairwise disjoint and cover exactly `required`
    pub fn partitions(&self, required: &BTreeSet<ComponentId>) -> bool {
        let total = self.installed.len() + self.skipped.len() + self.failed.len();
        total == required.len() && &self.all() == required
    }
}

/// Checks and installs components in one project root
pub struct ComponentInstaller<'a, T: ComponentTool> {
    tool: &'a T,
    root: &'a Path,
}

impl<'a, T: ComponentTool> ComponentInstaller<'a, T> {
    pub fn new(tool: &'a T, root: &'a Path) -> Self {
        Self { tool, root }
    }

    /// Whether the project carries the tool's marker file
    pub async fn is_initialized(&self) -> bool {
        exists(&self.root.join(self.tool.config().marker_file)).await
    }

    /// Path an installed component occupies
    pub fn component_path(&self, id: ComponentId) -> PathBuf {
        let config = self.tool.config();
        self.root
            .join(config.component_dir)
            .join(format!("{}.{}", id.as_str(), config.component_extension))
    }

    pub async fn is_present(&self, id: ComponentId) -> bool {
        exists(&self.component_path(id)).await
    }

    /// Check preconditions, then install whatever is missing
    ///
    /// A failed install is recorded and the remaining components are still
    /// processed. `Err` means nothing was attempted.
    pub async fn install_missing(
        &self,
        required: &BTreeSet<ComponentId>,
        sink: &dyn EventSink,
    ) -> Result<InstallOutcome, Precondition> {
        let config = self.tool.config();

        if !self.is_initialized().await {
            return Err(Precondition::NotInitialized {
                tool: config.display_name,
                marker: PathBuf::from(config.marker_file),
                init_command: config.init_command(),
            });
        }

        if !self.tool.probe().await {
            return Err(Precondition::ToolUnavailable {
                tool: config.display_name,
                docs_url: config.docs_url,
            });
        }

        sink.emit(&Event::CheckingComponents {
            count: required.len(),
        });

        let mut outcome = InstallOutcome::default();
        for &id in required {
            if self.is_present(id).await {
                sink.emit(&Event::ComponentPresent(id));
                outcome.skipped.insert(id);
                continue;
            }

            sink.emit(&Event::ComponentInstalling(id));
            match self.tool.add(id, self.root, sink).await {
                Ok(()) => {
                    sink.emit(&Event::ComponentInstalled(id));
                    outcome.installed.insert(id);
                }
                Err(e) => {
                    sink.emit(&Event::ComponentFailed {
                        id,
                        reason: e.to_string(),
                    });
                    outcome.failed.insert(id);
                }
            }
        }

        Ok(outcome)
    }
}

async fn exists(path: &Path) -> bool {
    tokio::fs::try_exists(path).await.unwrap_or(false)
}
