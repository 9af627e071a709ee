//! Pipeline events rendered as cliclack log lines

use crate::events::{Event, EventSink};
use console::style;
use std::path::{Path, PathBuf};

/// Shows progress inside a cliclack session, with paths relative to the
/// project root
pub struct CliclackSink {
    root: PathBuf,
}

impl CliclackSink {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}

impl EventSink for CliclackSink {
    fn emit(&self, event: &Event) {
        // A failed terminal write must not abort generation
        let _ = match event {
            Event::Planned { count } => cliclack::log::info(format!("Planned {} file(s)", count)),
            Event::InstallSkipped(reason) => {
                let _ = cliclack::log::warning(reason);
                cliclack::log::info(reason.hint())
            }
            Event::CheckingComponents { count } => {
                cliclack::log::info(format!("Checking {} shadcn components...", count))
            }
            Event::ComponentPresent(id) => {
                cliclack::log::remark(style(format!("{} already installed", id)).dim())
            }
            Event::ComponentInstalling(id) => {
                cliclack::log::step(format!("{} missing, installing...", id))
            }
            Event::InstallerOutput(line) => cliclack::log::remark(style(line).dim()),
            Event::ComponentInstalled(id) => cliclack::log::success(format!("Installed {}", id)),
            Event::ComponentFailed { id, reason } => {
                cliclack::log::error(format!("Failed to install {}: {}", id, reason))
            }
            Event::ExistingFiles(paths) => {
                let listing: Vec<String> = paths
                    .iter()
                    .map(|p| format!("  - {}", self.relative(p).display()))
                    .collect();
                let _ = cliclack::log::warning(format!(
                    "Found {} existing file(s):\n{}",
                    paths.len(),
                    listing.join("\n")
                ));
                cliclack::log::info("Overwriting existing files...")
            }
            Event::FileWritten { path, status } => cliclack::log::remark(
                style(format!("{}: {}", status, self.relative(path).display())).dim(),
            ),
        };
    }
}
